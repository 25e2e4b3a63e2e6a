//! The undulating foil: shape/velocity generation over the body layout and
//! the interface handed to the external fluid-structure coupling.

mod foil;

pub use foil::{FoilError, PositionUpdatePolicy, UndulatingFoil};
