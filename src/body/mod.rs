//! Marker-based body representation: layout construction and per-timestep
//! state.

mod layout;
mod state;

pub use layout::{BodyLayout, MeshSpacing, Section};
pub use state::{BodyState, RigidPose};
