//! # ibkin-rs
//!
//! Prescribed undulatory kinematics for an immersed-boundary swimming foil.
//!
//! This crate supplies the moving-boundary side of a fluid-structure
//! simulation: given a streamwise position along a chord-normalized body and
//! a simulation time, it produces the lateral centerline displacement, the
//! body-normal deformation velocity, and a consistent marker discretization
//! of the deforming surface. The building blocks:
//!
//! - Swimming-mode selection (anguilliform / carangiform) from thickness
//! - Amplitude envelopes (exponential and quadratic)
//! - Closed-form displacement/velocity laws driven by a prescribed Strouhal
//!   number
//! - Body layout construction from mesh spacing and thickness
//! - Per-marker shape/velocity generation for the external IB coupling
//! - Compliance verification against the reference parameter set
//! - Append-only validation logging and restart checkpointing
//!
//! The flow solver, force spreading/interpolation, and mesh generation are
//! external collaborators; this crate only prescribes motion.

pub mod body;
pub mod io;
pub mod kinematics;
pub mod swimmer;

// Re-export main types for convenience
pub use body::{BodyLayout, BodyState, MeshSpacing, RigidPose, Section};
pub use io::{
    Checkpoint, CheckpointError, PerformanceSample, ValidationLogError, ValidationLogger,
    ValidationRecord, computed_strouhal,
};
pub use kinematics::{
    ComplianceReport, ConfigError, KinematicConfig, KinematicOptions, Kinematics, SwimmingMode,
    anguilliform_envelope, carangiform_envelope,
};
pub use swimmer::{FoilError, PositionUpdatePolicy, UndulatingFoil};
