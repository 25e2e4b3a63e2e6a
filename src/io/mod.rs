//! I/O: append-only validation logging and restart checkpoints.
//!
//! # File Formats
//!
//! ## Validation Log
//!
//! ```text
//! # Validation data for prescribed undulatory kinematics
//! # NACA profile: NACA0008
//! # Thickness ratio: 0.08
//! # Swimming mode: Anguilliform
//! # Wavelength: 0.65
//! # Re = 5000, St = 0.4, f = 2
//! #
//! # Columns: Time TailAmplitude TailVelocity Swimming_Speed Thrust Power Strouhal_Computed
//! 0.00000000e0 2.39315820e-2 -1.22012131e0 0.00000000e0 0.00000000e0 0.00000000e0 0.00000000e0
//! ```
//!
//! Header once per run, then one whitespace-separated row per logging
//! interval; appended, never rewritten.
//!
//! ## Restart Checkpoint
//!
//! ```text
//! # undulating foil restart checkpoint
//! time 1.25
//! center_of_mass 0 0 0
//! incremented_angle 0 0 0
//! tagged_position 0.95 0 0
//! ```

mod checkpoint;
mod validation_log;

pub use checkpoint::{Checkpoint, CheckpointError};
pub use validation_log::{
    PerformanceSample, ValidationLogError, ValidationLogger, ValidationRecord, computed_strouhal,
};
