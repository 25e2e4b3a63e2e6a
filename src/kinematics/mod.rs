//! Swimming-mode kinematics: mode selection, amplitude envelopes, and the
//! closed-form displacement/velocity laws.

mod config;
mod envelope;
mod evaluator;
mod mode;

pub use config::{
    CHORD_LENGTH, ComplianceReport, ConfigError, INFLOW_SPEED, KinematicConfig, KinematicOptions,
    REFERENCE_A_MAX, REFERENCE_REYNOLDS, REFERENCE_ST_HIGH, REFERENCE_ST_LOW,
};
pub use envelope::{
    ANGUILLIFORM_ALPHA, CARANGIFORM_C0, CARANGIFORM_C1, CARANGIFORM_C2, anguilliform_envelope,
    carangiform_envelope,
};
pub use evaluator::Kinematics;
pub use mode::SwimmingMode;
