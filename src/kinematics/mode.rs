//! Swimming-mode selection.
//!
//! Two prescribed-kinematics modes are supported, distinguished by body
//! proportions and by distinct envelope/wavelength laws:
//!
//! - **Anguilliform** (eel-like, thin): exponential envelope, λ* = 0.65,
//!   typical profiles NACA0006/0008.
//! - **Carangiform** (tuna-like, thick): quadratic envelope, λ* = 1.0,
//!   typical profiles NACA0012/0018/0024.

use std::fmt;
use std::str::FromStr;

use super::config::ConfigError;
use super::envelope::{anguilliform_envelope, carangiform_envelope};

/// Thickness-ratio threshold separating the two modes (inclusive on the
/// anguilliform side).
pub const MODE_THICKNESS_THRESHOLD: f64 = 0.10;

/// Upper thickness ratio documented for anguilliform swimmers.
const ANGUILLIFORM_MAX_THICKNESS: f64 = 0.08;
/// Lower thickness ratio documented for carangiform swimmers.
const CARANGIFORM_MIN_THICKNESS: f64 = 0.12;

/// Prescribed swimming mode.
///
/// Immutable once derived; determines which envelope function, which
/// wavelength constant, and which documented thickness range apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwimmingMode {
    Anguilliform,
    Carangiform,
}

impl SwimmingMode {
    /// Select the mode from a body thickness ratio.
    ///
    /// Deterministic threshold rule: `h/c <= 0.10` selects anguilliform,
    /// anything thicker selects carangiform.
    ///
    /// # Example
    ///
    /// ```
    /// use ibkin_rs::SwimmingMode;
    ///
    /// assert_eq!(SwimmingMode::from_thickness_ratio(0.08), SwimmingMode::Anguilliform);
    /// assert_eq!(SwimmingMode::from_thickness_ratio(0.12), SwimmingMode::Carangiform);
    /// ```
    pub fn from_thickness_ratio(thickness_ratio: f64) -> Self {
        if thickness_ratio <= MODE_THICKNESS_THRESHOLD {
            SwimmingMode::Anguilliform
        } else {
            SwimmingMode::Carangiform
        }
    }

    /// Mode-specific nondimensional wavelength λ*.
    #[inline]
    pub fn wavelength(&self) -> f64 {
        match self {
            SwimmingMode::Anguilliform => 0.65,
            SwimmingMode::Carangiform => 1.0,
        }
    }

    /// Evaluate the mode's amplitude envelope at normalized position `x`.
    #[inline]
    pub fn envelope(&self, x: f64, a_max: f64) -> f64 {
        match self {
            SwimmingMode::Anguilliform => anguilliform_envelope(x, a_max),
            SwimmingMode::Carangiform => carangiform_envelope(x),
        }
    }

    /// Advisory check of the thickness ratio against the mode's documented
    /// biological range.
    ///
    /// Returns a warning message when the thickness falls outside the range
    /// (anguilliform expected ≤ 0.08, carangiform expected ≥ 0.12). This is
    /// a diagnostic only; the simulation proceeds regardless.
    pub fn thickness_advisory(&self, thickness_ratio: f64) -> Option<String> {
        match self {
            SwimmingMode::Anguilliform if thickness_ratio > ANGUILLIFORM_MAX_THICKNESS => {
                Some(format!(
                    "WARNING: anguilliform mode typically uses h/c <= {} (NACA0006, 0008), got {}",
                    ANGUILLIFORM_MAX_THICKNESS, thickness_ratio
                ))
            }
            SwimmingMode::Carangiform if thickness_ratio < CARANGIFORM_MIN_THICKNESS => {
                Some(format!(
                    "WARNING: carangiform mode typically uses h/c >= {} (NACA0012, 0018, 0024), got {}",
                    CARANGIFORM_MIN_THICKNESS, thickness_ratio
                ))
            }
            _ => None,
        }
    }
}

impl fmt::Display for SwimmingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwimmingMode::Anguilliform => write!(f, "Anguilliform"),
            SwimmingMode::Carangiform => write!(f, "Carangiform"),
        }
    }
}

impl FromStr for SwimmingMode {
    type Err = ConfigError;

    /// Parse a configuration-surface mode identifier.
    ///
    /// Only `"anguilliform"` and `"carangiform"` are recognized; anything
    /// else is a fatal configuration error since no envelope or wavelength
    /// can be selected for it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anguilliform" => Ok(SwimmingMode::Anguilliform),
            "carangiform" => Ok(SwimmingMode::Carangiform),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}
