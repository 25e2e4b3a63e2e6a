//! Closed-form displacement and velocity laws.
//!
//! The motion is a traveling wave along the chord scaled by the mode's
//! amplitude envelope:
//!
//! ```text
//! Y(X,t) = A(X) · sin(2π(St·t / 2A_max − X/λ*))
//! V(X,t) = π·St · A(X)/A_max · cos(2π(St·t / 2A_max − X/λ*))
//! ```
//!
//! `V` is the exact time-derivative of `Y`. The phase sign is chosen so
//! that this holds; the cosine is even, so `V` itself is unaffected by the
//! choice and the displacement differs only by the (arbitrary) lateral
//! orientation. Both are pure functions of `(X, t)`: there is no internal
//! time integration and no drift, so evaluating at an arbitrary `t` after a
//! restart reproduces the exact motion of an uninterrupted run.

use std::f64::consts::PI;

use super::config::KinematicConfig;

/// Kinematics evaluator for one configured run.
///
/// Wraps the frozen [`KinematicConfig`]; frequency and angular rate were
/// derived once at configuration time.
///
/// # Example
///
/// ```
/// use ibkin_rs::{KinematicConfig, KinematicOptions, Kinematics};
///
/// let (config, _) = KinematicConfig::from_options(&KinematicOptions::default());
/// let kin = Kinematics::new(config);
///
/// // t = 0 gives the fixed, nonzero initial shape
/// let y0 = kin.displacement(1.0, 0.0);
/// assert!(y0.abs() > 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct Kinematics {
    config: KinematicConfig,
}

impl Kinematics {
    /// Create an evaluator from a frozen configuration.
    pub fn new(config: KinematicConfig) -> Self {
        Self { config }
    }

    /// The frozen configuration.
    pub fn config(&self) -> &KinematicConfig {
        &self.config
    }

    /// Traveling-wave phase at `(x, t)`.
    ///
    /// `St·t / 2A_max` equals `f·t`, so the derived frequency is reused.
    /// Time leads position in the phase, which makes the velocity law the
    /// exact time-derivative of the displacement law.
    #[inline]
    fn phase(&self, x: f64, t: f64) -> f64 {
        2.0 * PI * (self.config.frequency * t - x / self.config.wavelength)
    }

    /// Amplitude envelope at normalized position `x`.
    #[inline]
    pub fn envelope(&self, x: f64) -> f64 {
        self.config.mode.envelope(x, self.config.a_max)
    }

    /// Lateral centerline displacement `Y(x, t)`.
    #[inline]
    pub fn displacement(&self, x: f64, t: f64) -> f64 {
        self.envelope(x) * self.phase(x, t).sin()
    }

    /// Body-normal deformation velocity `V(x, t) = ∂Y/∂t`.
    #[inline]
    pub fn velocity(&self, x: f64, t: f64) -> f64 {
        PI * self.config.strouhal * (self.envelope(x) / self.config.a_max) * self.phase(x, t).cos()
    }
}
