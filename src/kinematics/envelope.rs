//! Amplitude envelopes scaling the lateral undulation along the body.
//!
//! Both envelopes are pure functions of the normalized streamwise coordinate
//! `X` (chord units, `X = 0` at the head, `X = 1` at the tail). They are
//! well-defined for any real `X`; callers are responsible for supplying sane
//! coordinates.

/// Exponential growth rate of the anguilliform envelope.
pub const ANGUILLIFORM_ALPHA: f64 = 2.18;

/// Constant term of the carangiform envelope polynomial.
pub const CARANGIFORM_C0: f64 = 0.02;
/// Linear coefficient of the carangiform envelope polynomial.
pub const CARANGIFORM_C1: f64 = -0.08;
/// Quadratic coefficient of the carangiform envelope polynomial.
pub const CARANGIFORM_C2: f64 = 0.16;

/// Anguilliform amplitude envelope: `A(X) = A_max · exp[2.18 (X − 1)]`.
///
/// Monotonically increasing from `A_max·e^{-2.18} ≈ 0.0113` at the head to
/// exactly `A_max` at the tail (for `A_max = 0.1`).
///
/// # Example
///
/// ```
/// use ibkin_rs::anguilliform_envelope;
///
/// let tail = anguilliform_envelope(1.0, 0.1);
/// assert!((tail - 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn anguilliform_envelope(x: f64, a_max: f64) -> f64 {
    a_max * (ANGUILLIFORM_ALPHA * (x - 1.0)).exp()
}

/// Carangiform amplitude envelope: `A(X) = 0.02 − 0.08 X + 0.16 X²`.
///
/// Quadratic with an interior minimum at `X = 0.25`; `A(0) = 0.02` and
/// `A(1) = 0.10`. The coefficients are the literal reference constants and
/// do not rescale with amplitude; the tail value matches `A_max` only for
/// the reference `A_max = 0.1`.
#[inline]
pub fn carangiform_envelope(x: f64) -> f64 {
    CARANGIFORM_C0 + CARANGIFORM_C1 * x + CARANGIFORM_C2 * x * x
}
