//! Linear extrapolation.

use super::Extrapolator;

/// Linear extrapolation - continues with the boundary slope.
///
/// The slope is the derivative of the interpolant at the boundary node, so
/// the extension joins the curve without a kink.
///
/// # Example
///
/// ```rust
/// use tenor_math::extrapolation::{LinearExtrapolator, Extrapolator};
///
/// let extrap = LinearExtrapolator;
///
/// // 5% at 10 years with 0.1% slope per year
/// let rate = extrap.extrapolate(15.0, 10.0, 0.05, 0.001);
/// assert!((rate - 0.055).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearExtrapolator;

impl LinearExtrapolator {
    /// Creates a new linear extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for LinearExtrapolator {
    fn extrapolate(&self, t: f64, boundary_t: f64, boundary_value: f64, boundary_derivative: f64) -> f64 {
        boundary_value + boundary_derivative * (t - boundary_t)
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}
