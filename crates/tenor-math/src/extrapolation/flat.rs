//! Flat (constant) extrapolation.

use super::Extrapolator;

/// Flat extrapolation - constant value from the boundary node.
///
/// Applied to log discount factors per unit time this keeps the zero rate
/// constant beyond the curve ends.
///
/// # Example
///
/// ```rust
/// use tenor_math::extrapolation::{FlatExtrapolator, Extrapolator};
///
/// let extrap = FlatExtrapolator;
///
/// // Boundary: -0.02 at 10 years with a slope of 0.001
/// let value = extrap.extrapolate(15.0, 10.0, -0.02, 0.001);
/// assert_eq!(value, -0.02);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl FlatExtrapolator {
    /// Creates a new flat extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for FlatExtrapolator {
    fn extrapolate(&self, _t: f64, _boundary_t: f64, boundary_value: f64, _boundary_derivative: f64) -> f64 {
        boundary_value
    }

    fn name(&self) -> &'static str {
        "Flat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_returns_boundary_value() {
        let extrap = FlatExtrapolator::new();

        for t in [-5.0, 0.0, 21.0, 100.0, 1000.0] {
            assert_eq!(extrap.extrapolate(t, 20.0, 0.045, 0.002), 0.045);
        }
    }

    #[test]
    fn test_flat_ignores_derivative() {
        let extrap = FlatExtrapolator;

        for deriv in [-0.01, 0.0, 0.001, 0.1] {
            assert_eq!(extrap.extrapolate(20.0, 10.0, 0.03, deriv), 0.03);
        }
    }
}
