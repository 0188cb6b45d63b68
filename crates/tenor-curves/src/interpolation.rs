//! Interpolation and extrapolation selectors for curves.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tenor_math::extrapolation::{Extrapolator, FlatExtrapolator, LinearExtrapolator};
use tenor_math::interpolation::{CubicSpline, HarmonicSpline, Interpolator, LinearInterpolator};

use crate::error::CurveResult;

/// Interpolation schemes available to curves.
///
/// Schemes operate on encoded values and are independent of the
/// [`InterpolationEntity`](crate::entity::InterpolationEntity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationMethod {
    /// Piecewise linear.
    #[default]
    Linear,

    /// Natural cubic spline.
    CubicSpline,

    /// Monotone cubic Hermite with harmonic-mean slopes.
    HarmonicSpline,
}

impl InterpolationMethod {
    /// Returns true if this method produces curves with a continuous slope.
    #[must_use]
    pub fn is_smooth(&self) -> bool {
        matches!(self, Self::CubicSpline | Self::HarmonicSpline)
    }

    /// Minimum number of nodes the scheme needs; below it linear is used.
    #[must_use]
    pub fn min_points(&self) -> usize {
        match self {
            Self::Linear => 1,
            Self::CubicSpline => CubicSpline::MIN_POINTS,
            Self::HarmonicSpline => HarmonicSpline::MIN_POINTS,
        }
    }

    /// Builds an interpolant over encoded nodes.
    ///
    /// Too few nodes for the selected scheme fall back to linear
    /// interpolation, which is what the higher-order schemes reduce to on
    /// two nodes anyway.
    pub(crate) fn build(self, xs: Vec<f64>, ys: Vec<f64>) -> CurveResult<Arc<dyn Interpolator>> {
        if xs.len() < self.min_points() {
            return Ok(Arc::new(LinearInterpolator::new(xs, ys)?));
        }

        let interpolator: Arc<dyn Interpolator> = match self {
            Self::Linear => Arc::new(LinearInterpolator::new(xs, ys)?),
            Self::CubicSpline => Arc::new(CubicSpline::new(xs, ys)?),
            Self::HarmonicSpline => Arc::new(HarmonicSpline::new(xs, ys)?),
        };
        Ok(interpolator)
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linear => "LINEAR",
            Self::CubicSpline => "CUBIC_SPLINE",
            Self::HarmonicSpline => "HARMONIC_SPLINE",
        };
        write!(f, "{name}")
    }
}

/// Extrapolation policies beyond the first and last node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtrapolationMethod {
    /// Hold the boundary encoded value.
    #[default]
    Constant,

    /// Continue with the interpolant slope at the boundary node.
    Linear,
}

impl ExtrapolationMethod {
    /// Returns the extrapolator implementing this policy.
    #[must_use]
    pub fn extrapolator(self) -> Arc<dyn Extrapolator> {
        match self {
            Self::Constant => Arc::new(FlatExtrapolator::new()),
            Self::Linear => Arc::new(LinearExtrapolator::new()),
        }
    }
}

impl fmt::Display for ExtrapolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "CONSTANT",
            Self::Linear => "LINEAR",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_each_method() {
        let xs = vec![1.0, 2.0, 5.0, 10.0];
        let ys = vec![-0.01, -0.015, -0.021, -0.022];

        for (method, name) in [
            (InterpolationMethod::Linear, "Linear"),
            (InterpolationMethod::CubicSpline, "Cubic Spline"),
            (InterpolationMethod::HarmonicSpline, "Harmonic Spline"),
        ] {
            let interp = method.build(xs.clone(), ys.clone()).unwrap();
            assert_eq!(interp.name(), name);
            assert_eq!(interp.interpolate(5.0).unwrap(), -0.021);
        }
    }

    #[test]
    fn test_fallback_to_linear() {
        let interp = InterpolationMethod::CubicSpline
            .build(vec![1.0, 3.0], vec![0.0, 2.0])
            .unwrap();
        assert_eq!(interp.name(), "Linear");
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 1.0);

        let interp = InterpolationMethod::HarmonicSpline
            .build(vec![1.0], vec![0.5])
            .unwrap();
        assert_eq!(interp.name(), "Linear");
        assert_eq!(interp.interpolate(1.0).unwrap(), 0.5);
    }

    #[test]
    fn test_extrapolators() {
        assert_eq!(ExtrapolationMethod::Constant.extrapolator().name(), "Flat");
        assert_eq!(ExtrapolationMethod::Linear.extrapolator().name(), "Linear");
    }

    #[test]
    fn test_defaults_and_display() {
        assert_eq!(InterpolationMethod::default(), InterpolationMethod::Linear);
        assert_eq!(ExtrapolationMethod::default(), ExtrapolationMethod::Constant);
        assert_eq!(InterpolationMethod::HarmonicSpline.to_string(), "HARMONIC_SPLINE");
        assert_eq!(ExtrapolationMethod::Constant.to_string(), "CONSTANT");
        assert!(InterpolationMethod::CubicSpline.is_smooth());
        assert!(!InterpolationMethod::Linear.is_smooth());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&InterpolationMethod::CubicSpline).unwrap();
        assert_eq!(json, "\"CUBIC_SPLINE\"");

        let method: ExtrapolationMethod = serde_json::from_str("\"LINEAR\"").unwrap();
        assert_eq!(method, ExtrapolationMethod::Linear);
    }
}
