//! Harmonic spline interpolation.

use crate::error::MathResult;
use crate::interpolation::{bracket, check_range, segment_index, validate_nodes, Bracket, Interpolator};

/// Monotone cubic Hermite interpolation with harmonic-mean node slopes.
///
/// The Fritsch–Butland construction: interior slopes are a weighted
/// harmonic mean of the adjacent secants, and zero where the secants change
/// sign. Monotone data therefore yields a monotone interpolant without the
/// overshoot of a natural cubic spline.
///
/// Two nodes give the straight line through them.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{HarmonicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 1.0, 2.0];
///
/// let spline = HarmonicSpline::new(xs, ys).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// assert!((y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HarmonicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// First derivatives at each knot
    slopes: Vec<f64>,
    allow_extrapolation: bool,
}

impl HarmonicSpline {
    /// Minimum number of nodes.
    pub const MIN_POINTS: usize = 2;

    /// Creates a harmonic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if the nodes are not finite and strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, Self::MIN_POINTS)?;

        let slopes = compute_slopes(&xs, &ys);
        log::trace!("harmonic spline over {} nodes", xs.len());

        Ok(Self {
            xs,
            ys,
            slopes,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }
}

impl Interpolator for HarmonicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;

        let i = match bracket(&self.xs, x) {
            Bracket::Node(i) => return Ok(self.ys[i]),
            Bracket::Segment(i) => i,
        };

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        Ok(h00 * self.ys[i]
            + h10 * h * self.slopes[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.slopes[i + 1])
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;

        let i = segment_index(&self.xs, x);

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;

        let dh00 = (6.0 * t2 - 6.0 * t) / h;
        let dh10 = 3.0 * t2 - 4.0 * t + 1.0;
        let dh01 = (-6.0 * t2 + 6.0 * t) / h;
        let dh11 = 3.0 * t2 - 2.0 * t;

        Ok(dh00 * self.ys[i]
            + dh10 * self.slopes[i]
            + dh01 * self.ys[i + 1]
            + dh11 * self.slopes[i + 1])
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    fn name(&self) -> &'static str {
        "Harmonic Spline"
    }
}

/// Node slopes for the Fritsch–Butland scheme.
fn compute_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let d: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    if n == 2 {
        return vec![d[0], d[0]];
    }

    let mut m = vec![0.0; n];

    for k in 1..n - 1 {
        if d[k - 1] * d[k] > 0.0 {
            let w1 = 2.0 * h[k] + h[k - 1];
            let w2 = h[k] + 2.0 * h[k - 1];
            m[k] = 3.0 * (h[k - 1] + h[k]) / (w1 / d[k - 1] + w2 / d[k]);
        }
    }

    m[0] = end_slope(h[0], h[1], d[0], d[1]);
    m[n - 1] = end_slope(h[n - 2], h[n - 3], d[n - 2], d[n - 3]);

    m
}

/// One-sided three-point slope, limited so the end segment stays monotone.
fn end_slope(h0: f64, h1: f64, d0: f64, d1: f64) -> f64 {
    let m = ((2.0 * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
    if m * d0 <= 0.0 {
        0.0
    } else if d0 * d1 < 0.0 && m.abs() > (3.0 * d0).abs() {
        3.0 * d0
    } else {
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_harmonic_through_points() {
        let xs = vec![0.25, 1.0, 2.0, 5.0, 10.0];
        let ys = vec![0.03, 0.028, 0.031, 0.035, 0.036];

        let spline = HarmonicSpline::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(spline.interpolate(*x).unwrap(), *y);
        }
    }

    #[test]
    fn test_two_points_is_linear() {
        let spline = HarmonicSpline::new(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();

        assert_relative_eq!(spline.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(1.5).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(2.5).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_preserves_monotonicity() {
        let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = vec![0.0, 0.1, 0.2, 2.0, 2.1, 2.2];

        let spline = HarmonicSpline::new(xs, ys).unwrap();

        let mut prev = spline.interpolate(0.0).unwrap();
        for i in 1..=500 {
            let x = f64::from(i) * 0.01;
            let y = spline.interpolate(x).unwrap();
            assert!(y >= prev - 1e-14, "not monotone at x={x}: {y} < {prev}");
            prev = y;
        }
    }

    #[test]
    fn test_flat_at_local_extremum() {
        let spline = HarmonicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();

        assert_eq!(spline.slopes[1], 0.0);
        // No overshoot above the peak
        for x in [0.5, 0.9, 1.1, 1.5] {
            assert!(spline.interpolate(x).unwrap() <= 1.0);
        }
    }

    #[test]
    fn test_extrapolation_flag() {
        let spline = HarmonicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();
        assert!(spline.interpolate(2.5).is_err());

        let spline = spline.with_extrapolation();
        assert_relative_eq!(spline.interpolate(2.5).unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_points() {
        assert!(HarmonicSpline::new(vec![1.0], vec![1.0]).is_err());
    }
}
