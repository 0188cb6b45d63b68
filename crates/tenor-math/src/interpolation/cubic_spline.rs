//! Natural cubic spline interpolation.

use crate::error::MathResult;
use crate::interpolation::{bracket, check_range, segment_index, validate_nodes, Bracket, Interpolator};

/// Natural cubic spline.
///
/// Piecewise cubic through every node with continuous slope and curvature.
/// The curvature (second derivative, the "moment") vanishes at both ends.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{CubicSpline, Interpolator};
///
/// let spline = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
/// assert!((spline.interpolate(0.5).unwrap() - 0.6875).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    moments: Vec<f64>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Minimum number of nodes.
    pub const MIN_POINTS: usize = 3;

    /// Fits the spline through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Fails with fewer than [`Self::MIN_POINTS`] nodes, mismatched lengths,
    /// non-finite nodes or times that are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, Self::MIN_POINTS)?;

        let moments = natural_moments(&xs, &ys);
        log::trace!("natural cubic spline over {} nodes", xs.len());

        Ok(Self {
            xs,
            ys,
            moments,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Width, secant slope and local weights of segment `i` at `x`.
    fn local(&self, i: usize, x: f64) -> (f64, f64, f64, f64) {
        let h = self.xs[i + 1] - self.xs[i];
        let secant = (self.ys[i + 1] - self.ys[i]) / h;
        let right = (x - self.xs[i]) / h;
        (h, secant, 1.0 - right, right)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;

        let i = match bracket(&self.xs, x) {
            Bracket::Node(i) => return Ok(self.ys[i]),
            Bracket::Segment(i) => i,
        };
        let (h, _, wl, wr) = self.local(i, x);
        let (ml, mr) = (self.moments[i], self.moments[i + 1]);

        let chord = wl * self.ys[i] + wr * self.ys[i + 1];
        let bend = (wl * (wl * wl - 1.0) * ml + wr * (wr * wr - 1.0) * mr) * h * h / 6.0;
        Ok(chord + bend)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x, self.allow_extrapolation)?;

        let i = segment_index(&self.xs, x);
        let (h, secant, wl, wr) = self.local(i, x);
        let (ml, mr) = (self.moments[i], self.moments[i + 1]);

        Ok(secant + h / 6.0 * ((3.0 * wr * wr - 1.0) * mr - (3.0 * wl * wl - 1.0) * ml))
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
        "Cubic Spline"
    }
}

/// Solves for the node moments of a natural spline.
///
/// Interior rows read
/// `h[i-1] m[i-1] + 2 (h[i-1] + h[i]) m[i] + h[i] m[i+1] = 6 (s[i] - s[i-1])`
/// with segment widths `h` and secant slopes `s`; the end moments are 0.
/// The system is diagonally dominant; no pivoting is needed.
fn natural_moments(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let widths: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let secants: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / widths[i]).collect();

    // Forward sweep over interior rows 1..n-1; c[i] and d[i] hold the
    // eliminated super-diagonal and right-hand side.
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];
    for i in 1..n - 1 {
        let lower = widths[i - 1];
        let pivot = 2.0 * (widths[i - 1] + widths[i]) - lower * c[i - 1];
        c[i] = widths[i] / pivot;
        d[i] = (6.0 * (secants[i] - secants[i - 1]) - lower * d[i - 1]) / pivot;
    }

    let mut moments = vec![0.0; n];
    for i in (1..n - 1).rev() {
        moments[i] = d[i] - c[i] * moments[i + 1];
    }
    moments
}
