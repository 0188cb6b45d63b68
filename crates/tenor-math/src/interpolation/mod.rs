//! Interpolation methods for curve construction.
//!
//! Every scheme works on sorted `(x, y)` nodes and is oblivious to what the
//! `y` values represent. This keeps the choice of interpolation space (raw
//! value, log value, log value per time) independent of the scheme.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Piecewise linear; exact at the nodes
//! - [`CubicSpline`]: Natural cubic spline (C2)
//! - [`HarmonicSpline`]: Monotone cubic Hermite with harmonic-mean slopes (C1)
//!
//! | Method | Smoothness | Preserves monotonicity | Min nodes |
//! |--------|------------|------------------------|-----------|
//! | Linear | C0 | Yes | 1 |
//! | Cubic Spline | C2 | No | 3 |
//! | Harmonic Spline | C1 | Yes | 2 |

mod cubic_spline;
mod harmonic_spline;
mod linear;

pub use cubic_spline::CubicSpline;
pub use harmonic_spline::HarmonicSpline;
pub use linear::LinearInterpolator;

use std::cmp::Ordering;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    ///
    /// At an interior node the derivative of the segment starting at that
    /// node is returned; at the last node, that of the last segment.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Returns the name of the interpolation method.
    fn name(&self) -> &'static str;
}

/// Checks node count, matching lengths, finiteness and strict ordering.
pub(crate) fn validate_nodes(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if let Some(i) = (0..xs.len()).find(|&i| !xs[i].is_finite() || !ys[i].is_finite()) {
        return Err(MathError::invalid_input(format!(
            "node {i} is not finite: ({}, {})",
            xs[i], ys[i]
        )));
    }
    if (1..xs.len()).any(|i| xs[i] <= xs[i - 1]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Where a query falls relative to the sorted nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bracket {
    /// The query coincides with node `i`.
    Node(usize),
    /// The query lies in segment `[xs[i], xs[i + 1]]`, clamped to the end segments.
    Segment(usize),
}

/// Binary search for the segment containing x. Requires at least two nodes.
pub(crate) fn bracket(xs: &[f64], x: f64) -> Bracket {
    let last_segment = xs.len() - 2;
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Equal)) {
        Ok(i) => Bracket::Node(i),
        Err(i) => Bracket::Segment(i.saturating_sub(1).min(last_segment)),
    }
}

/// Segment index whose derivative applies at x.
pub(crate) fn segment_index(xs: &[f64], x: f64) -> usize {
    match bracket(xs, x) {
        Bracket::Node(i) => i.min(xs.len() - 2),
        Bracket::Segment(i) => i,
    }
}

pub(crate) fn check_range(xs: &[f64], x: f64, allow_extrapolation: bool) -> MathResult<()> {
    let (min, max) = (xs[0], xs[xs.len() - 1]);
    if !allow_extrapolation && (x < min || x > max) {
        return Err(MathError::extrapolation_not_allowed(x, min, max));
    }
    Ok(())
}
