//! Extrapolation methods for curves.
//!
//! An extrapolator extends a curve beyond either end of its node range,
//! given the boundary node and the interpolant slope there:
//!
//! - [`FlatExtrapolator`]: Constant extension from the boundary node
//! - [`LinearExtrapolator`]: Continuation with the boundary slope
//!
//! | Method | Use Case | Properties |
//! |--------|----------|------------|
//! | Flat | Default, conservative | Flat zero rate under log-per-time values |
//! | Linear | Trend continuation | May produce negative rates |
//!
//! Extrapolators work in whatever space the interpolant lives in; they never
//! see the original curve values.

mod flat;
mod linear;

pub use flat::FlatExtrapolator;
pub use linear::LinearExtrapolator;

/// Trait for extrapolation methods.
///
/// Extrapolators extend curves beyond their first or last observed point.
pub trait Extrapolator: Send + Sync {
    /// Extrapolates to `t` from the nearest boundary node.
    ///
    /// # Arguments
    ///
    /// * `t` - Target point, outside the node range
    /// * `boundary_t` - Position of the nearest boundary node
    /// * `boundary_value` - Value at the boundary node
    /// * `boundary_derivative` - Interpolant slope at the boundary node
    fn extrapolate(
        &self,
        t: f64,
        boundary_t: f64,
        boundary_value: f64,
        boundary_derivative: f64,
    ) -> f64;

    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;
}
