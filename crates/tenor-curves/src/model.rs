//! Registry of named curves.
//!
//! Curves that depend on other curves (see
//! [`SpreadDiscountCurve`](crate::spread::SpreadDiscountCurve)) look them up
//! by name in an [`AnalyticModel`] passed to each query.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::discount::DiscountCurveInterface;
use crate::error::{CurveError, CurveResult};

/// Read-only map from curve name to discount curve.
///
/// Cloning is cheap; the curves are shared.
///
/// # Example
///
/// ```rust
/// use tenor_curves::prelude::*;
///
/// let ois = DiscountCurve::from_zero_rates(
///     "EUR-OIS",
///     &[1.0, 5.0],
///     &[0.02, 0.025],
///     None,
///     &CurveOptions::default(),
/// )
/// .unwrap();
///
/// let model = AnalyticModel::new().with_curve(ois);
/// let curve = model.discount_curve("EUR-OIS").unwrap();
/// assert!(curve.discount_factor(1.0).unwrap() < 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyticModel {
    curves: HashMap<String, Arc<dyn DiscountCurveInterface>>,
}

impl AnalyticModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curve under its own name, replacing any curve of that name.
    #[must_use]
    pub fn with_curve<C>(self, curve: C) -> Self
    where
        C: DiscountCurveInterface + 'static,
    {
        let name = curve.name().to_string();
        self.with_shared_curve(name, Arc::new(curve))
    }

    /// Adds a shared curve under `name`.
    #[must_use]
    pub fn with_shared_curve(
        mut self,
        name: impl Into<String>,
        curve: Arc<dyn DiscountCurveInterface>,
    ) -> Self {
        self.curves.insert(name.into(), curve);
        self
    }

    /// Returns the curve registered under `name`.
    pub fn discount_curve(&self, name: &str) -> CurveResult<&dyn DiscountCurveInterface> {
        self.curves
            .get(name)
            .map(|c| c.as_ref())
            .ok_or_else(|| CurveError::curve_not_found(name))
    }

    /// Returns a shared handle to the curve registered under `name`.
    pub fn shared_curve(&self, name: &str) -> CurveResult<Arc<dyn DiscountCurveInterface>> {
        self.curves
            .get(name)
            .cloned()
            .ok_or_else(|| CurveError::curve_not_found(name))
    }

    /// Discount factor of the named curve, resolved within this model.
    pub fn discount_factor(&self, name: &str, maturity: f64) -> CurveResult<f64> {
        self.discount_curve(name)?
            .discount_factor_in_model(Some(self), maturity)
    }

    /// Follows the dependencies starting at the curve named `name`.
    ///
    /// # Errors
    ///
    /// Fails with a lookup error if a curve on the chain is missing or the
    /// chain returns to a curve it already passed through.
    pub fn check_dependencies(&self, name: &str) -> CurveResult<()> {
        let mut visited = HashSet::new();
        let mut current = name;
        loop {
            if !visited.insert(current) {
                return Err(CurveError::cyclic_dependency(current));
            }
            match self.discount_curve(current)?.depends_on() {
                Some(next) => current = next,
                None => return Ok(()),
            }
        }
    }

    /// Returns true if a curve is registered under `name`.
    #[must_use]
    pub fn has_curve(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn curve_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.curves.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if no curve is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{CurveOptions, DiscountCurve};
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn flat(name: &str, rate: f64) -> DiscountCurve {
        DiscountCurve::from_zero_rates(name, &[1.0, 10.0], &[rate, rate], None, &CurveOptions::default())
            .unwrap()
    }

    #[test]
    fn test_lookup() {
        let model = AnalyticModel::new()
            .with_curve(flat("EUR-OIS", 0.02))
            .with_curve(flat("USD-SOFR", 0.04));

        assert_eq!(model.len(), 2);
        assert!(model.has_curve("EUR-OIS"));
        assert_eq!(model.curve_names(), vec!["EUR-OIS", "USD-SOFR"]);

        let curve = model.discount_curve("USD-SOFR").unwrap();
        assert_relative_eq!(curve.zero_rate(5.0).unwrap(), 0.04, max_relative = 1e-12);
        assert_relative_eq!(
            model.discount_factor("EUR-OIS", 2.0).unwrap(),
            (-0.04_f64).exp(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_missing_curve() {
        let model = AnalyticModel::new();
        assert!(model.is_empty());

        let err = model.discount_curve("GBP-SONIA").unwrap_err();
        assert_eq!(err, CurveError::curve_not_found("GBP-SONIA"));
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(model.shared_curve("GBP-SONIA").is_err());
    }

    #[test]
    fn test_replace_and_share() {
        let shared: Arc<dyn DiscountCurveInterface> = Arc::new(flat("EUR-OIS", 0.01));
        let model = AnalyticModel::new()
            .with_curve(flat("EUR-OIS", 0.02))
            .with_shared_curve("EUR-OIS", Arc::clone(&shared));

        assert_eq!(model.len(), 1);
        let curve = model.shared_curve("EUR-OIS").unwrap();
        assert!(Arc::ptr_eq(&curve, &shared));

        let copy = model.clone();
        assert!(Arc::ptr_eq(&copy.shared_curve("EUR-OIS").unwrap(), &shared));
    }
}
