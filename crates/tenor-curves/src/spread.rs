//! Discount curve defined as a spread over another curve.

use std::fmt;

use tenor_core::Date;

use crate::discount::{DiscountCurveInterface, ZeroRatePolicy};
use crate::error::{CurveError, CurveResult};
use crate::model::AnalyticModel;

/// A discount curve shifted by a constant continuously compounded spread
/// over a base curve.
///
/// `df(t) = df_base(t) * exp(-spread * t)`
///
/// The base curve is referenced by name and resolved in the model at query
/// time, so replacing the base curve in the model moves this curve with it.
/// Querying without a model is a lookup error.
///
/// # Example
///
/// ```rust
/// use tenor_curves::prelude::*;
///
/// let ois = DiscountCurve::from_zero_rates(
///     "EUR-OIS",
///     &[1.0, 5.0],
///     &[0.02, 0.02],
///     None,
///     &CurveOptions::default(),
/// )
/// .unwrap();
/// let model = AnalyticModel::new().with_curve(ois);
///
/// let issuer = SpreadDiscountCurve::new("EUR-ISSUER", "EUR-OIS", 0.01);
/// let r = issuer.zero_rate_in_model(Some(&model), 2.0).unwrap();
/// assert!((r - 0.03).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadDiscountCurve {
    name: String,
    base_curve_name: String,
    spread: f64,
    reference_date: Option<Date>,
    zero_rate_policy: ZeroRatePolicy,
}

impl SpreadDiscountCurve {
    /// Creates a spread curve over the curve named `base_curve_name`.
    #[must_use]
    pub fn new(name: impl Into<String>, base_curve_name: impl Into<String>, spread: f64) -> Self {
        Self {
            name: name.into(),
            base_curve_name: base_curve_name.into(),
            spread,
            reference_date: None,
            zero_rate_policy: ZeroRatePolicy::default(),
        }
    }

    /// Sets the reference date.
    #[must_use]
    pub fn with_reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Sets the zero rate policy.
    #[must_use]
    pub fn with_zero_rate_policy(mut self, policy: ZeroRatePolicy) -> Self {
        self.zero_rate_policy = policy;
        self
    }

    /// Name of the base curve.
    #[must_use]
    pub fn base_curve_name(&self) -> &str {
        &self.base_curve_name
    }

    /// Continuously compounded spread.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl DiscountCurveInterface for SpreadDiscountCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_date(&self) -> Option<Date> {
        self.reference_date
    }

    fn discount_factor_in_model(
        &self,
        model: Option<&AnalyticModel>,
        maturity: f64,
    ) -> CurveResult<f64> {
        let model = model.ok_or_else(|| CurveError::curve_not_found(&self.base_curve_name))?;
        model.check_dependencies(&self.base_curve_name)?;
        let base = model.discount_curve(&self.base_curve_name)?;
        let df = base.discount_factor_in_model(Some(model), maturity)?;
        Ok(df * (-self.spread * maturity).exp())
    }

    fn zero_rate_policy(&self) -> ZeroRatePolicy {
        self.zero_rate_policy
    }

    fn depends_on(&self) -> Option<&str> {
        Some(&self.base_curve_name)
    }
}

impl fmt::Display for SpreadDiscountCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpreadDiscountCurve '{}' = '{}' + {:.6}",
            self.name, self.base_curve_name, self.spread
        )
    }
}
