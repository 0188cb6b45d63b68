//! Discount curves.
//!
//! A [`DiscountCurve`] is a [`Curve`] whose values are discount factors.
//! The factories below turn zero rates, annualized zero rates or simple
//! forward rates into discount factors and then share one constructor.
//!
//! Nothing forces `df(0) = 1`: callers normalise by the discount factor at
//! their own evaluation time.

use std::fmt;

use log::trace;
use tenor_core::{Date, TimeDiscretization};

use crate::curve::{Curve, CurveBuilder};
use crate::entity::InterpolationEntity;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};
use crate::model::AnalyticModel;
use crate::points::CurvePoint;

/// How a zero rate at maturity 0 is evaluated.
///
/// `-ln(df(t)) / t` is undefined at `t = 0`. With an epsilon the rate is
/// evaluated at that maturity instead; without one the query fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroRatePolicy {
    epsilon: Option<f64>,
}

impl ZeroRatePolicy {
    /// Default substitute maturity for a zero-maturity query.
    pub const DEFAULT_EPSILON: f64 = 1e-14;

    /// Evaluates zero-maturity queries at `epsilon`.
    ///
    /// # Errors
    ///
    /// Fails unless `epsilon` is finite and strictly positive.
    pub fn with_epsilon(epsilon: f64) -> CurveResult<Self> {
        if epsilon.is_finite() && epsilon > 0.0 {
            Ok(Self {
                epsilon: Some(epsilon),
            })
        } else {
            Err(CurveError::invalid_config(format!(
                "zero rate epsilon must be positive, got {epsilon}"
            )))
        }
    }

    /// Rejects zero-maturity queries.
    #[must_use]
    pub fn strict() -> Self {
        Self { epsilon: None }
    }

    /// Returns the substitute maturity, if any.
    #[must_use]
    pub fn epsilon(&self) -> Option<f64> {
        self.epsilon
    }

    /// Maturity at which a zero rate for `maturity` is evaluated.
    pub fn effective_maturity(&self, maturity: f64) -> CurveResult<f64> {
        if maturity != 0.0 {
            return Ok(maturity);
        }
        match self.epsilon {
            Some(epsilon) => {
                trace!("zero rate at maturity 0 evaluated at {epsilon:e}");
                Ok(epsilon)
            }
            None => Err(CurveError::ZeroMaturity),
        }
    }
}

impl Default for ZeroRatePolicy {
    fn default() -> Self {
        Self {
            epsilon: Some(Self::DEFAULT_EPSILON),
        }
    }
}

/// Construction options shared by the discount curve factories.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveOptions {
    /// Date corresponding to time 0.
    pub reference_date: Option<Date>,
    /// Interpolation scheme.
    pub interpolation_method: InterpolationMethod,
    /// Extrapolation policy.
    pub extrapolation_method: ExtrapolationMethod,
    /// Interpolation entity.
    pub interpolation_entity: InterpolationEntity,
    /// Zero rate behaviour at maturity 0.
    pub zero_rate_policy: ZeroRatePolicy,
}

impl CurveOptions {
    /// Sets the reference date.
    #[must_use]
    pub fn with_reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Sets the interpolation scheme.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.interpolation_method = method;
        self
    }

    /// Sets the extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, method: ExtrapolationMethod) -> Self {
        self.extrapolation_method = method;
        self
    }

    /// Sets the interpolation entity.
    #[must_use]
    pub fn with_entity(mut self, entity: InterpolationEntity) -> Self {
        self.interpolation_entity = entity;
        self
    }

    /// Sets the zero rate policy.
    #[must_use]
    pub fn with_zero_rate_policy(mut self, policy: ZeroRatePolicy) -> Self {
        self.zero_rate_policy = policy;
        self
    }
}

/// Discount factor queries shared by every discount curve.
///
/// `model` carries the other curves a curve may depend on; a standalone
/// curve ignores it.
pub trait DiscountCurveInterface: Send + Sync + fmt::Debug {
    /// Name of the curve.
    fn name(&self) -> &str;

    /// Date corresponding to time 0, if any.
    fn reference_date(&self) -> Option<Date>;

    /// Discount factor for `maturity`, resolving dependencies in `model`.
    fn discount_factor_in_model(
        &self,
        model: Option<&AnalyticModel>,
        maturity: f64,
    ) -> CurveResult<f64>;

    /// Zero rate behaviour at maturity 0.
    fn zero_rate_policy(&self) -> ZeroRatePolicy {
        ZeroRatePolicy::default()
    }

    /// Name of the model curve this curve is resolved against, if any.
    fn depends_on(&self) -> Option<&str> {
        None
    }

    /// Discount factor for `maturity`.
    fn discount_factor(&self, maturity: f64) -> CurveResult<f64> {
        self.discount_factor_in_model(None, maturity)
    }

    /// Continuously compounded zero rate `-ln(df(t)) / t`, resolving
    /// dependencies in `model`.
    fn zero_rate_in_model(&self, model: Option<&AnalyticModel>, maturity: f64) -> CurveResult<f64> {
        let t = self.zero_rate_policy().effective_maturity(maturity)?;
        let df = self.discount_factor_in_model(model, t)?;
        if df > 0.0 {
            Ok(-df.ln() / t)
        } else {
            Err(CurveError::non_positive_log_argument(df, t))
        }
    }

    /// Continuously compounded zero rate for `maturity`.
    fn zero_rate(&self, maturity: f64) -> CurveResult<f64> {
        self.zero_rate_in_model(None, maturity)
    }

    /// Zero rates for each maturity.
    fn zero_rates(&self, maturities: &[f64]) -> CurveResult<Vec<f64>> {
        maturities.iter().map(|&t| self.zero_rate(t)).collect()
    }

    /// Forward discount factor `df(end) / df(start)`.
    fn forward_discount_factor(&self, start: f64, end: f64) -> CurveResult<f64> {
        let df_start = positive_discount_factor(self.discount_factor(start)?, start)?;
        Ok(self.discount_factor(end)? / df_start)
    }

    /// Simple forward rate over `[start, end]`.
    ///
    /// Inverse of [`DiscountCurve::from_forward_rates`]:
    /// `(df(start) / df(end) - 1) / (end - start)`.
    fn forward_rate(&self, start: f64, end: f64) -> CurveResult<f64> {
        if end == start {
            return Err(CurveError::empty_period(start, end));
        }
        let df_start = self.discount_factor(start)?;
        let df_end = positive_discount_factor(self.discount_factor(end)?, end)?;
        Ok((df_start / df_end - 1.0) / (end - start))
    }
}

fn positive_discount_factor(df: f64, time: f64) -> CurveResult<f64> {
    if df > 0.0 {
        Ok(df)
    } else {
        Err(CurveError::non_positive_discount_factor(df, time))
    }
}

/// A curve of discount factors.
///
/// # Example
///
/// ```rust
/// use tenor_curves::prelude::*;
///
/// let curve = DiscountCurve::from_zero_rates(
///     "EUR-OIS",
///     &[1.0, 2.0, 5.0],
///     &[0.02, 0.025, 0.03],
///     None,
///     &CurveOptions::default(),
/// )
/// .unwrap();
///
/// let r = curve.zero_rate(2.0).unwrap();
/// assert!((r - 0.025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    curve: Curve,
    zero_rate_policy: ZeroRatePolicy,
}

impl DiscountCurve {
    /// Creates a discount curve from discount factors.
    ///
    /// Without `is_parameter`, points with positive time are calibration
    /// parameters and the rest are fixed.
    ///
    /// # Errors
    ///
    /// Fails if the input lengths differ, there are no points, a time
    /// repeats, or a discount factor is not strictly positive.
    pub fn from_discount_factors(
        name: impl Into<String>,
        times: &[f64],
        discount_factors: &[f64],
        is_parameter: Option<&[bool]>,
        options: &CurveOptions,
    ) -> CurveResult<Self> {
        if discount_factors.len() != times.len() {
            return Err(CurveError::length_mismatch(
                "discount factors",
                times.len(),
                discount_factors.len(),
            ));
        }
        if let Some(flags) = is_parameter {
            if flags.len() != times.len() {
                return Err(CurveError::length_mismatch(
                    "parameter flags",
                    times.len(),
                    flags.len(),
                ));
            }
        }

        for (&time, &df) in times.iter().zip(discount_factors) {
            if df <= 0.0 {
                return Err(CurveError::non_positive_discount_factor(df, time));
            }
        }

        let mut builder = CurveBuilder::new(name)
            .maybe_reference_date(options.reference_date)
            .interpolation_method(options.interpolation_method)
            .extrapolation_method(options.extrapolation_method)
            .interpolation_entity(options.interpolation_entity);

        for (i, (&time, &df)) in times.iter().zip(discount_factors).enumerate() {
            let flag = is_parameter.map_or(time > 0.0, |flags| flags[i]);
            builder = builder.add_point(time, df, flag);
        }

        Ok(Self {
            curve: builder.build()?,
            zero_rate_policy: options.zero_rate_policy,
        })
    }

    /// Creates a discount curve from continuously compounded zero rates,
    /// `df = exp(-r t)`.
    pub fn from_zero_rates(
        name: impl Into<String>,
        times: &[f64],
        zero_rates: &[f64],
        is_parameter: Option<&[bool]>,
        options: &CurveOptions,
    ) -> CurveResult<Self> {
        if zero_rates.len() != times.len() {
            return Err(CurveError::length_mismatch("zero rates", times.len(), zero_rates.len()));
        }
        let dfs: Vec<f64> = times
            .iter()
            .zip(zero_rates)
            .map(|(&t, &r)| (-r * t).exp())
            .collect();
        Self::from_discount_factors(name, times, &dfs, is_parameter, options)
    }

    /// Creates a discount curve from annually compounded zero rates,
    /// `df = (1 + r)^(-t)`.
    pub fn from_annualized_zero_rates(
        name: impl Into<String>,
        times: &[f64],
        annualized_zero_rates: &[f64],
        is_parameter: Option<&[bool]>,
        options: &CurveOptions,
    ) -> CurveResult<Self> {
        if annualized_zero_rates.len() != times.len() {
            return Err(CurveError::length_mismatch(
                "annualized zero rates",
                times.len(),
                annualized_zero_rates.len(),
            ));
        }
        let dfs: Vec<f64> = times
            .iter()
            .zip(annualized_zero_rates)
            .map(|(&t, &r)| (1.0 + r).powf(-t))
            .collect();
        Self::from_discount_factors(name, times, &dfs, is_parameter, options)
    }

    /// Creates a discount curve by compounding simple forward rates over a
    /// time grid.
    ///
    /// The first grid time carries `df = 1` and is never a parameter; each
    /// following time is `df[i + 1] = df[i] / (1 + rate[i] * dt[i])`.
    /// `forward_rates` needs one rate per grid period.
    pub fn from_forward_rates(
        name: impl Into<String>,
        tenor: &TimeDiscretization,
        forward_rates: &[f64],
        options: &CurveOptions,
    ) -> CurveResult<Self> {
        if forward_rates.len() != tenor.number_of_time_steps() {
            return Err(CurveError::length_mismatch(
                "forward rates",
                tenor.number_of_time_steps(),
                forward_rates.len(),
            ));
        }

        let times = tenor.times();
        let mut dfs = Vec::with_capacity(times.len());
        let mut flags = Vec::with_capacity(times.len());
        let mut df = 1.0;
        dfs.push(df);
        flags.push(false);

        for ((rate, dt), &time) in forward_rates.iter().zip(tenor.time_steps()).zip(&times[1..]) {
            df /= 1.0 + rate * dt;
            dfs.push(df);
            flags.push(time > 0.0);
        }

        Self::from_discount_factors(name, times, &dfs, Some(&flags), options)
    }

    /// Wraps an existing curve of discount factors.
    ///
    /// # Errors
    ///
    /// Fails if a point of `curve` is not strictly positive.
    pub fn from_curve(curve: Curve, zero_rate_policy: ZeroRatePolicy) -> CurveResult<Self> {
        for point in curve.points() {
            positive_discount_factor(point.value, point.time)?;
        }
        Ok(Self {
            curve,
            zero_rate_policy,
        })
    }

    /// The underlying curve.
    #[must_use]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Ordered view of the points.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        self.curve.points()
    }

    /// Discount factor at a calendar date, via the reference date.
    pub fn discount_factor_at(&self, date: &Date) -> CurveResult<f64> {
        self.discount_factor(self.curve.time_of(date)?)
    }

    /// Values of the calibration parameters.
    #[must_use]
    pub fn parameters(&self) -> Vec<f64> {
        self.curve.parameters()
    }

    /// Overwrites the calibration parameters in time order.
    ///
    /// The curve is unchanged if a value is not strictly positive.
    pub fn set_parameters(&mut self, values: &[f64]) -> CurveResult<()> {
        self.check_parameters(values)?;
        self.curve.set_parameters(values)
    }

    /// Returns a copy with the given calibration parameters.
    pub fn clone_for_parameters(&self, values: &[f64]) -> CurveResult<Self> {
        self.check_parameters(values)?;
        Ok(Self {
            curve: self.curve.clone_for_parameters(values)?,
            zero_rate_policy: self.zero_rate_policy,
        })
    }
}

impl DiscountCurve {
    fn check_parameters(&self, values: &[f64]) -> CurveResult<()> {
        let times = self.points().iter().filter(|p| p.is_parameter).map(|p| p.time);
        for (time, &value) in times.zip(values) {
            positive_discount_factor(value, time)?;
        }
        Ok(())
    }
}

impl DiscountCurveInterface for DiscountCurve {
    fn name(&self) -> &str {
        self.curve.name()
    }

    fn reference_date(&self) -> Option<Date> {
        self.curve.reference_date()
    }

    fn discount_factor_in_model(
        &self,
        model: Option<&AnalyticModel>,
        maturity: f64,
    ) -> CurveResult<f64> {
        self.curve.value_in_model(model, maturity)
    }

    fn zero_rate_policy(&self) -> ZeroRatePolicy {
        self.zero_rate_policy
    }
}

impl fmt::Display for DiscountCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discount{}", self.curve)
    }
}
