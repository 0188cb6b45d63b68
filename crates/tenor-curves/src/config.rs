//! Curve configuration.
//!
//! A [`CurveConfig`] is the serialisable description of a discount curve:
//! selectors, reference date, zero rate policy and optionally the quoted
//! points themselves.
//!
//! ```json
//! {
//!   "name": "EUR-OIS",
//!   "reference_date": "2025-01-02",
//!   "interpolation": "LINEAR",
//!   "extrapolation": "CONSTANT",
//!   "entity": "LOG_OF_VALUE_PER_TIME",
//!   "zero_rate_epsilon": 1e-14,
//!   "quote_type": "ZERO_RATE",
//!   "points": [
//!     { "time": 1.0, "value": 0.021 },
//!     { "time": 5.0, "value": 0.025 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tenor_core::Date;

use crate::discount::{CurveOptions, DiscountCurve, ZeroRatePolicy};
use crate::entity::InterpolationEntity;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};

/// What the configured point values are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteType {
    /// Discount factors.
    #[default]
    DiscountFactor,
    /// Continuously compounded zero rates.
    ZeroRate,
    /// Annually compounded zero rates.
    AnnualizedZeroRate,
}

/// A configured curve point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    /// Time in years from the reference date.
    pub time: f64,
    /// Quoted value, interpreted per [`QuoteType`].
    pub value: f64,
    /// Calibration flag; defaults to `time > 0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_parameter: Option<bool>,
}

/// Configuration for a discount curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Curve name.
    pub name: String,

    /// Description of this configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date corresponding to time 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<Date>,

    /// Interpolation scheme.
    #[serde(default)]
    pub interpolation: InterpolationMethod,

    /// Extrapolation policy.
    #[serde(default)]
    pub extrapolation: ExtrapolationMethod,

    /// Interpolation entity.
    #[serde(default)]
    pub entity: InterpolationEntity,

    /// Substitute maturity for zero rates at maturity 0; `null` disables it.
    #[serde(default = "default_zero_rate_epsilon")]
    pub zero_rate_epsilon: Option<f64>,

    /// How to read the point values.
    #[serde(default)]
    pub quote_type: QuoteType,

    /// Quoted points.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<PointConfig>,
}

fn default_zero_rate_epsilon() -> Option<f64> {
    Some(ZeroRatePolicy::DEFAULT_EPSILON)
}

impl CurveConfig {
    /// Creates a configuration with default selectors and no points.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            reference_date: None,
            interpolation: InterpolationMethod::default(),
            extrapolation: ExtrapolationMethod::default(),
            entity: InterpolationEntity::default(),
            zero_rate_epsilon: default_zero_rate_epsilon(),
            quote_type: QuoteType::default(),
            points: Vec::new(),
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> CurveResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CurveError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> CurveResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CurveError::invalid_config(e.to_string()))
    }

    /// Checks the configuration for values no curve could be built from.
    pub fn validate(&self) -> CurveResult<()> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("name cannot be empty".to_string());
        }

        if let Some(epsilon) = self.zero_rate_epsilon {
            if !epsilon.is_finite() || epsilon <= 0.0 {
                problems.push(format!("zero_rate_epsilon must be positive, got {epsilon}"));
            }
        }

        for (i, point) in self.points.iter().enumerate() {
            if !point.time.is_finite() || !point.value.is_finite() {
                problems.push(format!("points[{i}] is not finite"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CurveError::invalid_config(problems.join("; ")))
        }
    }

    /// Zero rate policy described by `zero_rate_epsilon`.
    pub fn zero_rate_policy(&self) -> CurveResult<ZeroRatePolicy> {
        self.zero_rate_epsilon
            .map_or_else(|| Ok(ZeroRatePolicy::strict()), ZeroRatePolicy::with_epsilon)
    }

    /// Construction options described by this configuration.
    pub fn to_options(&self) -> CurveResult<CurveOptions> {
        Ok(CurveOptions {
            reference_date: self.reference_date,
            interpolation_method: self.interpolation,
            extrapolation_method: self.extrapolation,
            interpolation_entity: self.entity,
            zero_rate_policy: self.zero_rate_policy()?,
        })
    }

    /// Builds the configured discount curve from its points.
    pub fn build(&self) -> CurveResult<DiscountCurve> {
        self.validate()?;
        if self.points.is_empty() {
            return Err(CurveError::empty_curve(&self.name));
        }

        let times: Vec<f64> = self.points.iter().map(|p| p.time).collect();
        let values: Vec<f64> = self.points.iter().map(|p| p.value).collect();
        let flags: Vec<bool> = self
            .points
            .iter()
            .map(|p| p.is_parameter.unwrap_or(p.time > 0.0))
            .collect();
        let options = self.to_options()?;

        match self.quote_type {
            QuoteType::DiscountFactor => {
                DiscountCurve::from_discount_factors(&self.name, &times, &values, Some(&flags), &options)
            }
            QuoteType::ZeroRate => {
                DiscountCurve::from_zero_rates(&self.name, &times, &values, Some(&flags), &options)
            }
            QuoteType::AnnualizedZeroRate => DiscountCurve::from_annualized_zero_rates(
                &self.name,
                &times,
                &values,
                Some(&flags),
                &options,
            ),
        }
    }
}
