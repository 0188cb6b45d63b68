//! Interpolation entities.
//!
//! A curve stores values in their natural space (for a discount curve, the
//! discount factors) but interpolates them in a transformed space. The
//! entity selects that space:
//!
//! | Entity | Encoded value | Interpolating linearly gives |
//! |--------|---------------|------------------------------|
//! | `VALUE` | `v` | linear discount factors |
//! | `LOG_OF_VALUE` | `ln v` | piecewise flat forward rates |
//! | `LOG_OF_VALUE_PER_TIME` | `ln(v) / t` | linear zero rates |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Space in which a curve's values are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationEntity {
    /// The stored value itself.
    Value,
    /// Natural logarithm of the value.
    LogOfValue,
    /// Natural logarithm of the value divided by time.
    #[default]
    LogOfValuePerTime,
}

impl InterpolationEntity {
    /// Returns the transform implementing this entity.
    #[must_use]
    pub fn transform(self) -> &'static dyn EntityTransform {
        match self {
            Self::Value => &ValueTransform,
            Self::LogOfValue => &LogOfValueTransform,
            Self::LogOfValuePerTime => &LogOfValuePerTimeTransform,
        }
    }
}

impl fmt::Display for InterpolationEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Value => "VALUE",
            Self::LogOfValue => "LOG_OF_VALUE",
            Self::LogOfValuePerTime => "LOG_OF_VALUE_PER_TIME",
        };
        write!(f, "{name}")
    }
}

/// Bidirectional mapping between a stored value and its interpolation space.
///
/// For every admissible `(value, time)`, `decode(encode(value, time)?, time)`
/// returns `value` up to floating-point rounding.
pub trait EntityTransform: Send + Sync + fmt::Debug {
    /// Maps a stored value at `time` into interpolation space.
    fn encode(&self, value: f64, time: f64) -> CurveResult<f64>;

    /// Maps an interpolated value at `time` back to value space.
    fn decode(&self, encoded: f64, time: f64) -> f64;

    /// Whether the encoded value at `time` carries no information and must
    /// be taken from a neighbouring node.
    fn is_degenerate_at(&self, _time: f64) -> bool {
        false
    }

    /// Name of the entity.
    fn name(&self) -> &'static str;
}

/// Identity transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueTransform;

impl EntityTransform for ValueTransform {
    fn encode(&self, value: f64, _time: f64) -> CurveResult<f64> {
        Ok(value)
    }

    fn decode(&self, encoded: f64, _time: f64) -> f64 {
        encoded
    }

    fn name(&self) -> &'static str {
        "VALUE"
    }
}

/// `ln v` / `exp e`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOfValueTransform;

impl EntityTransform for LogOfValueTransform {
    fn encode(&self, value: f64, time: f64) -> CurveResult<f64> {
        if value <= 0.0 {
            return Err(CurveError::non_positive_log_argument(value, time));
        }
        Ok(value.ln())
    }

    fn decode(&self, encoded: f64, _time: f64) -> f64 {
        encoded.exp()
    }

    fn name(&self) -> &'static str {
        "LOG_OF_VALUE"
    }
}

/// `ln(v) / t` / `exp(e * t)`.
///
/// At `t = 0` only `v = 1` is admissible. Its encoded value is reported as 0
/// and flagged degenerate; the curve replaces it by the encoded value of the
/// nearest node with non-zero time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOfValuePerTimeTransform;

impl EntityTransform for LogOfValuePerTimeTransform {
    fn encode(&self, value: f64, time: f64) -> CurveResult<f64> {
        if value <= 0.0 {
            return Err(CurveError::non_positive_log_argument(value, time));
        }
        if time == 0.0 {
            if (value - 1.0).abs() > f64::EPSILON {
                return Err(CurveError::non_unit_anchor(value));
            }
            return Ok(0.0);
        }
        Ok(value.ln() / time)
    }

    fn decode(&self, encoded: f64, time: f64) -> f64 {
        (encoded * time).exp()
    }

    fn is_degenerate_at(&self, time: f64) -> bool {
        time == 0.0
    }

    fn name(&self) -> &'static str {
        "LOG_OF_VALUE_PER_TIME"
    }
}
