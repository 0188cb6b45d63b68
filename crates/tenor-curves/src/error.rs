//! Error types for curve operations.
//!
//! Every failure is classified by [`CurveError::kind`] into one of three
//! families: bad construction input, a value outside the mathematical
//! domain of a transform, or a lookup that found nothing.

use tenor_core::CoreError;
use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Broad classification of a [`CurveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The inputs cannot form a curve.
    Construction,
    /// A value is outside the domain of a transform or rate formula.
    Domain,
    /// A requested point or curve does not exist.
    Lookup,
}

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A curve needs at least one point.
    #[error("Curve '{name}' has no points")]
    EmptyCurve {
        /// Name of the curve.
        name: String,
    },

    /// A time or value is NaN or infinite.
    #[error("Non-finite input: time {time}, value {value}")]
    NonFiniteInput {
        /// The offending time.
        time: f64,
        /// The offending value.
        value: f64,
    },

    /// Two points share the same time.
    #[error("Duplicate point at time {time}")]
    DuplicateTime {
        /// The repeated time.
        time: f64,
    },

    /// Parallel input sequences differ in length.
    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        /// Which sequence is wrong.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A configuration value is not usable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// The interpolant could not be built or evaluated.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] MathError),

    /// A log-based transform received a non-positive value.
    #[error("Logarithm of non-positive value {value} at time {time}")]
    NonPositiveLogArgument {
        /// The offending value.
        value: f64,
        /// Time of the point.
        time: f64,
    },

    /// Discount factors must be strictly positive.
    #[error("Non-positive discount factor {value} at time {time}")]
    NonPositiveDiscountFactor {
        /// The offending discount factor.
        value: f64,
        /// Time of the discount factor.
        time: f64,
    },

    /// Only a unit discount factor is admissible at time zero in log-per-time space.
    #[error("Value at time 0 must be 1 in log-per-time space, got {value}")]
    NonUnitAnchor {
        /// The offending value.
        value: f64,
    },

    /// Zero rate requested at maturity 0 with the epsilon fallback disabled.
    #[error("Zero rate undefined at maturity 0")]
    ZeroMaturity,

    /// A forward quantity was requested over a period of zero length.
    #[error("Empty period [{start}, {end}]")]
    EmptyPeriod {
        /// Period start.
        start: f64,
        /// Period end.
        end: f64,
    },

    /// No point exists at the requested time.
    #[error("No point at time {time}")]
    PointNotFound {
        /// The requested time.
        time: f64,
    },

    /// The model has no curve of that name.
    #[error("Curve not found: {name}")]
    CurveNotFound {
        /// Name of the missing curve.
        name: String,
    },

    /// Resolving a curve led back to a curve already being resolved.
    #[error("Cyclic curve dependency through '{name}'")]
    CyclicDependency {
        /// Name of the curve reached twice.
        name: String,
    },

    /// A date was given but the curve has no reference date.
    #[error("Curve '{name}' has no reference date")]
    MissingReferenceDate {
        /// Name of the curve.
        name: String,
    },

    /// Invalid date or time grid.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Returns the error family.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCurve { .. }
            | Self::NonFiniteInput { .. }
            | Self::DuplicateTime { .. }
            | Self::LengthMismatch { .. }
            | Self::InvalidConfig { .. }
            | Self::Interpolation(_)
            | Self::Core(_) => ErrorKind::Construction,
            Self::NonPositiveLogArgument { .. }
            | Self::NonPositiveDiscountFactor { .. }
            | Self::NonUnitAnchor { .. }
            | Self::ZeroMaturity
            | Self::EmptyPeriod { .. } => ErrorKind::Domain,
            Self::PointNotFound { .. }
            | Self::CurveNotFound { .. }
            | Self::CyclicDependency { .. }
            | Self::MissingReferenceDate { .. } => ErrorKind::Lookup,
        }
    }

    /// Creates an empty curve error.
    #[must_use]
    pub fn empty_curve(name: impl Into<String>) -> Self {
        Self::EmptyCurve { name: name.into() }
    }

    /// Creates a non-finite input error.
    #[must_use]
    pub fn non_finite_input(time: f64, value: f64) -> Self {
        Self::NonFiniteInput { time, value }
    }

    /// Creates a duplicate time error.
    #[must_use]
    pub fn duplicate_time(time: f64) -> Self {
        Self::DuplicateTime { time }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(what: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            got,
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Creates a non-positive logarithm argument error.
    #[must_use]
    pub fn non_positive_log_argument(value: f64, time: f64) -> Self {
        Self::NonPositiveLogArgument { value, time }
    }

    /// Creates a non-positive discount factor error.
    #[must_use]
    pub fn non_positive_discount_factor(value: f64, time: f64) -> Self {
        Self::NonPositiveDiscountFactor { value, time }
    }

    /// Creates a non-unit anchor error.
    #[must_use]
    pub fn non_unit_anchor(value: f64) -> Self {
        Self::NonUnitAnchor { value }
    }

    /// Creates an empty period error.
    #[must_use]
    pub fn empty_period(start: f64, end: f64) -> Self {
        Self::EmptyPeriod { start, end }
    }

    /// Creates a point not found error.
    #[must_use]
    pub fn point_not_found(time: f64) -> Self {
        Self::PointNotFound { time }
    }

    /// Creates a curve not found error.
    #[must_use]
    pub fn curve_not_found(name: impl Into<String>) -> Self {
        Self::CurveNotFound { name: name.into() }
    }

    /// Creates a cyclic dependency error.
    #[must_use]
    pub fn cyclic_dependency(name: impl Into<String>) -> Self {
        Self::CyclicDependency { name: name.into() }
    }

    /// Creates a missing reference date error.
    #[must_use]
    pub fn missing_reference_date(name: impl Into<String>) -> Self {
        Self::MissingReferenceDate { name: name.into() }
    }
}
