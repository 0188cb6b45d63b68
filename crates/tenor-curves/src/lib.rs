//! # Tenor Curves
//!
//! Discount curve construction and interpolation for the Tenor engine.
//!
//! This crate provides:
//!
//! - **Points**: Ordered, unique-by-time curve nodes with calibration flags
//! - **Entities**: The space values are interpolated in (value, log value,
//!   log value per time)
//! - **Curve**: Interpolation and extrapolation over encoded nodes
//! - **Discount curves**: Factories from discount factors, zero rates,
//!   annualized zero rates and forward rates; zero and forward rate queries
//! - **Model**: A registry of named curves, and spread curves resolved
//!   against it at query time
//! - **Configuration**: JSON curve descriptions
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_curves::prelude::*;
//!
//! let curve = DiscountCurve::from_discount_factors(
//!     "EUR-OIS",
//!     &[1.0, 2.0, 5.0, 10.0],
//!     &[0.99, 0.97, 0.90, 0.80],
//!     None,
//!     &CurveOptions::default(),
//! )
//! .unwrap();
//!
//! // Linear zero rates between the nodes
//! let df = curve.discount_factor(3.0).unwrap();
//! assert!(df < 0.97 && df > 0.90);
//!
//! // Flat zero rate beyond the last node
//! let r10 = curve.zero_rate(10.0).unwrap();
//! let r20 = curve.zero_rate(20.0).unwrap();
//! assert!((r10 - r20).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod curve;
pub mod discount;
pub mod entity;
pub mod error;
pub mod interpolation;
pub mod model;
pub mod points;
pub mod spread;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{CurveConfig, PointConfig, QuoteType};
    pub use crate::curve::{Curve, CurveBuilder};
    pub use crate::discount::{CurveOptions, DiscountCurve, DiscountCurveInterface, ZeroRatePolicy};
    pub use crate::entity::{EntityTransform, InterpolationEntity};
    pub use crate::error::{CurveError, CurveResult, ErrorKind};
    pub use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};
    pub use crate::model::AnalyticModel;
    pub use crate::points::{CurvePoint, PointStore};
    pub use crate::spread::SpreadDiscountCurve;
    pub use tenor_core::{Date, TimeDiscretization};
}

pub use curve::{Curve, CurveBuilder};
pub use discount::{CurveOptions, DiscountCurve, DiscountCurveInterface, ZeroRatePolicy};
pub use entity::InterpolationEntity;
pub use error::{CurveError, CurveResult, ErrorKind};
pub use interpolation::{ExtrapolationMethod, InterpolationMethod};
pub use model::AnalyticModel;
pub use spread::SpreadDiscountCurve;
