//! # Tenor Math
//!
//! Numerical building blocks for the Tenor discount curve engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: Piecewise schemes over sorted `(x, y)` nodes
//!   (Linear, natural Cubic Spline, Harmonic Spline)
//! - **Extrapolation**: Policies for queries beyond the node range
//!   (Flat, Linear)
//!
//! Interpolators operate on plain `(x, y)` pairs and know nothing about
//! what the values represent; the curve layer decides the space in which
//! they are applied.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{Extrapolator, FlatExtrapolator, LinearExtrapolator};
    pub use crate::interpolation::{CubicSpline, HarmonicSpline, Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};
