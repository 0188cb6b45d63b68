//! # Tenor Core
//!
//! Core types shared by the Tenor discount curve engine.
//!
//! This crate provides:
//!
//! - **Date**: Calendar date used as a curve reference date (t = 0)
//! - **TimeDiscretization**: Strictly increasing time grid used by the
//!   forward-rate curve factory
//! - **Errors**: [`CoreError`] and the [`CoreResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let reference = Date::from_ymd(2025, 1, 2).unwrap();
//! let tenor = TimeDiscretization::from_step(0.0, 4, 0.5).unwrap();
//! assert_eq!(tenor.number_of_time_steps(), 4);
//! assert_eq!(reference.year(), 2025);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, TimeDiscretization};
}

pub use error::{CoreError, CoreResult};
pub use types::{Date, TimeDiscretization};
