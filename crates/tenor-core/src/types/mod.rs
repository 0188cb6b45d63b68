//! Domain types.

mod date;
mod time_discretization;

pub use date::Date;
pub use time_discretization::TimeDiscretization;
