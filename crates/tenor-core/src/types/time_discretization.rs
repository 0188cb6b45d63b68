//! Strictly increasing time grid.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A strictly increasing sequence of times (in years).
///
/// Period `i` runs from `time(i)` to `time(i + 1)`; its length is
/// `time_step(i)`.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::TimeDiscretization;
///
/// let tenor = TimeDiscretization::new(vec![0.0, 0.5, 1.0, 2.0]).unwrap();
/// assert_eq!(tenor.number_of_time_steps(), 3);
/// assert_eq!(tenor.time_step(2), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct TimeDiscretization {
    times: Vec<f64>,
}

impl TimeDiscretization {
    /// Creates a time discretization from the given times.
    ///
    /// # Errors
    ///
    /// Returns an error if `times` is empty, contains non-finite values or
    /// is not strictly increasing.
    pub fn new(times: Vec<f64>) -> CoreResult<Self> {
        if times.is_empty() {
            return Err(CoreError::invalid_time_discretization(
                "at least one time is required",
            ));
        }
        if let Some(bad) = times.iter().find(|t| !t.is_finite()) {
            return Err(CoreError::invalid_time_discretization(format!(
                "time {bad} is not finite"
            )));
        }
        if let Some(i) = (1..times.len()).find(|&i| times[i] <= times[i - 1]) {
            return Err(CoreError::invalid_time_discretization(format!(
                "times must be strictly increasing: {} >= {} at index {i}",
                times[i - 1],
                times[i]
            )));
        }

        Ok(Self { times })
    }

    /// Creates an equidistant grid `start, start + step, ..., start + steps * step`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not strictly positive or `start` is not finite.
    pub fn from_step(start: f64, steps: usize, step: f64) -> CoreResult<Self> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(CoreError::invalid_time_discretization(format!(
                "step must be positive, got {step}"
            )));
        }
        Self::new((0..=steps).map(|i| start + i as f64 * step).collect())
    }

    /// Returns the times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of times in the grid.
    #[must_use]
    pub fn number_of_times(&self) -> usize {
        self.times.len()
    }

    /// Returns the number of periods, i.e. one less than the number of times.
    #[must_use]
    pub fn number_of_time_steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Returns the time with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= number_of_times()`.
    #[must_use]
    pub fn time(&self, index: usize) -> f64 {
        self.times[index]
    }

    /// Returns the length of period `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= number_of_time_steps()`.
    #[must_use]
    pub fn time_step(&self, index: usize) -> f64 {
        self.times[index + 1] - self.times[index]
    }

    /// Iterates over the period lengths.
    pub fn time_steps(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.windows(2).map(|w| w[1] - w[0])
    }

    /// Returns the first time.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.times[0]
    }

    /// Returns the last time.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.times[self.times.len() - 1]
    }
}

impl TryFrom<Vec<f64>> for TimeDiscretization {
    type Error = CoreError;

    fn try_from(times: Vec<f64>) -> CoreResult<Self> {
        Self::new(times)
    }
}

impl From<TimeDiscretization> for Vec<f64> {
    fn from(tenor: TimeDiscretization) -> Self {
        tenor.times
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_step() {
        let tenor = TimeDiscretization::from_step(0.0, 4, 0.5).unwrap();
        assert_eq!(tenor.number_of_times(), 5);
        assert_eq!(tenor.number_of_time_steps(), 4);
        assert_relative_eq!(tenor.last(), 2.0, epsilon = 1e-15);
        for step in tenor.time_steps() {
            assert_relative_eq!(step, 0.5, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_irregular_grid() {
        let tenor = TimeDiscretization::new(vec![0.25, 0.5, 1.0, 3.0]).unwrap();
        assert_eq!(tenor.first(), 0.25);
        assert_eq!(tenor.time(2), 1.0);
        assert_eq!(tenor.time_step(2), 2.0);
    }

    #[test]
    fn test_single_time_has_no_steps() {
        let tenor = TimeDiscretization::new(vec![1.0]).unwrap();
        assert_eq!(tenor.number_of_time_steps(), 0);
        assert_eq!(tenor.time_steps().count(), 0);
    }

    #[test]
    fn test_validation_errors() {
        assert!(TimeDiscretization::new(vec![]).is_err());
        assert!(TimeDiscretization::new(vec![0.0, 1.0, 1.0]).is_err());
        assert!(TimeDiscretization::new(vec![0.0, f64::NAN]).is_err());
        assert!(TimeDiscretization::from_step(0.0, 3, 0.0).is_err());
        assert!(TimeDiscretization::from_step(0.0, 3, -0.5).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let tenor: TimeDiscretization = serde_json::from_str("[0.0, 0.5, 1.0]").unwrap();
        assert_eq!(tenor.number_of_time_steps(), 2);
        assert!(serde_json::from_str::<TimeDiscretization>("[1.0, 0.5]").is_err());
    }
}
