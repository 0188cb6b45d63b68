//! Ordered storage of curve points.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// A single curve node.
///
/// `time` is measured in years from the curve's reference date and may be
/// negative. `is_parameter` marks nodes that a calibration routine may move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time in years from the reference date.
    pub time: f64,
    /// Stored value, in original (not transformed) space.
    pub value: f64,
    /// Whether calibration may adjust this point.
    pub is_parameter: bool,
}

impl CurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub fn new(time: f64, value: f64, is_parameter: bool) -> Self {
        Self {
            time,
            value,
            is_parameter,
        }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.10}", self.time, self.value)?;
        if self.is_parameter {
            write!(f, ", param")?;
        }
        write!(f, ")")
    }
}

/// Points kept sorted by time, unique per time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    points: Vec<CurvePoint>,
}

impl PointStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point, keeping the store sorted.
    ///
    /// # Errors
    ///
    /// Fails if time or value is not finite, or if a point already exists
    /// at `time`.
    pub fn add_point(&mut self, time: f64, value: f64, is_parameter: bool) -> CurveResult<()> {
        if !time.is_finite() || !value.is_finite() {
            return Err(CurveError::non_finite_input(time, value));
        }

        match self.search(time) {
            Ok(_) => Err(CurveError::duplicate_time(time)),
            Err(slot) => {
                self.points
                    .insert(slot, CurvePoint::new(time, value, is_parameter));
                Ok(())
            }
        }
    }

    /// Read-only ordered view of the points.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the point stored at exactly `time`.
    pub fn point_at(&self, time: f64) -> CurveResult<&CurvePoint> {
        self.search(time)
            .map(|i| &self.points[i])
            .map_err(|_| CurveError::point_not_found(time))
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point by time.
    #[must_use]
    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    /// Last point by time.
    #[must_use]
    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Times in ascending order.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// Values in time order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Indices of the calibration parameters.
    #[must_use]
    pub fn parameter_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_parameter)
            .map(|(i, _)| i)
            .collect()
    }

    /// Values of the calibration parameters, in time order.
    #[must_use]
    pub fn parameter_values(&self) -> Vec<f64> {
        self.points
            .iter()
            .filter(|p| p.is_parameter)
            .map(|p| p.value)
            .collect()
    }

    /// Overwrites the calibration parameters in time order.
    ///
    /// # Errors
    ///
    /// Fails if `values` does not have one entry per parameter or contains a
    /// non-finite number. The store is left untouched on error.
    pub fn set_parameter_values(&mut self, values: &[f64]) -> CurveResult<()> {
        let indices = self.parameter_indices();
        if indices.len() != values.len() {
            return Err(CurveError::length_mismatch(
                "parameters",
                indices.len(),
                values.len(),
            ));
        }
        if let Some((&i, &v)) = indices.iter().zip(values).find(|(_, v)| !v.is_finite()) {
            return Err(CurveError::non_finite_input(self.points[i].time, v));
        }

        for (i, v) in indices.into_iter().zip(values) {
            self.points[i].value = *v;
        }
        Ok(())
    }

    fn search(&self, time: f64) -> Result<usize, usize> {
        self.points
            .binary_search_by(|p| p.time.partial_cmp(&time).unwrap_or(Ordering::Less))
    }
}
