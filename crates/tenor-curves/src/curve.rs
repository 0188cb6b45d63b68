//! Interpolated curve over ordered points.
//!
//! A [`Curve`] composes a [`PointStore`], an entity transform, an
//! interpolation scheme and an extrapolation policy:
//!
//! 1. every stored value is encoded into the entity's space,
//! 2. the encoded nodes are interpolated inside `[t_min, t_max]` and
//!    extrapolated outside,
//! 3. the result is decoded back into value space.
//!
//! The interpolant is built lazily on first query and cached until the
//! point set changes.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use once_cell::sync::OnceCell;
use tenor_core::Date;
use tenor_math::extrapolation::Extrapolator;
use tenor_math::interpolation::Interpolator;

use crate::entity::{EntityTransform, InterpolationEntity};
use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};
use crate::model::AnalyticModel;
use crate::points::{CurvePoint, PointStore};

/// A curve interpolated in a chosen entity space.
///
/// Construct with [`CurveBuilder`].
///
/// # Example
///
/// ```rust
/// use tenor_curves::prelude::*;
///
/// let curve = CurveBuilder::new("3M-fixings")
///     .interpolation_entity(InterpolationEntity::Value)
///     .add_point(1.0, 0.02, true)
///     .add_point(2.0, 0.03, true)
///     .build()
///     .unwrap();
///
/// assert!((curve.value(1.5).unwrap() - 0.025).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct Curve {
    name: String,
    reference_date: Option<Date>,
    interpolation_method: InterpolationMethod,
    extrapolation_method: ExtrapolationMethod,
    interpolation_entity: InterpolationEntity,
    points: PointStore,
    transform: &'static dyn EntityTransform,
    extrapolator: Arc<dyn Extrapolator>,
    interpolant: OnceCell<Arc<dyn Interpolator>>,
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("reference_date", &self.reference_date)
            .field("interpolation_method", &self.interpolation_method)
            .field("extrapolation_method", &self.extrapolation_method)
            .field("interpolation_entity", &self.interpolation_entity)
            .field("points", &self.points.points())
            .finish()
    }
}

impl Curve {
    /// Returns the curve name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date corresponding to time 0, if any.
    #[must_use]
    pub fn reference_date(&self) -> Option<Date> {
        self.reference_date
    }

    /// Returns the interpolation scheme.
    #[must_use]
    pub fn interpolation_method(&self) -> InterpolationMethod {
        self.interpolation_method
    }

    /// Returns the extrapolation policy.
    #[must_use]
    pub fn extrapolation_method(&self) -> ExtrapolationMethod {
        self.extrapolation_method
    }

    /// Returns the interpolation entity.
    #[must_use]
    pub fn interpolation_entity(&self) -> InterpolationEntity {
        self.interpolation_entity
    }

    /// Ordered view of the points.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        self.points.points()
    }

    /// Returns the point stored at exactly `time`.
    pub fn point_at(&self, time: f64) -> CurveResult<&CurvePoint> {
        self.points.point_at(time)
    }

    /// Value of the curve at `time`.
    ///
    /// Interpolates inside the node range and extrapolates outside it, in
    /// the entity space, then decodes the result.
    pub fn value(&self, time: f64) -> CurveResult<f64> {
        if !time.is_finite() {
            return Err(CurveError::non_finite_input(time, f64::NAN));
        }

        let interpolant = self.interpolant()?;
        let (t_min, t_max) = (interpolant.min_x(), interpolant.max_x());

        let encoded = if time < t_min {
            self.extrapolate(&**interpolant, time, t_min)?
        } else if time > t_max {
            self.extrapolate(&**interpolant, time, t_max)?
        } else {
            interpolant.interpolate(time)?
        };

        Ok(self.transform.decode(encoded, time))
    }

    /// Value of the curve at `time` within a model.
    ///
    /// A plain curve does not depend on other curves, so the model is unused.
    pub fn value_in_model(&self, _model: Option<&AnalyticModel>, time: f64) -> CurveResult<f64> {
        self.value(time)
    }

    /// Converts a date into a time from the reference date (ACT/365).
    pub fn time_of(&self, date: &Date) -> CurveResult<f64> {
        self.reference_date
            .map(|reference| reference.year_fraction_to(date))
            .ok_or_else(|| CurveError::missing_reference_date(&self.name))
    }

    /// Converts a time into a date, rounded to whole days (ACT/365).
    pub fn date_of(&self, time: f64) -> CurveResult<Date> {
        if !time.is_finite() {
            return Err(CurveError::non_finite_input(time, f64::NAN));
        }
        let reference = self
            .reference_date
            .ok_or_else(|| CurveError::missing_reference_date(&self.name))?;
        Ok(reference.add_year_fraction(time)?)
    }

    /// Values of the calibration parameters, in time order.
    #[must_use]
    pub fn parameters(&self) -> Vec<f64> {
        self.points.parameter_values()
    }

    /// Overwrites the calibration parameters in time order.
    ///
    /// # Errors
    ///
    /// Fails on a length mismatch or if a new value is outside the domain of
    /// the entity. The curve is unchanged on error.
    pub fn set_parameters(&mut self, values: &[f64]) -> CurveResult<()> {
        let mut points = self.points.clone();
        points.set_parameter_values(values)?;
        encode_nodes(self.transform, points.points())?;

        self.points = points;
        self.interpolant = OnceCell::new();
        debug!("curve '{}': {} parameters updated", self.name, values.len());
        Ok(())
    }

    /// Returns a copy of the curve with the given calibration parameters.
    pub fn clone_for_parameters(&self, values: &[f64]) -> CurveResult<Self> {
        let mut curve = self.clone();
        curve.set_parameters(values)?;
        Ok(curve)
    }

    /// Inserts a point after construction.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate time, a non-finite input or a value outside the
    /// entity's domain.
    pub fn add_point(&mut self, time: f64, value: f64, is_parameter: bool) -> CurveResult<()> {
        self.transform.encode(value, time)?;
        self.points.add_point(time, value, is_parameter)?;
        self.interpolant = OnceCell::new();
        Ok(())
    }

    fn interpolant(&self) -> CurveResult<&Arc<dyn Interpolator>> {
        self.interpolant.get_or_try_init(|| {
            trace!(
                "curve '{}': building {} interpolant over {} points",
                self.name,
                self.interpolation_method,
                self.points.len()
            );
            let (xs, ys) = encode_nodes(self.transform, self.points.points())?;
            self.interpolation_method.build(xs, ys)
        })
    }

    fn extrapolate(&self, interpolant: &dyn Interpolator, time: f64, boundary: f64) -> CurveResult<f64> {
        let value = interpolant.interpolate(boundary)?;
        let slope = interpolant.derivative(boundary)?;
        Ok(self.extrapolator.extrapolate(time, boundary, value, slope))
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Curve '{}' [{} / {} / {}]",
            self.name,
            self.interpolation_method,
            self.extrapolation_method,
            self.interpolation_entity
        )?;
        if let Some(date) = self.reference_date {
            write!(f, " as of {date}")?;
        }
        write!(f, ":")?;
        for point in self.points.points() {
            write!(f, " {point}")?;
        }
        Ok(())
    }
}

/// Encodes every point, filling degenerate nodes from their nearest regular
/// neighbour (or 0 if there is none).
fn encode_nodes(
    transform: &dyn EntityTransform,
    points: &[CurvePoint],
) -> CurveResult<(Vec<f64>, Vec<f64>)> {
    let xs: Vec<f64> = points.iter().map(|p| p.time).collect();
    let mut ys = points
        .iter()
        .map(|p| transform.encode(p.value, p.time))
        .collect::<CurveResult<Vec<f64>>>()?;

    let regular = |j: &usize| !transform.is_degenerate_at(xs[*j]);
    for i in (0..xs.len()).filter(|i| !regular(i)) {
        let left = (0..i).rev().find(regular);
        let right = (i + 1..xs.len()).find(regular);
        let source = match (left, right) {
            (Some(l), Some(r)) if xs[i] - xs[l] < xs[r] - xs[i] => Some(l),
            (_, Some(r)) => Some(r),
            (l, None) => l,
        };
        ys[i] = source.map_or(0.0, |j| ys[j]);
    }

    Ok((xs, ys))
}

/// Builder for [`Curve`].
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    name: String,
    reference_date: Option<Date>,
    interpolation_method: InterpolationMethod,
    extrapolation_method: ExtrapolationMethod,
    interpolation_entity: InterpolationEntity,
    points: Vec<CurvePoint>,
}

impl CurveBuilder {
    /// Starts a curve with the given name and default selectors.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_date: None,
            interpolation_method: InterpolationMethod::default(),
            extrapolation_method: ExtrapolationMethod::default(),
            interpolation_entity: InterpolationEntity::default(),
            points: Vec::new(),
        }
    }

    /// Sets the date corresponding to time 0.
    #[must_use]
    pub fn reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Sets an optional reference date.
    #[must_use]
    pub fn maybe_reference_date(mut self, date: Option<Date>) -> Self {
        self.reference_date = date;
        self
    }

    /// Sets the interpolation scheme.
    #[must_use]
    pub fn interpolation_method(mut self, method: InterpolationMethod) -> Self {
        self.interpolation_method = method;
        self
    }

    /// Sets the extrapolation policy.
    #[must_use]
    pub fn extrapolation_method(mut self, method: ExtrapolationMethod) -> Self {
        self.extrapolation_method = method;
        self
    }

    /// Sets the interpolation entity.
    #[must_use]
    pub fn interpolation_entity(mut self, entity: InterpolationEntity) -> Self {
        self.interpolation_entity = entity;
        self
    }

    /// Adds a point.
    #[must_use]
    pub fn add_point(mut self, time: f64, value: f64, is_parameter: bool) -> Self {
        self.points.push(CurvePoint::new(time, value, is_parameter));
        self
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Fails if there are no points, a time repeats, an input is not finite,
    /// or a value is outside the domain of the entity.
    pub fn build(self) -> CurveResult<Curve> {
        if self.points.is_empty() {
            return Err(CurveError::empty_curve(self.name));
        }

        let mut store = PointStore::new();
        for p in &self.points {
            store.add_point(p.time, p.value, p.is_parameter)?;
        }

        let transform = self.interpolation_entity.transform();
        encode_nodes(transform, store.points())?;

        debug!(
            "curve '{}': {} points, {} / {} / {}",
            self.name,
            store.len(),
            self.interpolation_method,
            self.extrapolation_method,
            self.interpolation_entity
        );

        Ok(Curve {
            name: self.name,
            reference_date: self.reference_date,
            interpolation_method: self.interpolation_method,
            extrapolation_method: self.extrapolation_method,
            interpolation_entity: self.interpolation_entity,
            points: store,
            transform,
            extrapolator: self.extrapolation_method.extrapolator(),
            interpolant: OnceCell::new(),
        })
    }
}
