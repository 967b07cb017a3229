use std::f64::consts::TAU;

use super::{Shape, validate_dimension};
use crate::error::GeometryError;

/// Circle with a fixed, non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub const NAME: &'static str = "circle";

    /// Creates a circle, failing with [`GeometryError::InvalidDimension`]
    /// when `radius` is negative.
    pub fn new(radius: f64) -> Result<Self, GeometryError> {
        let radius = validate_dimension(Self::NAME, "radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn get_circumference(&self) -> f64 {
        TAU * self.radius
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
