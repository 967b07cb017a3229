use super::{Shape, validate_dimension};
use crate::error::GeometryError;

/// Equilateral triangle with a fixed, non-negative side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilateralTriangle {
    side: f64,
}

impl EquilateralTriangle {
    pub const NAME: &'static str = "equilateral triangle";

    /// Creates a triangle, failing with [`GeometryError::InvalidDimension`]
    /// when `side` is negative.
    pub fn new(side: f64) -> Result<Self, GeometryError> {
        let side = validate_dimension(Self::NAME, "side", side)?;
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for EquilateralTriangle {
    fn get_circumference(&self) -> f64 {
        3.0 * self.side
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
