use super::{Shape, validate_dimension};
use crate::error::GeometryError;

/// Square with a fixed, non-negative side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub const NAME: &'static str = "square";

    /// Creates a square, failing with [`GeometryError::InvalidDimension`]
    /// when `side` is negative.
    pub fn new(side: f64) -> Result<Self, GeometryError> {
        let side = validate_dimension(Self::NAME, "side", side)?;
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn get_circumference(&self) -> f64 {
        4.0 * self.side
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square() {
        let square = Square::new(1.0).unwrap();
        assert_eq!(square.get_circumference(), 4.0);
    }

    #[test]
    fn test_side_accessor() {
        let square = Square::new(2.5).unwrap();
        assert_eq!(square.side(), 2.5);
        assert_eq!(square.get_circumference(), 10.0);
    }

    #[test]
    fn test_zero_side() {
        assert_eq!(Square::new(0.0).unwrap().get_circumference(), 0.0);
    }

    #[test]
    fn test_negative_side() {
        let err = Square::new(-1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a square must have a side of at least 0, got -1"
        );
    }
}
