//! Shape definitions and the perimeter contract.
//!
//! This module provides the [`Shape`] trait together with its concrete
//! variants. Every variant validates its dimension on construction and is
//! immutable afterwards, so a perimeter query can never fail.

use log::debug;

use crate::error::GeometryError;

mod circle;
mod equilateral_triangle;
mod square;

pub use circle::Circle;
pub use equilateral_triangle::EquilateralTriangle;
pub use square::Square;

/// A closed 2-D shape with a boundary length.
///
/// Callers work with `dyn Shape`; the concrete variant's formula is picked at
/// runtime, so new variants only have to implement this trait.
pub trait Shape: std::fmt::Debug {
    /// Returns the total length of the shape's boundary.
    fn get_circumference(&self) -> f64;

    /// Returns a short human-readable name for the shape kind.
    fn name(&self) -> &'static str;
}

/// Checks that `value` is a usable dimension for `shape`.
///
/// Zero is accepted as a degenerate case and always returned as `+0.0`.
/// Negative values and NaN are rejected with
/// [`GeometryError::InvalidDimension`].
pub fn validate_dimension(
    shape: &'static str,
    dimension: &'static str,
    value: f64,
) -> Result<f64, GeometryError> {
    // Written as a negated `>=` so that NaN falls through to the error branch.
    if !(value >= 0.0) {
        debug!(shape, dimension, value; "Rejected shape dimension");
        return Err(GeometryError::invalid_dimension(shape, dimension, value));
    }
    // Adding +0.0 turns -0.0 into +0.0 and leaves every other value unchanged.
    Ok(value + 0.0)
}
