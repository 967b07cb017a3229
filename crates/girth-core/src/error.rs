//! Error types for shape construction.
//!
//! Construction is the only fallible operation in this crate: perimeter
//! queries and scene mutation are total.

use thiserror::Error;

/// Errors raised while constructing a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension was negative (or not a number).
    #[error(
        "{} {shape} must have a {dimension} of at least 0, got {value}",
        indefinite_article(.shape)
    )]
    InvalidDimension {
        /// Name of the shape being constructed, e.g. `"circle"`.
        shape: &'static str,
        /// Name of the offending dimension, e.g. `"radius"`.
        dimension: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl GeometryError {
    pub(crate) fn invalid_dimension(
        shape: &'static str,
        dimension: &'static str,
        value: f64,
    ) -> Self {
        Self::InvalidDimension {
            shape,
            dimension,
            value,
        }
    }
}

fn indefinite_article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let err = GeometryError::invalid_dimension("circle", "radius", -1.0);
        assert_eq!(
            err.to_string(),
            "a circle must have a radius of at least 0, got -1"
        );
    }

    #[test]
    fn test_invalid_dimension_message_uses_an_before_vowel() {
        let err = GeometryError::invalid_dimension("equilateral triangle", "side", -2.5);
        assert_eq!(
            err.to_string(),
            "an equilateral triangle must have a side of at least 0, got -2.5"
        );
    }

    #[test]
    fn test_indefinite_article() {
        assert_eq!(indefinite_article("square"), "a");
        assert_eq!(indefinite_article("oval"), "an");
        assert_eq!(indefinite_article(""), "a");
    }
}
