//! Girth Core Types and Definitions
//!
//! This crate provides typed 2-D shapes with validated dimensions and the
//! aggregation of their perimeters. It includes:
//!
//! - **Shapes**: The [`shape::Shape`] trait and its variants ([`shape`] module)
//! - **Scenes**: Shared-ownership collections of mixed shapes ([`scene::Scene`])
//! - **Errors**: Construction failures ([`error::GeometryError`])
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use girth_core::{scene::Scene, shape::{Circle, Shape, Square}};
//!
//! let circle = Rc::new(Circle::new(1.0)?);
//! let mut scene = Scene::new();
//! scene.add_shape(circle.clone());
//! scene.add_shape(Rc::new(Square::new(1.0)?));
//!
//! let total = scene.get_circumference();
//! assert!((total - (circle.get_circumference() + 4.0)).abs() < 1e-12);
//! # Ok::<(), girth_core::error::GeometryError>(())
//! ```

pub mod error;
pub mod scene;
pub mod shape;
