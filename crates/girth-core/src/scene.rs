//! Heterogeneous shape collections.
//!
//! A [`Scene`] holds shared references to shapes of any variant and sums
//! their perimeters. Shapes are reference counted, so the same shape may sit
//! in several scenes and outlive any one of them.

use std::{fmt, rc::Rc};

use log::{debug, trace};

use crate::shape::Shape;

/// An ordered collection of shared shape references.
///
/// Shapes keep their insertion order. Duplicates are allowed, and a shape
/// added twice contributes twice to the total.
#[derive(Default, Clone)]
pub struct Scene {
    shapes: Vec<Rc<dyn Shape>>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `shape` to the scene.
    pub fn add_shape(&mut self, shape: Rc<dyn Shape>) {
        debug!(
            shape = shape.name(),
            count = self.shapes.len() + 1;
            "Adding shape to scene"
        );
        self.shapes.push(shape);
    }

    /// Returns the sum of the perimeters of all shapes in the scene.
    ///
    /// Shapes are summed left to right in insertion order, starting from
    /// `0.0`; an empty scene yields exactly `0.0`. Floating-point addition is
    /// not associative, so the same shapes inserted in another order may
    /// differ in the last bits.
    pub fn get_circumference(&self) -> f64 {
        // `Iterator::sum` starts from -0.0, the explicit fold keeps +0.0 for empty scenes.
        let total = self
            .shapes
            .iter()
            .fold(0.0, |acc, shape| acc + shape.get_circumference());
        trace!(count = self.shapes.len(), total; "Summed scene circumference");
        total
    }

    /// Returns the number of shapes in the scene, counting duplicates.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if no shape has been added yet.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over the shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Rc<dyn Shape>> {
        self.shapes.iter()
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.shapes.iter()).finish()
    }
}

impl Extend<Rc<dyn Shape>> for Scene {
    fn extend<I: IntoIterator<Item = Rc<dyn Shape>>>(&mut self, iter: I) {
        for shape in iter {
            self.add_shape(shape);
        }
    }
}

impl FromIterator<Rc<dyn Shape>> for Scene {
    fn from_iter<I: IntoIterator<Item = Rc<dyn Shape>>>(iter: I) -> Self {
        let mut scene = Self::new();
        scene.extend(iter);
        scene
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::shape::{Circle, EquilateralTriangle, Square};

    fn unit_shapes() -> Vec<Rc<dyn Shape>> {
        vec![
            Rc::new(Circle::new(1.0).unwrap()),
            Rc::new(Square::new(1.0).unwrap()),
            Rc::new(EquilateralTriangle::new(1.0).unwrap()),
        ]
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 0);

        let total = scene.get_circumference();
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }

    #[test]
    fn test_unit_circle_and_square() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(Circle::new(1.0).unwrap()));
        scene.add_shape(Rc::new(Square::new(1.0).unwrap()));

        assert_eq!(scene.len(), 2);
        assert_approx_eq!(f64, scene.get_circumference(), TAU + 4.0);
    }

    #[test]
    fn test_add_shape_preserves_order() {
        let scene: Scene = unit_shapes().into_iter().collect();

        let names: Vec<_> = scene.shapes().map(|shape| shape.name()).collect();
        assert_eq!(names, ["circle", "square", "equilateral triangle"]);
    }

    #[test]
    fn test_duplicate_shape_counts_twice() {
        let square: Rc<dyn Shape> = Rc::new(Square::new(2.0).unwrap());
        let mut scene = Scene::new();
        scene.add_shape(square.clone());
        scene.add_shape(square.clone());

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get_circumference(), 16.0);
        assert_eq!(Rc::strong_count(&square), 3);
    }

    #[test]
    fn test_extend_appends_after_existing_shapes() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(Square::new(1.0).unwrap()));
        scene.extend(unit_shapes());

        assert_eq!(scene.len(), 4);
        assert_eq!(scene.shapes().next().map(|shape| shape.name()), Some("square"));
        assert_approx_eq!(f64, scene.get_circumference(), 4.0 + TAU + 4.0 + 3.0);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let scene: Scene = unit_shapes().into_iter().collect();
        assert_eq!(scene.get_circumference(), scene.get_circumference());
    }

    #[test]
    fn test_debug_lists_shapes() {
        let mut scene = Scene::new();
        scene.add_shape(Rc::new(Square::new(1.0).unwrap()));
        assert_eq!(format!("{scene:?}"), "[Square { side: 1.0 }]");
    }
}
