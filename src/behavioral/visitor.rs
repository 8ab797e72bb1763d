//! Visitor: double dispatch over trait objects. Each shape forwards to the
//! visitor method matching its own runtime type, so new behaviors can be
//! bolted on without touching the shape types.

use std::f64::consts::PI;

/// One behavior over the whole shape family.
pub trait Visitor {
    fn visit_circle(&self, circle: &Circle) -> String;
    fn visit_square(&self, square: &Square) -> String;
}

/// A shape accepts a visitor and routes it to the right `visit_*` method.
pub trait Shape {
    fn accept(&self, visitor: &dyn Visitor) -> String;
}

pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Only circles have a radius; visitors reach it through the concrete
    /// type their `visit_circle` receives.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_circle(self)
    }
}

pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_square(self)
    }
}

pub struct PerimeterVisitor;

impl Visitor for PerimeterVisitor {
    fn visit_circle(&self, circle: &Circle) -> String {
        format!("Circle perimeter: {:.2}", 2.0 * PI * circle.radius())
    }

    fn visit_square(&self, square: &Square) -> String {
        format!("Square perimeter: {:.2}", 4.0 * square.side())
    }
}

pub struct AreaVisitor;

impl Visitor for AreaVisitor {
    fn visit_circle(&self, circle: &Circle) -> String {
        format!("Circle area: {:.2}", PI * circle.radius() * circle.radius())
    }

    fn visit_square(&self, square: &Square) -> String {
        format!("Square area: {:.2}", square.side() * square.side())
    }
}

/// The client walks any mix of shapes with any visitor through the base
/// interfaces alone.
pub fn tour(shapes: &[Box<dyn Shape>], visitor: &dyn Visitor) -> Vec<String> {
    shapes.iter().map(|shape| shape.accept(visitor)).collect()
}
