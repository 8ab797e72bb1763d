//! Visitor scenario: two behaviors sweep over the same mixed shapes without
//! the shape types changing at all.
//!
//! Run with: cargo run --bin p07_visitor

use pattern_catalog::behavioral::visitor::{
    tour, AreaVisitor, Circle, PerimeterVisitor, Shape, Square,
};
use pattern_catalog::trace;

fn main() {
    trace::banner("Visitor");

    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Circle::new(1.0)), Box::new(Square::new(2.0))];

    trace::note("The client code works with all visitors via the base Visitor interface.");
    trace::emit(&tour(&shapes, &PerimeterVisitor));
    trace::blank();

    trace::note("It allows the same client code to work with different types of visitors:");
    trace::emit(&tour(&shapes, &AreaVisitor));
}
