//! Abstract Factory scenario: the same client renders a UI out of each
//! widget family in turn.
//!
//! Run with: cargo run --bin p08_abstract_factory

use pattern_catalog::creational::abstract_factory::{render_ui, MacFactory, WindowsFactory};
use pattern_catalog::trace;

fn main() {
    trace::banner("Abstract Factory");

    trace::note("Client: Testing client code with the first factory type:");
    trace::emit(&render_ui(&WindowsFactory));
    trace::blank();

    trace::note("Client: Testing the same client code with the second factory type:");
    trace::emit(&render_ui(&MacFactory));
}
