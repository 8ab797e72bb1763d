//! Prototype scenario: the registry hands out clones of its pre-configured
//! prototypes; mutating a clone never touches the stored original.
//!
//! Run with: cargo run --bin p10_prototype

use pattern_catalog::creational::prototype::{PrototypeKind, PrototypeRegistry};
use pattern_catalog::trace;

fn main() {
    trace::banner("Prototype");

    let registry = PrototypeRegistry::new();

    trace::note("Let's create a first prototype:");
    if let Some(mut prototype) = registry.create(PrototypeKind::First) {
        trace::line(&prototype.call_with(90.0));
    }
    trace::blank();

    trace::note("Let's create a second prototype:");
    if let Some(mut prototype) = registry.create(PrototypeKind::Second) {
        trace::line(&prototype.call_with(10.0));
    }
    trace::blank();

    // The stored prototypes are untouched by everything above.
    if let Some(fresh) = registry.create(PrototypeKind::First) {
        trace::line(&format!(
            "Registry still holds the first prototype with field: {}",
            fresh.field()
        ));
    }
}
