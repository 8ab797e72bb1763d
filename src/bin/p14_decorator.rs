//! Decorator scenario: a component picks up two wrapper layers and the
//! client calls it the same way throughout.
//!
//! Run with: cargo run --bin p14_decorator

use pattern_catalog::structural::decorator::{
    Component, ConcreteComponent, ConcreteDecoratorA, ConcreteDecoratorB,
};
use pattern_catalog::trace;

fn client_code(component: &dyn Component) {
    trace::line(&format!("Result: {}", component.operation()));
}

fn main() {
    trace::banner("Decorator");

    let simple = ConcreteComponent;
    trace::note("Client: I have got a simple component:");
    client_code(&simple);
    trace::blank();

    let decorated =
        ConcreteDecoratorB::new(Box::new(ConcreteDecoratorA::new(Box::new(ConcreteComponent))));
    trace::note("Client: This is a decorated component:");
    client_code(&decorated);
    trace::blank();

    trace::note("Client: And unwrapped one layer again:");
    client_code(decorated.into_inner().as_ref());
}
