//! Proxy scenario: the client fires the same request at the real subject
//! and at a proxy guarding it.
//!
//! Run with: cargo run --bin p15_proxy

use pattern_catalog::structural::proxy::{Proxy, RealSubject, Subject};
use pattern_catalog::trace;

fn client_code(subject: &dyn Subject) {
    trace::emit(&subject.request());
}

fn main() {
    trace::banner("Proxy");

    trace::note("Client: Executing the client code with a real subject:");
    client_code(&RealSubject);
    trace::blank();

    trace::note("Client: Executing the same client code with a proxy:");
    client_code(&Proxy::new(RealSubject));
    trace::blank();

    trace::note("Client: And with a proxy that refuses access:");
    client_code(&Proxy::with_access(RealSubject, false));
}
