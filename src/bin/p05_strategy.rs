//! Strategy scenario: the same context sorts one way, then the other, and
//! finally reports what happens with no strategy at all.
//!
//! Run with: cargo run --bin p05_strategy

use pattern_catalog::behavioral::strategy::{Ascending, Context, Descending};
use pattern_catalog::trace;

fn main() {
    trace::banner("Strategy");

    let mut context = Context::new(Box::new(Ascending));
    trace::note("Client: Strategy is set to normal sorting.");
    trace::emit(&context.do_business_logic());
    trace::blank();

    trace::note("Client: Strategy is set to reverse sorting.");
    context.set_strategy(Box::new(Descending));
    trace::emit(&context.do_business_logic());
    trace::blank();

    trace::note("Client: And with no strategy at all.");
    trace::emit(&Context::unset().do_business_logic());
}
