//! Chain of Responsibility scenario: foods travel down a chain of hungry
//! animals until one claims them.
//!
//! Run with: cargo run --bin p01_chain_of_responsibility

use pattern_catalog::behavioral::chain::{serve, AnimalHandler, Handler};
use pattern_catalog::trace;

const MENU: [&str; 3] = ["Nut", "Banana", "Cup of coffee"];

fn main() {
    trace::banner("Chain of Responsibility");

    let mut monkey = AnimalHandler::new("Monkey", "Banana");
    monkey
        .set_next(Box::new(AnimalHandler::new("Squirrel", "Nut")))
        .set_next(Box::new(AnimalHandler::new("Dog", "MeatBall")));

    trace::note("Chain: Monkey > Squirrel > Dog");
    trace::blank();
    trace::emit(&serve(&monkey, &MENU));
    trace::blank();

    // The squirrel link lives inside the first chain, so the shorter run
    // gets its own fresh chain.
    let mut squirrel = AnimalHandler::new("Squirrel", "Nut");
    squirrel.set_next(Box::new(AnimalHandler::new("Dog", "MeatBall")));

    trace::note("SubChain: Squirrel > Dog");
    trace::blank();
    trace::emit(&serve(&squirrel, &MENU));
}
