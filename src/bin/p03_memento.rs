//! Memento scenario: three backups interleaved with state scrambles, then
//! two rollbacks through the caretaker.
//!
//! Run with: cargo run --bin p03_memento

use pattern_catalog::behavioral::memento::{Caretaker, Originator};
use pattern_catalog::trace;

fn main() {
    trace::banner("Memento");

    let mut originator = Originator::new("Super-duper-super-puper-super.");
    let mut caretaker = Caretaker::new();
    trace::line(&format!(
        "Originator: My initial state is: {}",
        originator.state()
    ));

    trace::line(&caretaker.backup(&originator));
    trace::emit(&originator.do_something());
    trace::line(&caretaker.backup(&originator));
    trace::emit(&originator.do_something());
    trace::line(&caretaker.backup(&originator));
    trace::emit(&originator.do_something());

    trace::blank();
    trace::emit(&caretaker.show_history());

    trace::blank();
    trace::note("Client: Now, let's rollback!");
    trace::blank();
    trace::emit(&caretaker.undo(&mut originator));

    trace::blank();
    trace::note("Client: Once more!");
    trace::blank();
    trace::emit(&caretaker.undo(&mut originator));
}
