//! Command scenario: an invoker runs whatever commands were hung on its
//! start and finish extension points.
//!
//! Run with: cargo run --bin p02_command

use pattern_catalog::behavioral::command::{ComplexCommand, Invoker, Receiver, SimpleCommand};
use pattern_catalog::trace;

fn main() {
    trace::banner("Command");

    let mut invoker = Invoker::new();
    invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));
    invoker.set_on_finish(Box::new(ComplexCommand::new(
        Receiver,
        "Send Email",
        "Save Report",
    )));

    trace::emit(&invoker.do_something_important());
}
