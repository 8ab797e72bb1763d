//! Template Method scenario: the same client code drives two workflow
//! variants through the one fixed skeleton.
//!
//! Run with: cargo run --bin p06_template_method

use pattern_catalog::behavioral::template::{AuditJob, DailyJob, Workflow};
use pattern_catalog::trace;

fn client_code(workflow: &dyn Workflow) {
    trace::emit(&workflow.run());
}

fn main() {
    trace::banner("Template Method");

    trace::note("Same client code can work with different variants:");
    client_code(&DailyJob);
    trace::blank();

    trace::note("Same client code can work with different variants:");
    client_code(&AuditJob);
}
