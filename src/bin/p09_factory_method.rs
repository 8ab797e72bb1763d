//! Factory Method scenario: the shared planning code runs against whichever
//! transport the concrete creator builds.
//!
//! Run with: cargo run --bin p09_factory_method

use pattern_catalog::creational::factory_method::{Logistics, RoadLogistics, SeaLogistics};
use pattern_catalog::trace;

fn client_code(logistics: &dyn Logistics) {
    trace::line(&format!("Client calling: {}", logistics.plan_delivery()));
}

fn main() {
    trace::banner("Factory Method");

    trace::note("App: Launched with RoadLogistics.");
    client_code(&RoadLogistics);
    trace::blank();

    trace::note("App: Launched with SeaLogistics.");
    client_code(&SeaLogistics);
}
