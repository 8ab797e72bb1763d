//! Bridge scenario: two controller flavors drive two platforms through one
//! implementation interface.
//!
//! Run with: cargo run --bin p12_bridge

use pattern_catalog::structural::bridge::{
    Controller, ExtendedController, PlatformA, PlatformB, Remote,
};
use pattern_catalog::trace;

fn client_code(remote: &dyn Remote) {
    trace::line(&remote.operate());
}

fn main() {
    trace::banner("Bridge");

    let basic = Controller::new(Box::new(PlatformA));
    client_code(&basic);
    trace::blank();

    let extended = ExtendedController::new(Box::new(PlatformB));
    client_code(&extended);
}
