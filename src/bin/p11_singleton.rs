//! Singleton scenario: two threads race to construct the instance with
//! different values; exactly one of them wins.
//!
//! Run with: cargo run --bin p11_singleton

use pattern_catalog::creational::singleton::Singleton;
use pattern_catalog::trace;
use std::thread;
use std::time::Duration;

fn worker(value: &'static str) {
    thread::sleep(Duration::from_millis(50));
    let singleton = Singleton::instance(value);
    println!("{}", singleton.value());
}

fn main() {
    trace::banner("Singleton");

    trace::note("If you see the same value twice, then the singleton was reused (yay!)");
    trace::note("If you see different values, then two singletons were created (booo!!)");
    trace::blank();

    let foo = thread::spawn(|| worker("FOO"));
    let bar = thread::spawn(|| worker("BAR"));

    // Both threads must finish before the process exits.
    if foo.join().is_err() || bar.join().is_err() {
        trace::line("a worker thread panicked");
    }
}
