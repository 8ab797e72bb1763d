//! Observer scenario: readers come and go while the subject keeps pushing
//! messages to whoever is currently attached.
//!
//! Run with: cargo run --bin p04_observer

use pattern_catalog::behavioral::observer::{Reader, Subject};
use pattern_catalog::trace;

fn main() {
    trace::banner("Observer");

    let subject = Subject::new();
    let observer1 = Reader::new(&subject);
    let observer2 = Reader::new(&subject);
    let observer3 = Reader::new(&subject);
    for observer in [&observer1, &observer2, &observer3] {
        trace::line(&format!("Hi, I am the observer \"{}\".", observer.number()));
    }

    trace::emit(&subject.create_message("Hello World! :D"));
    trace::line(&observer3.unsubscribe());
    trace::emit(&subject.create_message("The weather is hot today! :P"));

    let observer4 = Reader::new(&subject);
    trace::line(&format!("Hi, I am the observer \"{}\".", observer4.number()));
    trace::line(&observer2.unsubscribe());

    let observer5 = Reader::new(&subject);
    trace::line(&format!("Hi, I am the observer \"{}\".", observer5.number()));
    trace::emit(&subject.create_message("My new car is great! ;)"));

    trace::line(&observer5.unsubscribe());
    trace::line(&observer4.unsubscribe());
    trace::line(&observer1.unsubscribe());
}
