//! Chain of Responsibility: a request travels down a linked chain of
//! handlers until one of them claims it.

/// One link in the chain.
pub trait Handler {
    /// Replaces any existing successor and returns a reference to the
    /// freshly stored link, so chains read fluently:
    /// `monkey.set_next(squirrel).set_next(dog)`.
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler;

    /// `Some(response)` if this handler (or one further down) took the
    /// request; `None` once the request falls off the end of the chain.
    fn handle(&self, request: &str) -> Option<String>;
}

/// A handler that wants exactly one food and forwards everything else.
///
/// The per-animal behavior is plain data, so one type covers the whole
/// menagerie.
pub struct AnimalHandler {
    animal: String,
    craving: String,
    next: Option<Box<dyn Handler>>,
}

impl AnimalHandler {
    pub fn new(animal: impl Into<String>, craving: impl Into<String>) -> Self {
        Self {
            animal: animal.into(),
            craving: craving.into(),
            next: None,
        }
    }
}

impl Handler for AnimalHandler {
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.next.insert(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == self.craving {
            Some(format!("{}: I'll eat the {}.", self.animal, request))
        } else {
            self.next.as_ref().and_then(|link| link.handle(request))
        }
    }
}

/// The client loop: offers every food to the front of the chain and reports
/// what happened to it.
pub fn serve(handler: &dyn Handler, menu: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    for food in menu {
        lines.push(format!("Client: Who wants a {food}?"));
        match handler.handle(food) {
            Some(response) => lines.push(format!("  {response}")),
            None => lines.push(format!("  {food} was left untouched.")),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records whether a request ever reached it. Used to show that a
    /// handled request stops at the handler that took it.
    struct Probe {
        hits: Rc<Cell<usize>>,
    }

    impl Handler for Probe {
        fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
            // A probe sits at the end of its chain in tests.
            let _ = next;
            self
        }

        fn handle(&self, _request: &str) -> Option<String> {
            self.hits.set(self.hits.get() + 1);
            None
        }
    }

    fn zoo_chain() -> AnimalHandler {
        let mut monkey = AnimalHandler::new("Monkey", "Banana");
        monkey
            .set_next(Box::new(AnimalHandler::new("Squirrel", "Nut")))
            .set_next(Box::new(AnimalHandler::new("Dog", "MeatBall")));
        monkey
    }

    #[test]
    fn matching_handler_responds() {
        let chain = zoo_chain();
        assert_eq!(
            chain.handle("Nut").as_deref(),
            Some("Squirrel: I'll eat the Nut.")
        );
        assert_eq!(
            chain.handle("Banana").as_deref(),
            Some("Monkey: I'll eat the Banana.")
        );
        assert_eq!(
            chain.handle("MeatBall").as_deref(),
            Some("Dog: I'll eat the MeatBall.")
        );
    }

    #[test]
    fn unmatched_request_is_unhandled() {
        let chain = zoo_chain();
        assert_eq!(chain.handle("Cup of coffee"), None);
    }

    #[test]
    fn handled_request_never_passes_its_handler() {
        let hits = Rc::new(Cell::new(0));
        let mut monkey = AnimalHandler::new("Monkey", "Banana");
        monkey
            .set_next(Box::new(AnimalHandler::new("Squirrel", "Nut")))
            .set_next(Box::new(Probe { hits: hits.clone() }));

        assert!(monkey.handle("Banana").is_some());
        assert_eq!(hits.get(), 0, "request matched by the head leaked past it");

        assert!(monkey.handle("Nut").is_some());
        assert_eq!(hits.get(), 0);

        assert!(monkey.handle("Pretzel").is_none());
        assert_eq!(hits.get(), 1, "unmatched request should reach the tail");
    }

    #[test]
    fn set_next_overwrites_previous_successor() {
        let mut monkey = AnimalHandler::new("Monkey", "Banana");
        monkey.set_next(Box::new(AnimalHandler::new("Squirrel", "Nut")));
        monkey.set_next(Box::new(AnimalHandler::new("Dog", "MeatBall")));

        // The squirrel link is gone; nuts now fall through.
        assert_eq!(monkey.handle("Nut"), None);
        assert!(monkey.handle("MeatBall").is_some());
    }

    #[test]
    fn serve_reports_untouched_food() {
        let chain = zoo_chain();
        let lines = serve(&chain, &["Nut", "Cup of coffee"]);
        assert_eq!(
            lines,
            vec![
                "Client: Who wants a Nut?",
                "  Squirrel: I'll eat the Nut.",
                "Client: Who wants a Cup of coffee?",
                "  Cup of coffee was left untouched.",
            ]
        );
    }

    proptest! {
        #[test]
        fn requests_matching_nobody_fall_through(request in "[a-z]{1,12}") {
            // Lowercase requests never collide with the capitalized menu.
            let chain = zoo_chain();
            prop_assert_eq!(chain.handle(&request), None);
        }
    }
}
