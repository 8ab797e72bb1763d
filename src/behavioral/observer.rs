//! Observer: a subject pushes its current message to every attached reader;
//! readers can detach themselves through a non-owning back-reference.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// The publisher. Shared behind `Rc` so readers can keep a weak
/// back-reference for self-detachment.
pub struct Subject {
    observers: RefCell<Vec<Rc<Reader>>>,
    message: RefCell<String>,
    next_number: Cell<usize>,
}

impl Subject {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            observers: RefCell::new(Vec::new()),
            message: RefCell::new(String::new()),
            next_number: Cell::new(0),
        })
    }

    fn attach(&self, reader: Rc<Reader>) {
        self.observers.borrow_mut().push(reader);
    }

    /// Removes a reader from the list; detaching a reader that is not
    /// attached is a no-op.
    pub fn detach(&self, reader: &Reader) {
        self.observers
            .borrow_mut()
            .retain(|attached| attached.number != reader.number);
    }

    /// Delivers the current message to every attached reader in attachment
    /// order. Walks a snapshot of the list, so a reader detaching mid-pass
    /// never invalidates the iteration.
    pub fn notify(&self) -> Vec<String> {
        let snapshot: Vec<Rc<Reader>> = self.observers.borrow().clone();
        let message = self.message.borrow().clone();
        let mut lines = vec![format!(
            "There are {} observers in the list.",
            snapshot.len()
        )];
        for reader in &snapshot {
            lines.push(reader.update(&message));
        }
        lines
    }

    /// Every call re-delivers, even if the message is unchanged.
    pub fn create_message(&self, message: impl Into<String>) -> Vec<String> {
        *self.message.borrow_mut() = message.into();
        self.notify()
    }

    pub fn some_business_logic(&self) -> Vec<String> {
        *self.message.borrow_mut() = "change message message".to_string();
        let mut lines = self.notify();
        lines.push("I am about to do something important".to_string());
        lines
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

/// A subscriber numbered in attachment order.
pub struct Reader {
    number: usize,
    subject: Weak<Subject>,
    last_message: RefCell<String>,
}

impl Reader {
    /// Creates the reader already attached to `subject`.
    pub fn new(subject: &Rc<Subject>) -> Rc<Self> {
        let number = subject.next_number.get() + 1;
        subject.next_number.set(number);
        let reader = Rc::new(Self {
            number,
            subject: Rc::downgrade(subject),
            last_message: RefCell::new(String::new()),
        });
        subject.attach(Rc::clone(&reader));
        reader
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn last_message(&self) -> String {
        self.last_message.borrow().clone()
    }

    fn update(&self, message: &str) -> String {
        *self.last_message.borrow_mut() = message.to_string();
        format!(
            "Observer \"{}\": a message is available --> {}",
            self.number, message
        )
    }

    /// Detaches this reader through its back-reference; a no-op once the
    /// subject is gone.
    pub fn unsubscribe(&self) -> String {
        if let Some(subject) = self.subject.upgrade() {
            subject.detach(self);
        }
        format!("Observer \"{}\" removed from the list.", self.number)
    }
}
