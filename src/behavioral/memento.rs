//! Memento: snapshots of an originator's state that only the originator can
//! look inside, stacked up by a caretaker for undo.

use chrono::{DateTime, Local};
use rand::distributions::Alphanumeric;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestoreError {
    #[error("snapshot holds no state")]
    EmptySnapshot,
}

/// An opaque snapshot. Holders see the label and date; the state itself is
/// readable only inside this module, i.e. by the originator.
pub struct Memento {
    state: String,
    stamp: DateTime<Local>,
}

impl Memento {
    fn new(state: String) -> Self {
        Self {
            state,
            stamp: Local::now(),
        }
    }

    pub fn date(&self) -> String {
        self.stamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Metadata a caretaker may show: timestamp plus the first few
    /// characters of the state.
    pub fn label(&self) -> String {
        let head: String = self.state.chars().take(9).collect();
        format!("{} / ({}...)", self.date(), head)
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// Owns the mutable state and is the only party able to read it back out of
/// a snapshot.
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Stand-in business logic: scrambles the state to a random 30-char
    /// alphanumeric string.
    pub fn do_something(&mut self) -> Vec<String> {
        let mut lines = vec!["Originator: I'm doing something important.".to_string()];
        self.state = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(30)
            .map(char::from)
            .collect();
        lines.push(format!(
            "Originator: and my state has changed to: {}",
            self.state
        ));
        lines
    }

    pub fn save(&self) -> Memento {
        Memento::new(self.state.clone())
    }

    /// Overwrites the state from a snapshot. A snapshot with no state in it
    /// is treated as corrupt and refused.
    pub fn restore(&mut self, memento: &Memento) -> Result<String, RestoreError> {
        if memento.state().is_empty() {
            return Err(RestoreError::EmptySnapshot);
        }
        self.state = memento.state().to_string();
        Ok(format!("Originator: My state has changed to: {}", self.state))
    }
}

/// Stores snapshots in order without ever looking inside them.
#[derive(Default)]
pub struct Caretaker {
    mementos: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backup(&mut self, originator: &Originator) -> String {
        self.mementos.push(originator.save());
        "Caretaker: Saving Originator's state...".to_string()
    }

    /// Pops the newest snapshot and restores it. A snapshot that refuses to
    /// restore is discarded and the next-older one is tried; running out of
    /// history is a quiet no-op.
    pub fn undo(&mut self, originator: &mut Originator) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(memento) = self.mementos.pop() {
            lines.push(format!("Caretaker: Restoring state to: {}", memento.label()));
            match originator.restore(&memento) {
                Ok(line) => {
                    lines.push(line);
                    break;
                }
                Err(err) => {
                    lines.push(format!("Caretaker: {err}, trying an older snapshot"));
                }
            }
        }
        lines
    }

    pub fn show_history(&self) -> Vec<String> {
        let mut lines = vec!["Caretaker: Here's the list of mementos:".to_string()];
        lines.extend(self.mementos.iter().map(Memento::label));
        lines
    }

    pub fn depth(&self) -> usize {
        self.mementos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_restore_roundtrips_state() {
        let mut originator = Originator::new("Super-duper-super-puper-super.");
        let snapshot = originator.save();

        originator.do_something();
        assert_ne!(originator.state(), "Super-duper-super-puper-super.");

        originator.restore(&snapshot).unwrap();
        assert_eq!(originator.state(), "Super-duper-super-puper-super.");
    }

    #[test]
    fn scrambled_state_is_thirty_alphanumerics() {
        let mut originator = Originator::new("seed");
        originator.do_something();
        assert_eq!(originator.state().len(), 30);
        assert!(originator.state().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn undo_walks_history_newest_first() {
        let mut originator = Originator::new("first");
        let mut caretaker = Caretaker::new();

        caretaker.backup(&originator);
        originator.do_something();
        caretaker.backup(&originator);
        let second = originator.state().to_string();
        originator.do_something();

        caretaker.undo(&mut originator);
        assert_eq!(originator.state(), second);

        caretaker.undo(&mut originator);
        assert_eq!(originator.state(), "first");
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut originator = Originator::new("untouched");
        let mut caretaker = Caretaker::new();

        let lines = caretaker.undo(&mut originator);
        assert!(lines.is_empty());
        assert_eq!(originator.state(), "untouched");
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_older_history() {
        let stable = Originator::new("stable");
        let corrupt = Originator::new("");
        let mut caretaker = Caretaker::new();

        caretaker.backup(&stable);
        caretaker.backup(&corrupt);

        let mut originator = Originator::new("current");
        let lines = caretaker.undo(&mut originator);

        assert_eq!(originator.state(), "stable");
        assert_eq!(caretaker.depth(), 0);
        assert!(lines
            .iter()
            .any(|l| l.contains("trying an older snapshot")));
    }

    #[test]
    fn memento_label_shows_only_a_prefix_of_state() {
        let originator = Originator::new("Super-duper-super-puper-super.");
        let snapshot = originator.save();
        assert!(snapshot.label().ends_with("(Super-dup...)"));
    }

    #[test]
    fn history_lists_snapshots_in_order() {
        let originator = Originator::new("one");
        let mut caretaker = Caretaker::new();
        caretaker.backup(&originator);
        caretaker.backup(&originator);

        let lines = caretaker.show_history();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Caretaker: Here's the list of mementos:");
    }
}
