//! Singleton: a process-wide instance constructed exactly once, even when
//! the first accesses race from different threads.

use std::sync::OnceLock;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

/// The shared instance. `OnceLock` serializes the construction race, so the
/// first caller to win it decides the stored value for everyone.
pub struct Singleton {
    value: String,
}

impl Singleton {
    /// Returns the process-wide instance, constructing it from `value` only
    /// if nobody got there first.
    pub fn instance(value: &str) -> &'static Singleton {
        INSTANCE.get_or_init(|| Singleton {
            value: value.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
