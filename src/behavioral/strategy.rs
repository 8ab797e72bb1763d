//! Strategy: the context delegates its work to whichever interchangeable
//! algorithm object it currently holds.

/// One interchangeable algorithm.
pub trait SortStrategy {
    fn apply(&self, data: &str) -> String;
}

/// Sorts characters in ascending order.
pub struct Ascending;

impl SortStrategy for Ascending {
    fn apply(&self, data: &str) -> String {
        let mut chars: Vec<char> = data.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

/// Sorts characters in descending order.
pub struct Descending;

impl SortStrategy for Descending {
    fn apply(&self, data: &str) -> String {
        let mut chars: Vec<char> = data.chars().collect();
        chars.sort_unstable_by(|a, b| b.cmp(a));
        chars.into_iter().collect()
    }
}

/// Holds zero or one strategy; setting a new one fully replaces the old.
#[derive(Default)]
pub struct Context {
    strategy: Option<Box<dyn SortStrategy>>,
}

impl Context {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    pub fn unset() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Runs the fixed sample through the current strategy; reports rather
    /// than fails when no strategy is set.
    pub fn do_business_logic(&self) -> Vec<String> {
        match &self.strategy {
            Some(strategy) => vec![
                "Context: Sorting data using the strategy".to_string(),
                strategy.apply("aecbd"),
            ],
            None => vec!["Context: Strategy isn't set".to_string()],
        }
    }
}
