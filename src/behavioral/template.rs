//! Template Method: the skeleton of an operation is fixed once; variants
//! fill in only the override points.

/// The algorithm skeleton. `run` fixes the step order for every variant;
/// implementors supply the two required steps and may opt into the hooks.
pub trait Workflow {
    fn run(&self) -> Vec<String> {
        let mut lines = vec![
            "Workflow says: I am doing the bulk of the work".to_string(),
            self.required_step1(),
            "Workflow says: But I let subclasses override some operations".to_string(),
        ];
        if let Some(line) = self.hook1() {
            lines.push(line);
        }
        lines.push(self.required_step2());
        lines.push("Workflow says: But I am doing the bulk of the work anyway".to_string());
        if let Some(line) = self.hook2() {
            lines.push(line);
        }
        lines
    }

    fn required_step1(&self) -> String;
    fn required_step2(&self) -> String;

    /// Optional steps; the default contributes nothing.
    fn hook1(&self) -> Option<String> {
        None
    }

    fn hook2(&self) -> Option<String> {
        None
    }
}

/// Supplies only the mandatory steps.
pub struct DailyJob;

impl Workflow for DailyJob {
    fn required_step1(&self) -> String {
        "DailyJob says: Implemented Operation1".to_string()
    }

    fn required_step2(&self) -> String {
        "DailyJob says: Implemented Operation2".to_string()
    }
}

/// Also overrides the first hook.
pub struct AuditJob;

impl Workflow for AuditJob {
    fn required_step1(&self) -> String {
        "AuditJob says: Implemented Operation1".to_string()
    }

    fn required_step2(&self) -> String {
        "AuditJob says: Implemented Operation2".to_string()
    }

    fn hook1(&self) -> Option<String> {
        Some("AuditJob says: Overridden Hook1".to_string())
    }
}
