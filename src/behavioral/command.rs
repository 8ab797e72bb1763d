//! Command: a request packaged as a stand-alone object, executed later by
//! an invoker that knows nothing about its contents.

/// A command produces its effect as trace lines.
pub trait Command {
    fn execute(&self) -> Vec<String>;
}

/// A command that carries its whole payload with it.
pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) -> Vec<String> {
        vec![format!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        )]
    }
}

/// Holds the actual business operations commands delegate to.
#[derive(Default)]
pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, task: &str) -> String {
        format!("Receiver: Working on ({task}.)")
    }

    pub fn do_something_else(&self, task: &str) -> String {
        format!("Receiver: Also working on ({task}.)")
    }
}

/// A command that delegates its work to a receiver.
pub struct ComplexCommand {
    receiver: Receiver,
    first_task: String,
    second_task: String,
}

impl ComplexCommand {
    pub fn new(
        receiver: Receiver,
        first_task: impl Into<String>,
        second_task: impl Into<String>,
    ) -> Self {
        Self {
            receiver,
            first_task: first_task.into(),
            second_task: second_task.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) -> Vec<String> {
        vec![
            "ComplexCommand: Complex stuff should be done by a receiver object.".to_string(),
            self.receiver.do_something(&self.first_task),
            self.receiver.do_something_else(&self.second_task),
        ]
    }
}

/// Runs commands at two fixed extension points around its own work, without
/// depending on any concrete command or receiver type.
#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn do_something_important(&self) -> Vec<String> {
        let mut lines =
            vec!["Invoker: Does anybody want something done before I begin?".to_string()];
        if let Some(command) = &self.on_start {
            lines.extend(command.execute());
        }
        lines.push("Invoker: ...doing something really important...".to_string());
        lines.push("Invoker: Does anybody want something done before I finish?".to_string());
        if let Some(command) = &self.on_finish {
            lines.extend(command.execute());
        }
        lines
    }
}
