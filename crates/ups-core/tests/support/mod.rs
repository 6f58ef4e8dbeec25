#![allow(dead_code)]

use std::cell::RefCell;

use ups_core::deploy::{CommandExecutor, CommandVerb, ServiceCommand};
use ups_core::error::ExecutionError;

type FailRule = Box<dyn Fn(&ServiceCommand) -> bool>;

/// Executor that records every command and fails the ones matching a rule.
pub struct RecordingExecutor {
    calls: RefCell<Vec<ServiceCommand>>,
    fail_when: FailRule,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::failing_when(|_| false)
    }

    pub fn failing_when(rule: impl Fn(&ServiceCommand) -> bool + 'static) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_when: Box::new(rule),
        }
    }

    /// Fails every `create`, succeeds every `update`.
    pub fn failing_creates() -> Self {
        Self::failing_when(|cmd| cmd.verb == CommandVerb::Create)
    }

    pub fn failing_everything() -> Self {
        Self::failing_when(|_| true)
    }

    /// Issued commands joined the way they would appear on a command line.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: &ServiceCommand) -> Result<Vec<String>, ExecutionError> {
        self.calls.borrow_mut().push(command.clone());
        if (self.fail_when)(command) {
            return Err(ExecutionError::Exit {
                command: command.to_string(),
                code: Some(1),
                stderr: "FAILED".to_string(),
            });
        }
        Ok(vec!["OK".to_string()])
    }
}
