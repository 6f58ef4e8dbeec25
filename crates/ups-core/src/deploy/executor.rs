//! Executors that run service commands.

use std::cell::RefCell;
use std::process::Command;

use crate::deploy::command::ServiceCommand;
use crate::error::ExecutionError;

/// Runs a single service command and returns its output lines.
pub trait CommandExecutor {
    fn execute(&self, command: &ServiceCommand) -> Result<Vec<String>, ExecutionError>;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn execute(&self, command: &ServiceCommand) -> Result<Vec<String>, ExecutionError> {
        (**self).execute(command)
    }
}

/// Invokes the `cf` CLI as a child process.
#[derive(Debug, Clone)]
pub struct CfCliExecutor {
    program: String,
}

impl CfCliExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CfCliExecutor {
    fn default() -> Self {
        Self::new("cf")
    }
}

impl CommandExecutor for CfCliExecutor {
    fn execute(&self, command: &ServiceCommand) -> Result<Vec<String>, ExecutionError> {
        let output = Command::new(&self.program)
            .args(command.args())
            .output()
            .map_err(|source| ExecutionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExecutionError::Exit {
                command: format!("{} {}", self.program, command),
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();
        for line in &lines {
            tracing::debug!(target: "ups::cf", "{}", line);
        }
        Ok(lines)
    }
}

/// Logs commands instead of running them. Every command succeeds.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    issued: RefCell<Vec<ServiceCommand>>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands seen so far, in order.
    pub fn issued(&self) -> Vec<ServiceCommand> {
        self.issued.borrow().clone()
    }
}

impl CommandExecutor for DryRunExecutor {
    fn execute(&self, command: &ServiceCommand) -> Result<Vec<String>, ExecutionError> {
        tracing::info!("[dry-run] cf {}", command);
        self.issued.borrow_mut().push(command.clone());
        Ok(Vec::new())
    }
}
