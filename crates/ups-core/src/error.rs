//! Error types raised by the deploy engine.

/// Failure reported by a [`CommandExecutor`](crate::deploy::CommandExecutor).
#[derive(thiserror::Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to invoke '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command '{command}' exited with {}: {stderr}", exit_label(.code))]
    Exit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Errors surfaced by the deploy engine.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DeployError {
    /// A requested service is not declared in the space.
    #[error("User provided service '{name}' not found in space '{space}'")]
    NotFound { name: String, space: String },
    #[error("Failed to serialize credentials")]
    Encoding(#[from] serde_json::Error),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

pub type Result<T> = std::result::Result<T, DeployError>;
