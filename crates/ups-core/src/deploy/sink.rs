//! Error sinks receiving per-service deploy failures.

use crate::error::DeployError;

/// Receives failures the engine recovers from.
pub trait ErrorSink {
    fn report(&mut self, message: &str, error: DeployError);
}

impl<F> ErrorSink for F
where
    F: FnMut(&str, DeployError),
{
    fn report(&mut self, message: &str, error: DeployError) {
        self(message, error)
    }
}

/// Sink that keeps every reported failure.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<(String, DeployError)>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[(String, DeployError)] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<(String, DeployError)> {
        self.errors
    }
}

impl ErrorSink for ErrorCollector {
    fn report(&mut self, message: &str, error: DeployError) {
        self.errors.push((message.to_string(), error));
    }
}
