use thiserror::Error;

/// Failure message used when a task fails without reporting any error.
pub const GENERIC_FAILURE_MESSAGE: &str = "Task execution failed.";

/// Appended to every reported error message in the accumulated error text.
pub const ERROR_LINE_TERMINATOR: &str = "\r\n";

/// Failure of one task invocation as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The task returned `false`. Carries the accumulated error text, or the
    /// generic failure message when nothing was reported.
    #[error("{0}")]
    ExecutionFailed(String),

    /// The task called back into an engine capability the host does not offer.
    #[error("'{capability}' is not supported by this build engine")]
    UnsupportedCapability { capability: &'static str },
}

/// Error returned to a task from an engine callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("'{capability}' is not supported by this build engine")]
    Unsupported { capability: &'static str },
}

impl From<EngineError> for TaskError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Unsupported { capability } => {
                TaskError::UnsupportedCapability { capability }
            }
        }
    }
}
