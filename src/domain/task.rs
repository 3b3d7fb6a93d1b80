use std::fmt;

use super::error::TaskError;

/// Status of a task object across its invocations.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Never run
    #[default]
    NotStarted,
    /// Inside `execute`
    Running,
    /// Last run succeeded
    Succeeded,
    /// Last run failed with the given message
    Failed(String),
}

impl TaskStatus {
    pub fn from_outcome(outcome: &Result<(), TaskError>) -> Self {
        match outcome {
            Ok(()) => TaskStatus::Succeeded,
            Err(err) => TaskStatus::Failed(err.to_string()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::Running => "running",
            TaskStatus::Succeeded => "succeeded",
            TaskStatus::Failed(_) => "failed",
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            TaskStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
