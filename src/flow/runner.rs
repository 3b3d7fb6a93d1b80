use tracing::debug;

use super::engine::HostBuildEngine;
use crate::domain::{HostSession, Task, TaskError, GENERIC_FAILURE_MESSAGE};

/// Runs `task` once against a fresh engine bound to `session`.
///
/// A task that returns `false` fails with the error text it reported. A task
/// that asked for an unsupported engine capability and reported no error
/// text fails with [`TaskError::UnsupportedCapability`], even if it returned
/// `true`. Any other failure uses [`GENERIC_FAILURE_MESSAGE`].
pub fn run_task(session: &dyn HostSession, task: &mut dyn Task) -> Result<(), TaskError> {
    let span = tracing::debug_span!("task", name = task.name());
    let _enter = span.enter();

    let mut engine = HostBuildEngine::new(session);
    let succeeded = task.execute(&mut engine);
    let (error_text, unsupported) = engine.into_parts();

    let outcome = match (succeeded, unsupported) {
        (false, _) if !error_text.is_empty() => Err(TaskError::ExecutionFailed(error_text)),
        (_, Some(err)) => Err(err.into()),
        (true, None) => Ok(()),
        (false, None) => Err(TaskError::ExecutionFailed(
            GENERIC_FAILURE_MESSAGE.to_string(),
        )),
    };

    debug!(succeeded = outcome.is_ok(), "task finished");
    outcome
}
