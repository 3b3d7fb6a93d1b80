use std::collections::HashMap;

use super::error::EngineError;
use super::values::{BuildErrorEvent, BuildMessageEvent, BuildWarningEvent, CustomBuildEvent};

/// Diagnostics channel of the scripting host.
pub trait HostSession {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Callback surface a task reports through while it runs.
///
/// The shape is fixed by the task contract; the host supplies exactly one
/// implementation per task invocation.
pub trait BuildEngine {
    /// Raises a custom event to the host.
    fn log_custom_event(&mut self, event: &CustomBuildEvent);

    /// Raises an error event to the host.
    fn log_error_event(&mut self, event: &BuildErrorEvent);

    /// Raises a message event to the host.
    fn log_message_event(&mut self, event: &BuildMessageEvent);

    /// Raises a warning event to the host.
    fn log_warning_event(&mut self, event: &BuildWarningEvent);

    /// Builds the given targets of another project file and collects their outputs.
    fn build_project_file(
        &mut self,
        project_file_name: &str,
        target_names: &[String],
        global_properties: &HashMap<String, String>,
        target_outputs: &mut HashMap<String, Vec<String>>,
    ) -> Result<bool, EngineError>;

    /// Whether the calling task node asked to continue after errors.
    fn continue_on_error(&self) -> bool;

    /// Line of the task node within the calling project file.
    fn line_number_of_task_node(&self) -> u32;

    /// Column of the task node within the calling project file.
    fn column_number_of_task_node(&self) -> u32;

    /// Full path of the project file that contained the task node.
    fn project_file_of_task_node(&self) -> Option<&str>;
}

/// One unit of build work.
///
/// The engine is lent for the duration of `execute` only.
pub trait Task {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Runs the task, reporting through `engine`. Returns `false` on failure.
    fn execute(&mut self, engine: &mut dyn BuildEngine) -> bool;
}
