use std::collections::HashMap;

use crate::domain::{
    BuildEngine, BuildErrorEvent, BuildMessageEvent, BuildWarningEvent, CustomBuildEvent,
    EngineError, HostSession, ERROR_LINE_TERMINATOR,
};

/// Build engine handed to a task for one invocation.
///
/// Events go straight to the host session. Error messages are also collected
/// so the runner can use them as the failure message.
pub struct HostBuildEngine<'s> {
    session: &'s dyn HostSession,
    error_text: String,
    unsupported: Option<EngineError>,
    continue_on_error: bool,
    line_number_of_task_node: u32,
    column_number_of_task_node: u32,
    project_file_of_task_node: Option<String>,
}

impl<'s> HostBuildEngine<'s> {
    pub fn new(session: &'s dyn HostSession) -> Self {
        Self {
            session,
            error_text: String::new(),
            unsupported: None,
            continue_on_error: false,
            line_number_of_task_node: 0,
            column_number_of_task_node: 0,
            project_file_of_task_node: None,
        }
    }

    /// Every error reported so far, each followed by `\r\n`.
    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    /// First unsupported capability the task asked for, if any.
    pub fn unsupported_call(&self) -> Option<&EngineError> {
        self.unsupported.as_ref()
    }

    pub(crate) fn into_parts(self) -> (String, Option<EngineError>) {
        (self.error_text, self.unsupported)
    }
}

impl BuildEngine for HostBuildEngine<'_> {
    fn log_custom_event(&mut self, event: &CustomBuildEvent) {
        self.session.info(&event.message);
    }

    fn log_error_event(&mut self, event: &BuildErrorEvent) {
        self.error_text.push_str(&event.message);
        self.error_text.push_str(ERROR_LINE_TERMINATOR);
        self.session.error(&event.message);
    }

    fn log_message_event(&mut self, event: &BuildMessageEvent) {
        self.session.info(&event.message);
    }

    fn log_warning_event(&mut self, event: &BuildWarningEvent) {
        self.session.warn(&event.message);
    }

    fn build_project_file(
        &mut self,
        _project_file_name: &str,
        _target_names: &[String],
        _global_properties: &HashMap<String, String>,
        _target_outputs: &mut HashMap<String, Vec<String>>,
    ) -> Result<bool, EngineError> {
        let err = EngineError::Unsupported {
            capability: "build_project_file",
        };
        self.unsupported.get_or_insert_with(|| err.clone());
        Err(err)
    }

    fn continue_on_error(&self) -> bool {
        self.continue_on_error
    }

    fn line_number_of_task_node(&self) -> u32 {
        self.line_number_of_task_node
    }

    fn column_number_of_task_node(&self) -> u32 {
        self.column_number_of_task_node
    }

    fn project_file_of_task_node(&self) -> Option<&str> {
        self.project_file_of_task_node.as_deref()
    }
}
