use crate::domain::{BuildEngine, BuildErrorEvent, BuildWarningEvent};

/// Logs a warning. Always succeeds.
#[derive(Clone, Debug)]
pub struct WarningTask {
    pub text: String,
    pub code: Option<String>,
}

impl_task!(WarningTask, "warning");

impl WarningTask {
    pub fn new(text: impl Into<String>, code: Option<String>) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }

    fn execute_impl(&mut self, engine: &mut dyn BuildEngine) -> bool {
        engine.log_warning_event(
            &BuildWarningEvent::new(self.text.clone())
                .with_code(self.code.clone())
                .with_sender("warning"),
        );
        true
    }
}

/// Logs an error and fails.
#[derive(Clone, Debug)]
pub struct ErrorTask {
    pub text: String,
    pub code: Option<String>,
}

impl_task!(ErrorTask, "error");

impl ErrorTask {
    pub fn new(text: impl Into<String>, code: Option<String>) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }

    fn execute_impl(&mut self, engine: &mut dyn BuildEngine) -> bool {
        engine.log_error_event(
            &BuildErrorEvent::new(self.text.clone())
                .with_code(self.code.clone())
                .with_sender("error"),
        );
        false
    }
}
