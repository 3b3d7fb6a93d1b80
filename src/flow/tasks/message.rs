use crate::domain::{BuildEngine, BuildMessageEvent, MessageImportance};

/// Logs a message. Always succeeds.
#[derive(Clone, Debug)]
pub struct MessageTask {
    pub text: String,
    pub importance: MessageImportance,
}

impl_task!(MessageTask, "message");

impl MessageTask {
    pub fn new(text: impl Into<String>, importance: MessageImportance) -> Self {
        Self {
            text: text.into(),
            importance,
        }
    }

    fn execute_impl(&mut self, engine: &mut dyn BuildEngine) -> bool {
        engine.log_message_event(
            &BuildMessageEvent::new(self.text.clone())
                .with_importance(self.importance)
                .with_sender("message"),
        );
        true
    }
}
