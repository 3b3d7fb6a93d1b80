use tracing::{error, info, warn};

use crate::domain::HostSession;

/// Host session of a running Lua script. Diagnostics go to `tracing`,
/// tagged with the script name.
#[derive(Debug, Clone)]
pub struct ScriptSession {
    script: String,
}

impl ScriptSession {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl HostSession for ScriptSession {
    fn info(&self, message: &str) {
        info!(script = %self.script, "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(script = %self.script, "{message}");
    }

    fn error(&self, message: &str) {
        error!(script = %self.script, "{message}");
    }
}
