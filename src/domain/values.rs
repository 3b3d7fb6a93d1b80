use std::str::FromStr;

/// Priority of a message event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageImportance {
    High,
    #[default]
    Normal,
    Low,
}

impl FromStr for MessageImportance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(MessageImportance::High),
            "normal" => Ok(MessageImportance::Normal),
            "low" => Ok(MessageImportance::Low),
            other => Err(format!(
                "unknown message importance '{other}' (expected high, normal or low)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMessageEvent {
    pub message: String,
    pub importance: MessageImportance,
    pub sender: Option<String>,
}

impl BuildMessageEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            importance: MessageImportance::Normal,
            sender: None,
        }
    }

    pub fn with_importance(mut self, importance: MessageImportance) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildWarningEvent {
    pub message: String,
    pub code: Option<String>,
    pub sender: Option<String>,
}

impl BuildWarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            sender: None,
        }
    }

    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildErrorEvent {
    pub message: String,
    pub code: Option<String>,
    pub sender: Option<String>,
}

impl BuildErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            sender: None,
        }
    }

    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBuildEvent {
    pub message: String,
    pub sender: Option<String>,
}

impl CustomBuildEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sender: None,
        }
    }
}
