use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "taskhost.toml";

#[cfg(windows)]
pub const DEFAULT_CONFIG: &str = "[exec]\nshell = \"cmd\"\nshell_args = [\"/C\"]\n\n[log]\nfilter = \"info\"\n";
#[cfg(not(windows))]
pub const DEFAULT_CONFIG: &str = "[exec]\nshell = \"sh\"\nshell_args = [\"-c\"]\n\n[log]\nfilter = \"info\"\n";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub exec: ExecSettings,
    pub log: LogSettings,
}

/// Shell used by the `exec` task.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExecSettings {
    pub shell: String,
    pub shell_args: Vec<String>,
}

impl Default for ExecSettings {
    fn default() -> Self {
        if cfg!(windows) {
            Self {
                shell: "cmd".to_string(),
                shell_args: vec!["/C".to_string()],
            }
        } else {
            Self {
                shell: "sh".to_string(),
                shell_args: vec!["-c".to_string()],
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads the config file, or returns the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
