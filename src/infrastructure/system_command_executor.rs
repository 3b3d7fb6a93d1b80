use std::path::Path;
use std::process::{Command, Stdio};

use which::which;

use crate::config::ExecSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Runs command lines through the configured shell.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandExecutor {
    settings: ExecSettings,
}

impl SystemCommandExecutor {
    pub fn new(settings: ExecSettings) -> Self {
        Self { settings }
    }

    fn prepare_command(&self, command_line: &str, working_dir: Option<&Path>) -> Result<Command, String> {
        let shell = which(&self.settings.shell)
            .map_err(|err| format!("Shell '{}' not found: {err}", self.settings.shell))?;

        let mut command = Command::new(shell);
        command.args(&self.settings.shell_args).arg(command_line);

        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        Ok(command)
    }

    pub fn execute(&self, command_line: &str, working_dir: Option<&Path>) -> Result<CommandOutput, String> {
        let mut command = self.prepare_command(command_line, working_dir)?;

        let output = command
            .output()
            .map_err(|err| format!("Failed to spawn command '{command_line}': {err}"))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
