use std::path::PathBuf;

use crate::domain::{BuildEngine, BuildErrorEvent, BuildMessageEvent, BuildWarningEvent};
use crate::infrastructure::SystemCommandExecutor;

/// Runs a command line through the configured shell.
#[derive(Clone, Debug)]
pub struct ExecTask {
    pub command: String,
    pub working_dir: Option<PathBuf>,
    pub ignore_exit_code: bool,
    pub exit_code: Option<i32>,
    executor: SystemCommandExecutor,
}

impl_task!(ExecTask, "exec");

impl ExecTask {
    pub fn new(executor: SystemCommandExecutor, command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_dir: None,
            ignore_exit_code: false,
            exit_code: None,
            executor,
        }
    }

    pub fn working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn ignore_exit_code(mut self, ignore: bool) -> Self {
        self.ignore_exit_code = ignore;
        self
    }

    fn execute_impl(&mut self, engine: &mut dyn BuildEngine) -> bool {
        self.exit_code = None;

        let output = match self
            .executor
            .execute(&self.command, self.working_dir.as_deref())
        {
            Ok(output) => output,
            Err(err) => {
                engine.log_error_event(&BuildErrorEvent::new(err).with_sender("exec"));
                return false;
            }
        };

        for line in output.stdout.lines().chain(output.stderr.lines()) {
            engine.log_message_event(&BuildMessageEvent::new(line).with_sender("exec"));
        }

        self.exit_code = Some(output.exit_code);
        if output.exit_code == 0 {
            return true;
        }

        let message = format!(
            "The command \"{}\" exited with code {}.",
            self.command, output.exit_code
        );
        if self.ignore_exit_code {
            engine.log_warning_event(&BuildWarningEvent::new(message).with_sender("exec"));
            true
        } else {
            engine.log_error_event(&BuildErrorEvent::new(message).with_sender("exec"));
            false
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::ExecSettings;
    use crate::domain::Task;
    use crate::flow::tasks::testing::CapturingEngine;

    #[test]
    fn output_lines_become_messages() {
        let mut task = ExecTask::new(SystemCommandExecutor::default(), "echo one; echo two 1>&2");
        let mut engine = CapturingEngine::default();

        assert!(task.execute(&mut engine));
        let lines: Vec<_> = engine.messages.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(lines, vec!["one", "two"]);
        assert_eq!(task.exit_code, Some(0));
    }

    #[test]
    fn non_zero_exit_fails_with_error() {
        let mut task = ExecTask::new(SystemCommandExecutor::default(), "exit 4");
        let mut engine = CapturingEngine::default();

        assert!(!task.execute(&mut engine));
        assert_eq!(
            engine.errors[0].message,
            "The command \"exit 4\" exited with code 4."
        );
        assert_eq!(task.exit_code, Some(4));
    }

    #[test]
    fn ignored_exit_code_downgrades_to_warning() {
        let mut task =
            ExecTask::new(SystemCommandExecutor::default(), "exit 2").ignore_exit_code(true);
        let mut engine = CapturingEngine::default();

        assert!(task.execute(&mut engine));
        assert!(engine.errors.is_empty());
        assert_eq!(engine.warnings.len(), 1);
    }

    #[test]
    fn runs_in_working_dir() {
        let temp = tempfile::tempdir().unwrap();
        let mut task = ExecTask::new(SystemCommandExecutor::default(), "touch marker")
            .working_dir(Some(temp.path().to_path_buf()));
        let mut engine = CapturingEngine::default();

        assert!(task.execute(&mut engine));
        assert!(temp.path().join("marker").exists());
    }

    #[test]
    fn missing_shell_fails_without_exit_code() {
        let executor = SystemCommandExecutor::new(ExecSettings {
            shell: "no-such-shell-for-tests".to_string(),
            shell_args: vec!["-c".to_string()],
        });
        let mut task = ExecTask::new(executor, "true");
        let mut engine = CapturingEngine::default();

        assert!(!task.execute(&mut engine));
        assert_eq!(task.exit_code, None);
        assert_eq!(engine.errors.len(), 1);
    }
}
