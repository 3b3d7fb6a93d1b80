use std::fs;
use std::path::PathBuf;

use crate::domain::{BuildEngine, BuildErrorEvent, BuildMessageEvent, MessageImportance};

/// Creates directories, parents included. Fails if any could not be created.
#[derive(Clone, Debug)]
pub struct MakeDirTask {
    pub directories: Vec<PathBuf>,
}

impl_task!(MakeDirTask, "make_dir");

impl MakeDirTask {
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }

    fn execute_impl(&mut self, engine: &mut dyn BuildEngine) -> bool {
        let mut success = true;

        for dir in &self.directories {
            if dir.is_dir() {
                continue;
            }

            match fs::create_dir_all(dir) {
                Ok(()) => engine.log_message_event(
                    &BuildMessageEvent::new(format!("Creating directory \"{}\".", dir.display()))
                        .with_importance(MessageImportance::Normal)
                        .with_sender("make_dir"),
                ),
                Err(err) => {
                    success = false;
                    engine.log_error_event(
                        &BuildErrorEvent::new(format!(
                            "Unable to create directory \"{}\". {err}",
                            dir.display()
                        ))
                        .with_sender("make_dir"),
                    );
                }
            }
        }

        success
    }
}
