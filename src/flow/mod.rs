mod engine;
mod lua_bindings;
mod runner;
mod session;
pub mod tasks;

pub use engine::HostBuildEngine;
pub use lua_bindings::{register_module, ScriptTask};
pub use runner::run_task;
pub use session::ScriptSession;

use anyhow::{Context, Result};
use mlua::{Function as LuaFunction, Lua, Table as LuaTable};
use std::fs;
use std::path::Path;

use crate::config::Config;

/// Represents the state of a workflow execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    /// Workflow is ready to be executed
    Ready,
    /// Workflow is currently running
    Running,
    /// Workflow has completed successfully
    Completed,
    /// Workflow has failed
    Failed(String),
}

/// A Lua script whose `main` function drives tasks
pub struct Workflow {
    /// Chunk name used in Lua error messages
    name: String,
    source: String,
    lua: Lua,
    state: WorkflowState,
}

impl Workflow {
    /// Load a workflow from a Lua file
    pub fn new(file_path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let file_path = file_path.as_ref();

        if !file_path.exists() {
            return Err(anyhow::anyhow!(
                "Workflow file not found: {}",
                file_path.display()
            ));
        }

        let source = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read workflow file: {}", file_path.display()))?;

        Self::from_source(file_path.display().to_string(), source, config)
    }

    /// Build a workflow from Lua source already in memory
    pub fn from_source(name: impl Into<String>, source: impl Into<String>, config: &Config) -> Result<Self> {
        let name = name.into();
        let source = source.into();

        if source.trim().is_empty() {
            return Err(anyhow::anyhow!("Workflow file is empty"));
        }

        let lua = Lua::new();
        let session = ScriptSession::new(name.clone());
        register_module(&lua, &session, &config.exec)?;

        Ok(Self {
            name,
            source,
            lua,
            state: WorkflowState::Ready,
        })
    }

    /// Get the current state of the workflow
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Execute the workflow's `main(args)`
    pub fn execute(&mut self, args: Vec<String>) -> Result<bool> {
        self.state = WorkflowState::Running;

        let evaluated = self
            .lua
            .load(&self.source)
            .set_name(format!("@{}", self.name))
            .eval::<LuaTable>();

        let workflow_table = match evaluated {
            Ok(table) => table,
            Err(err) => {
                self.state = WorkflowState::Failed(err.to_string());
                return Err(err).context("Failed to evaluate Lua workflow file");
            }
        };

        let main_fn = match workflow_table.get::<LuaFunction>("main") {
            Ok(main_fn) => main_fn,
            Err(err) => {
                self.state = WorkflowState::Failed(err.to_string());
                return Err(err).context("Workflow must have a 'main' function");
            }
        };

        match main_fn.call::<bool>(args) {
            Ok(success) => {
                if success {
                    self.state = WorkflowState::Completed;
                } else {
                    self.state = WorkflowState::Failed("Workflow returned false".to_string());
                }
                Ok(success)
            }
            Err(err) => {
                let error_msg = format!("Error executing workflow: {}", err);
                self.state = WorkflowState::Failed(error_msg.clone());
                Err(anyhow::anyhow!(error_msg))
            }
        }
    }
}
