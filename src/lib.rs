//! Runs build-engine tasks from Lua scripts.
//!
//! A task reports through a [`BuildEngine`]; [`run_task`] lends it a
//! [`HostBuildEngine`] that forwards every event to the script's
//! [`HostSession`] and turns a failed run into a [`TaskError`].

pub mod config;
pub mod domain;
pub mod flow;
pub mod infrastructure;

pub use config::Config;
pub use domain::{
    BuildEngine, BuildErrorEvent, BuildMessageEvent, BuildWarningEvent, CustomBuildEvent,
    EngineError, HostSession, MessageImportance, Task, TaskError, TaskStatus,
    GENERIC_FAILURE_MESSAGE,
};
pub use flow::{run_task, HostBuildEngine, ScriptSession, ScriptTask, Workflow, WorkflowState};
