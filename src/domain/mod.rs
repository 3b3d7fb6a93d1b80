pub mod error;
pub mod ports;
pub mod task;
pub mod values;

pub use error::{EngineError, TaskError, ERROR_LINE_TERMINATOR, GENERIC_FAILURE_MESSAGE};
pub use ports::{BuildEngine, HostSession, Task};
pub use task::TaskStatus;
pub use values::{
    BuildErrorEvent, BuildMessageEvent, BuildWarningEvent, CustomBuildEvent, MessageImportance,
};
