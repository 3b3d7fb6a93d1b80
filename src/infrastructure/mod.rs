pub mod system_command_executor;

pub use system_command_executor::{CommandOutput, SystemCommandExecutor};
