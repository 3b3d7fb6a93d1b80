/// Implements [`Task`](crate::domain::Task) for a struct with an
/// `execute_impl(&mut self, &mut dyn BuildEngine) -> bool` method.
macro_rules! impl_task {
    ($type:ty, $name:expr) => {
        impl $crate::domain::Task for $type {
            fn name(&self) -> &str {
                $name
            }

            fn execute(&mut self, engine: &mut dyn $crate::domain::BuildEngine) -> bool {
                self.execute_impl(engine)
            }
        }
    };
}

pub mod diagnostic;
pub mod exec;
pub mod make_dir;
pub mod message;

pub use diagnostic::{ErrorTask, WarningTask};
pub use exec::ExecTask;
pub use make_dir::MakeDirTask;
pub use message::MessageTask;
