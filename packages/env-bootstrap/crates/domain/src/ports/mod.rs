pub mod locator;
pub mod process;

pub use locator::InterpreterLocator;
pub use process::{CommandOutput, CommandRunner, CommandSpec, ProcessError, Stdio};
