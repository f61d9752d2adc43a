pub mod context;
pub mod entities;
pub mod error;
pub mod ports;

pub use context::{BootstrapContext, WorkingDir};
pub use entities::{
    parse_interpreter_version, ActiveEnvironment, ArtifactState, Interpreter, StepKind,
    StepOutcome,
};
pub use error::{BootstrapError, ErrorKind, SequenceError};
pub use ports::{CommandOutput, CommandRunner, CommandSpec, InterpreterLocator, ProcessError, Stdio};
