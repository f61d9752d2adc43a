pub mod artifact;
pub mod environment;
pub mod interpreter;
pub mod step;

pub use artifact::ArtifactState;
pub use environment::ActiveEnvironment;
pub use interpreter::{parse_interpreter_version, Interpreter};
pub use step::{StepKind, StepOutcome};
