//! Facade over the bootstrap layers.

pub use application;
pub use domain;
pub use infrastructure;

pub use application::{inspect, BootstrapReport, Mode, Sequencer, StepObserver, WorkspaceStatus};
pub use domain::{BootstrapError, ErrorKind, SequenceError, StepKind, StepOutcome};
pub use infrastructure::{PathLocator, SystemRunner};
