pub mod inspect;
pub mod sequencer;
pub mod step;
pub mod steps;

#[cfg(test)]
pub(crate) mod testing;

pub use inspect::{inspect, ArtifactStatus, WorkspaceStatus};
pub use sequencer::{BootstrapReport, Mode, Sequencer, StepObserver, SETUP_ARG};
pub use step::Step;
