use serde::{Deserialize, Serialize};
use std::fmt;

/// The setup steps, in the order the sequencer runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    InterpreterCheck,
    EnvironmentProvisioning,
    DependencyInstallation,
    VcsSync,
    ConfigMaterialization,
    ToolingSetup,
    NodePackages,
    Handoff,
}

impl StepKind {
    /// Steps that run external tools with captured output (worth a spinner).
    pub fn is_long_running(self) -> bool {
        matches!(
            self,
            StepKind::EnvironmentProvisioning
                | StepKind::DependencyInstallation
                | StepKind::VcsSync
                | StepKind::ToolingSetup
                | StepKind::NodePackages
        )
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepKind::InterpreterCheck => "interpreter check",
            StepKind::EnvironmentProvisioning => "environment provisioning",
            StepKind::DependencyInstallation => "dependency installation",
            StepKind::VcsSync => "submodule sync",
            StepKind::ConfigMaterialization => "configuration",
            StepKind::ToolingSetup => "tooling setup",
            StepKind::NodePackages => "node packages",
            StepKind::Handoff => "handoff",
        };
        write!(f, "{}", label)
    }
}

/// How a step ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum StepOutcome {
    /// The step performed its action.
    Completed(String),
    /// Precondition already satisfied (or gate absent); nothing was done.
    Skipped(String),
    /// Degraded but continuable; the run goes on.
    Warned(String),
}

impl StepOutcome {
    pub fn detail(&self) -> &str {
        match self {
            StepOutcome::Completed(d) | StepOutcome::Skipped(d) | StepOutcome::Warned(d) => d,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, StepOutcome::Warned(_))
    }
}
