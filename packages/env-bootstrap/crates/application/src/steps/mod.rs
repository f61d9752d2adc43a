pub mod config;
pub mod dependencies;
pub mod environment;
pub mod handoff;
pub mod interpreter;
pub mod node;
pub mod tooling;
pub mod vcs;

pub use config::ConfigMaterialization;
pub use dependencies::DependencyInstallation;
pub use environment::EnvironmentProvisioning;
pub use handoff::Handoff;
pub use interpreter::{detect_interpreter, InterpreterCheck};
pub use node::NodePackages;
pub use tooling::ToolingSetup;
pub use vcs::VcsSync;

use domain::{BootstrapContext, BootstrapError, CommandOutput, CommandRunner, CommandSpec};
use std::path::PathBuf;

/// Lines of captured output attached to a failure.
const FAILURE_TAIL: usize = 20;

/// Runs `spec` and turns a non-zero exit into [`BootstrapError::ProcessFailed`].
pub(crate) fn run_checked(
    runner: &dyn CommandRunner,
    spec: &CommandSpec,
) -> Result<CommandOutput, BootstrapError> {
    let output = runner.run(spec)?;
    if output.is_success() {
        Ok(output)
    } else {
        tracing::warn!(command = %spec, code = ?output.code, "command failed");
        Err(BootstrapError::ProcessFailed {
            command: spec.to_string(),
            code: output.code,
            detail: output.tail(FAILURE_TAIL),
        })
    }
}

/// The interpreter commands should use: the active environment's if any,
/// otherwise the one found on PATH.
pub(crate) fn python(ctx: &BootstrapContext) -> Option<PathBuf> {
    ctx.environment()
        .map(|env| env.python.clone())
        .or_else(|| ctx.interpreter().map(|i| i.location.clone()))
}
