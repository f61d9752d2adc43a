use bootstrap_manifest::HandoffConfig;
use domain::{BootstrapContext, BootstrapError, CommandRunner, StepKind, StepOutcome};

use super::{python, run_checked};
use crate::step::Step;

/// Runs the downstream application from its own directory with the
/// forwarded arguments; the working directory is restored afterwards.
pub struct Handoff<'a> {
    pub config: &'a HandoffConfig,
    /// Already defaulted: never empty unless `default_args` is.
    pub args: Vec<String>,
}

impl<'a> Handoff<'a> {
    pub fn new(config: &'a HandoffConfig, forwarded: &[String]) -> Self {
        Self {
            config,
            args: effective_args(config, forwarded),
        }
    }
}

/// Forwarded arguments verbatim, or the configured defaults when there are none.
pub fn effective_args(config: &HandoffConfig, forwarded: &[String]) -> Vec<String> {
    if forwarded.is_empty() {
        config.default_args.clone()
    } else {
        forwarded.to_vec()
    }
}

impl Step for Handoff<'_> {
    fn kind(&self) -> StepKind {
        StepKind::Handoff
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let python = python(ctx)
            .ok_or_else(|| BootstrapError::missing("environment interpreter", ctx.root()))?;

        let scoped = ctx.enter(&self.config.dir);
        let spec = scoped
            .command(python.into_os_string())
            .args(["-m", self.config.module.as_str()])
            .args(self.args.iter().map(String::as_str))
            .inherit_stdio();

        tracing::info!(module = %self.config.module, args = ?self.args, cwd = %scoped.cwd().display(), "handing off");
        run_checked(runner, &spec)?;

        Ok(StepOutcome::Completed(format!(
            "{} exited successfully",
            self.config.module
        )))
    }
}
