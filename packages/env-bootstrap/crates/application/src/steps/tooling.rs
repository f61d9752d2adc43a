use bootstrap_manifest::ToolingConfig;
use domain::{
    ArtifactState, BootstrapContext, BootstrapError, CommandRunner, StepKind, StepOutcome,
};

use super::{python, run_checked};
use crate::step::Step;

/// Installs and registers the git hook manager when its config file exists.
pub struct ToolingSetup<'a> {
    pub config: &'a ToolingConfig,
}

impl Step for ToolingSetup<'_> {
    fn kind(&self) -> StepKind {
        StepKind::ToolingSetup
    }

    fn is_relevant(&self, ctx: &BootstrapContext) -> bool {
        ArtifactState::probe(&ctx.path(&self.config.config)).is_present()
    }

    fn skip_reason(&self) -> String {
        format!("No {}", self.config.config.display())
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let python = python(ctx)
            .ok_or_else(|| BootstrapError::missing("environment interpreter", ctx.root()))?;

        let install = ctx
            .command(python.into_os_string())
            .args(["-m", "pip", "install"])
            .arg(self.config.package.as_str());
        run_checked(runner, &install)?;

        let tool = ctx
            .environment()
            .map(|env| env.executable(&self.config.package).into_os_string())
            .unwrap_or_else(|| self.config.package.clone().into());
        let register = ctx.command(tool).arg("install");
        run_checked(runner, &register)?;

        Ok(StepOutcome::Completed(format!(
            "Installed {} hooks",
            self.config.package
        )))
    }
}
