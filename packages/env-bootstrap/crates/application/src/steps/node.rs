use bootstrap_manifest::ToolingConfig;
use domain::{
    ArtifactState, BootstrapContext, BootstrapError, CommandRunner, StepKind, StepOutcome,
};

use super::run_checked;
use crate::step::Step;

/// `npm install` for workspaces that ship a `package.json`.
pub struct NodePackages<'a> {
    pub config: &'a ToolingConfig,
}

impl Step for NodePackages<'_> {
    fn kind(&self) -> StepKind {
        StepKind::NodePackages
    }

    fn is_relevant(&self, ctx: &BootstrapContext) -> bool {
        ArtifactState::probe(&ctx.path(&self.config.node_manifest)).is_present()
    }

    fn skip_reason(&self) -> String {
        format!("No {}", self.config.node_manifest.display())
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let spec = ctx.command("npm").arg("install");
        run_checked(runner, &spec)?;
        Ok(StepOutcome::Completed("Installed node packages".to_string()))
    }
}
