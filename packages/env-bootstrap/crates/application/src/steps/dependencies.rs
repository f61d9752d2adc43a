use bootstrap_manifest::DependenciesConfig;
use domain::{
    ArtifactState, BootstrapContext, BootstrapError, CommandRunner, StepKind, StepOutcome,
};

use super::{python, run_checked};
use crate::step::Step;

/// Upgrades pip and installs every declared dependency into the environment.
pub struct DependencyInstallation<'a> {
    pub config: &'a DependenciesConfig,
}

impl Step for DependencyInstallation<'_> {
    fn kind(&self) -> StepKind {
        StepKind::DependencyInstallation
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let manifest = ctx.path(&self.config.manifest);
        if !ArtifactState::probe(&manifest).is_present() {
            return Err(BootstrapError::missing("dependency manifest", manifest));
        }

        let python = python(ctx)
            .ok_or_else(|| BootstrapError::missing("environment interpreter", ctx.root()))?;

        if self.config.upgrade_installer {
            let upgrade = ctx
                .command(python.clone().into_os_string())
                .args(["-m", "pip", "install", "--upgrade", "pip"]);
            run_checked(runner, &upgrade)?;
        }

        let mut installed = vec![self.config.manifest.clone()];
        if let Some(dev) = &self.config.dev_manifest {
            if ArtifactState::probe(&ctx.path(dev)).is_present() {
                installed.push(dev.clone());
            }
        }

        let mut install = ctx
            .command(python.into_os_string())
            .args(["-m", "pip", "install"]);
        for manifest in &installed {
            install = install.arg("-r").arg(manifest.clone().into_os_string());
        }
        run_checked(runner, &install)?;

        let names: Vec<String> = installed.iter().map(|p| p.display().to_string()).collect();
        tracing::info!(manifests = ?names, "dependencies installed");
        Ok(StepOutcome::Completed(format!(
            "Installed from {}",
            names.join(", ")
        )))
    }
}
