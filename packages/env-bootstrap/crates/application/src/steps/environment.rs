use bootstrap_manifest::EnvironmentConfig;
use domain::{
    ActiveEnvironment, ArtifactState, BootstrapContext, BootstrapError, CommandRunner, StepKind,
    StepOutcome,
};

use super::run_checked;
use crate::step::Step;

/// Creates the isolated environment if absent, then activates it.
pub struct EnvironmentProvisioning<'a> {
    pub config: &'a EnvironmentConfig,
}

impl Step for EnvironmentProvisioning<'_> {
    fn kind(&self) -> StepKind {
        StepKind::EnvironmentProvisioning
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let dir = ctx.path(&self.config.dir);
        let label = self.config.dir.display().to_string();

        let outcome = match ArtifactState::probe(&dir) {
            ArtifactState::Present => {
                tracing::info!(env = %dir.display(), "reusing environment");
                StepOutcome::Skipped(format!("Reusing {}", label))
            }
            ArtifactState::Absent => {
                let interpreter = ctx
                    .interpreter()
                    .map(|i| i.location.clone())
                    .ok_or_else(|| {
                        BootstrapError::missing("interpreter to create the environment", &dir)
                    })?;

                let spec = ctx
                    .command(interpreter.into_os_string())
                    .args(["-m", "venv"])
                    .arg(dir.clone().into_os_string());
                run_checked(runner, &spec)?;

                tracing::info!(env = %dir.display(), "created environment");
                StepOutcome::Completed(format!("Created {}", label))
            }
        };

        ctx.activate(ActiveEnvironment::at(&dir));
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ready_context, FakeRunner};
    use domain::CommandOutput;

    #[test]
    fn creates_then_activates() {
        let dir = tempfile::tempdir().unwrap();
        let config = EnvironmentConfig::default();
        let mut ctx = ready_context(dir.path());
        let runner = FakeRunner::new();

        let outcome = EnvironmentProvisioning { config: &config }
            .run(&mut ctx, &runner)
            .unwrap();

        assert!(matches!(outcome, StepOutcome::Completed(_)));
        assert!(dir.path().join(".venv").exists());
        assert_eq!(runner.count_matching("-m venv"), 1);
        assert_eq!(ctx.environment().unwrap().root, dir.path().join(".venv"));
    }

    #[test]
    fn existing_environment_is_never_recreated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".venv")).unwrap();
        let config = EnvironmentConfig::default();
        let mut ctx = ready_context(dir.path());
        // Creation would fail on an existing path; it must not be attempted.
        let runner = FakeRunner::new().fail_when("-m venv", CommandOutput::failure(1, "exists"));

        let outcome = EnvironmentProvisioning { config: &config }
            .run(&mut ctx, &runner)
            .unwrap();

        assert!(matches!(outcome, StepOutcome::Skipped(_)));
        assert!(runner.commands().is_empty());
        assert!(ctx.environment().is_some());
    }

    #[test]
    fn venv_failure_surfaces_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let config = EnvironmentConfig::default();
        let mut ctx = ready_context(dir.path());
        let runner = FakeRunner::new().fail_when(
            "-m venv",
            CommandOutput::failure(1, "Error: ensurepip is not available"),
        );

        let err = EnvironmentProvisioning { config: &config }
            .run(&mut ctx, &runner)
            .unwrap_err();

        assert!(err.to_string().contains("ensurepip is not available"));
        assert!(ctx.environment().is_none());
    }
}
