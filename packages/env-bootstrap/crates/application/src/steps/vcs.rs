use bootstrap_manifest::VcsConfig;
use domain::{
    ArtifactState, BootstrapContext, BootstrapError, CommandRunner, StepKind, StepOutcome,
};

use super::run_checked;
use crate::step::Step;

/// Initialises the submodule on first run, updates it afterwards.
pub struct VcsSync<'a> {
    pub config: &'a VcsConfig,
}

impl Step for VcsSync<'_> {
    fn kind(&self) -> StepKind {
        StepKind::VcsSync
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let marker = ctx.path(&self.config.marker());
        let initialised = ArtifactState::probe(&marker).is_present();

        let mut spec = ctx.command("git").args(["submodule", "update"]);
        if !initialised {
            spec = spec.arg("--init");
        }
        spec = spec.arg("--recursive");
        run_checked(runner, &spec)?;

        let submodule = self.config.submodule.display();
        Ok(StepOutcome::Completed(if initialised {
            format!("Updated {}", submodule)
        } else {
            format!("Initialised {}", submodule)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{activated_context, FakeRunner};
    use domain::CommandOutput;

    #[test]
    fn initialises_when_marker_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = VcsConfig {
            enabled: true,
            ..VcsConfig::default()
        };
        let mut ctx = activated_context(dir.path());
        let runner = FakeRunner::new();

        VcsSync { config: &config }.run(&mut ctx, &runner).unwrap();
        assert_eq!(
            runner.commands(),
            vec!["git submodule update --init --recursive".to_string()]
        );
    }

    #[test]
    fn updates_when_marker_present() {
        let dir = tempfile::tempdir().unwrap();
        let config = VcsConfig {
            enabled: true,
            ..VcsConfig::default()
        };
        std::fs::create_dir_all(dir.path().join(&config.submodule)).unwrap();
        std::fs::write(dir.path().join(config.marker()), "gitdir: ../../.git/modules/x\n").unwrap();
        let mut ctx = activated_context(dir.path());
        let runner = FakeRunner::new();

        let outcome = VcsSync { config: &config }.run(&mut ctx, &runner).unwrap();
        assert_eq!(
            runner.commands(),
            vec!["git submodule update --recursive".to_string()]
        );
        assert!(outcome.detail().starts_with("Updated"));
    }

    #[test]
    fn git_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = VcsConfig::default();
        let mut ctx = activated_context(dir.path());
        let runner = FakeRunner::new().fail_when(
            "git submodule",
            CommandOutput::failure(128, "fatal: not a git repository"),
        );

        let err = VcsSync { config: &config }.run(&mut ctx, &runner).unwrap_err();
        assert!(err.to_string().contains("exit 128"));
    }
}
