use bootstrap_manifest::BootstrapManifest;
use domain::{
    ArtifactState, BootstrapContext, BootstrapError, CommandRunner, InterpreterLocator,
    SequenceError, StepKind, StepOutcome,
};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::step::Step;
use crate::steps::{
    handoff::effective_args, ConfigMaterialization, DependencyInstallation,
    EnvironmentProvisioning, Handoff, InterpreterCheck, NodePackages, ToolingSetup, VcsSync,
};

/// First positional argument that runs provisioning only.
pub const SETUP_ARG: &str = "setup";

/// Which branch of the state machine a run takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Explicit `setup`: provision, then exit without handoff.
    SetupOnly,
    /// No environment yet: provision, then hand off.
    FirstRun,
    /// Environment present: activate and hand off.
    Direct,
}

impl Mode {
    pub fn select(args: &[String], environment: ArtifactState) -> Self {
        if args.first().map(String::as_str) == Some(SETUP_ARG) {
            Mode::SetupOnly
        } else if environment.is_present() {
            Mode::Direct
        } else {
            Mode::FirstRun
        }
    }

    pub fn hands_off(self) -> bool {
        !matches!(self, Mode::SetupOnly)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::SetupOnly => write!(f, "setup only"),
            Mode::FirstRun => write!(f, "first run"),
            Mode::Direct => write!(f, "direct run"),
        }
    }
}

/// Progress callbacks; every method defaults to a no-op.
pub trait StepObserver {
    fn started(&self, _step: StepKind) {}
    fn finished(&self, _step: StepKind, _outcome: &StepOutcome) {}
    fn failed(&self, _step: StepKind, _error: &BootstrapError) {}
}

impl StepObserver for () {}

/// What a successful run did, step by step.
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapReport {
    pub mode: Mode,
    pub steps: Vec<(StepKind, StepOutcome)>,
    /// Arguments the downstream application received, if it ran.
    pub forwarded: Option<Vec<String>>,
}

impl BootstrapReport {
    pub fn outcome(&self, step: StepKind) -> Option<&StepOutcome> {
        self.steps.iter().find(|(k, _)| *k == step).map(|(_, o)| o)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .filter(|(_, o)| o.is_warning())
            .map(|(_, o)| o.detail())
    }
}

/// Runs the bootstrap steps in order and stops at the first failure.
pub struct Sequencer<R, L> {
    manifest: BootstrapManifest,
    runner: R,
    locator: L,
}

impl<R: CommandRunner, L: InterpreterLocator> Sequencer<R, L> {
    pub fn new(manifest: BootstrapManifest, runner: R, locator: L) -> Self {
        Self {
            manifest,
            runner,
            locator,
        }
    }

    pub fn run(&self, root: &Path, args: &[String]) -> Result<BootstrapReport, SequenceError> {
        self.run_with(root, args, &())
    }

    pub fn run_with(
        &self,
        root: &Path,
        args: &[String],
        observer: &dyn StepObserver,
    ) -> Result<BootstrapReport, SequenceError> {
        let mut ctx = BootstrapContext::new(root);
        let environment = ArtifactState::probe(&ctx.path(&self.manifest.environment.dir));
        let mode = Mode::select(args, environment);
        tracing::info!(%mode, root = %root.display(), "bootstrap starting");

        let mut report = BootstrapReport {
            mode,
            steps: Vec::new(),
            forwarded: None,
        };

        for step in self.plan(mode, args) {
            let kind = step.kind();

            if !step.is_relevant(&ctx) {
                let outcome = StepOutcome::Skipped(step.skip_reason());
                tracing::debug!(step = %kind, reason = outcome.detail(), "skipped");
                report.steps.push((kind, outcome));
                continue;
            }

            observer.started(kind);
            match step.run(&mut ctx, &self.runner) {
                Ok(outcome) => {
                    tracing::info!(step = %kind, outcome = ?outcome, "step finished");
                    observer.finished(kind, &outcome);
                    report.steps.push((kind, outcome));
                }
                Err(error) => {
                    tracing::error!(step = %kind, %error, "step failed");
                    observer.failed(kind, &error);
                    return Err(SequenceError::new(kind, error));
                }
            }
        }

        if mode.hands_off() {
            report.forwarded = Some(effective_args(&self.manifest.handoff, args));
        }

        Ok(report)
    }

    fn plan<'a>(&'a self, mode: Mode, args: &[String]) -> Vec<Box<dyn Step + 'a>> {
        let m = &self.manifest;
        let mut steps: Vec<Box<dyn Step + 'a>> = Vec::new();

        match mode {
            Mode::SetupOnly | Mode::FirstRun => {
                steps.push(Box::new(InterpreterCheck {
                    config: &m.interpreter,
                    locator: &self.locator,
                }));
                steps.push(Box::new(EnvironmentProvisioning {
                    config: &m.environment,
                }));
                steps.push(Box::new(DependencyInstallation {
                    config: &m.dependencies,
                }));
                if m.vcs.enabled {
                    steps.push(Box::new(VcsSync { config: &m.vcs }));
                }
                steps.push(Box::new(ConfigMaterialization { config: &m.config }));
                steps.push(Box::new(ToolingSetup { config: &m.tooling }));
                steps.push(Box::new(NodePackages { config: &m.tooling }));
            }
            // Present environment: provisioning reduces to activation.
            Mode::Direct => {
                steps.push(Box::new(EnvironmentProvisioning {
                    config: &m.environment,
                }));
            }
        }

        if mode.hands_off() {
            steps.push(Box::new(Handoff::new(&m.handoff, args)));
        }

        steps
    }
}
