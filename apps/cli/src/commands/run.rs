use bootstrap_manifest::MANIFEST_FILE;
use env_bootstrap::{BootstrapReport, Mode, PathLocator, Sequencer, SystemRunner};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::config::{load_manifest, workspace_root, CONFIG_ENV};
use crate::core::error::CliError;
use crate::ui::CliObserver;

/// Provision the Python workspace, then hand off to the application.
///
/// No flag is interpreted here: every argument, `--` and `--help` included,
/// reaches the application untouched. The configuration file is chosen with
/// `ENV_BOOTSTRAP_CONFIG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCommand {
    pub config: PathBuf,
    pub args: Vec<String>,
}

impl RunCommand {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_parts(std::env::args_os().skip(1), std::env::var_os(CONFIG_ENV))
    }

    pub fn from_parts<I>(args: I, config: Option<OsString>) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.into_string().map_err(CliError::Argument))
            .collect::<Result<Vec<_>, _>>()?;

        let config = config
            .filter(|c| !c.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));

        Ok(Self { config, args })
    }

    pub fn execute(self) -> Result<BootstrapReport, CliError> {
        let root = workspace_root(None)?;
        let manifest = load_manifest(&root, &self.config)?;

        cliclack::intro(console::style(" env-bootstrap ").on_cyan().black())?;

        let sequencer = Sequencer::new(manifest, SystemRunner::new(), PathLocator::new());
        let observer = CliObserver::new();
        let report = sequencer.run_with(&root, &self.args, &observer)?;

        if report.mode == Mode::SetupOnly {
            cliclack::outro("Environment ready")?;
        }
        Ok(report)
    }
}
