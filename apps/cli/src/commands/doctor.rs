use anyhow::Result;
use bootstrap_manifest::MANIFEST_FILE;
use clap::Parser;
use env_bootstrap::application::ArtifactStatus;
use bootstrap_manifest::Policy;
use env_bootstrap::{inspect, PathLocator, SystemRunner, WorkspaceStatus};
use std::path::PathBuf;

use crate::core::config::{load_manifest, workspace_root, CONFIG_ENV};
use crate::core::error::CliError;
use crate::ui::{Icon, Theme};

/// Report what a bootstrap run would find, without changing anything.
#[derive(Parser, Debug)]
#[command(name = "env-bootstrap-doctor", version)]
pub struct DoctorCommand {
    /// Workspace to inspect (defaults to the current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Bootstrap configuration file, relative to the workspace root
    #[arg(
        long = "bootstrap-config",
        env = CONFIG_ENV,
        default_value = MANIFEST_FILE,
        value_name = "PATH"
    )]
    pub config: PathBuf,

    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

impl DoctorCommand {
    /// Problems in the workspace are reported, not returned; only terminal
    /// I/O surfaces as an error.
    pub fn execute(self) -> Result<()> {
        let status = match self.status() {
            Ok(status) => status,
            Err(err) => {
                err.render();
                return Ok(());
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&status)?);
            return Ok(());
        }

        render(&status)
    }

    fn status(&self) -> Result<WorkspaceStatus, CliError> {
        let root = workspace_root(self.path.clone())?;
        let manifest = load_manifest(&root, &self.config)?;
        Ok(inspect(
            &manifest,
            &root,
            &PathLocator::new(),
            &SystemRunner::new(),
        )?)
    }
}

fn render(status: &WorkspaceStatus) -> Result<()> {
    cliclack::intro(console::style(" env-bootstrap doctor ").on_cyan().black())?;
    cliclack::log::info(format!("Workspace {}", Theme::muted(status.root.display())))?;

    match (&status.interpreter, status.meets_minimum) {
        (Some(interpreter), Some(true)) => {
            cliclack::log::success(format!("Interpreter {}", interpreter))?
        }
        (Some(interpreter), Some(false)) => cliclack::log::warning(format!(
            "{} Interpreter {} is older than {}",
            Icon::Warn,
            interpreter,
            status.minimum
        ))?,
        (Some(interpreter), None) => cliclack::log::warning(format!(
            "{} Interpreter {} reported no version (need {}+)",
            Icon::Warn,
            interpreter,
            status.minimum
        ))?,
        (None, _) => cliclack::log::error(format!(
            "No Python interpreter on PATH (need {}+)",
            status.minimum
        ))?,
    }

    cliclack::log::info(policy_line(&status.policy))?;

    for artifact in &status.artifacts {
        let line = artifact_line(artifact);
        match (artifact.state.is_present(), artifact.required) {
            (true, _) => cliclack::log::success(line)?,
            (false, true) => cliclack::log::error(line)?,
            (false, false) => cliclack::log::info(line)?,
        }
    }

    if status.ready {
        cliclack::outro(format!("{} Ready: the next run hands off directly", Icon::Rocket))?;
    } else if status.blockers().next().is_some() {
        cliclack::outro(Theme::error("Blocked: a required file is missing"))?;
    } else {
        cliclack::outro(format!(
            "Not provisioned yet: run {}",
            Theme::primary("env-bootstrap setup")
        ))?;
    }
    Ok(())
}

fn policy_line(policy: &Policy) -> String {
    let sync = if policy.vcs_sync { "on" } else { "off" };
    format!(
        "Submodule sync {}, missing template {}",
        sync, policy.missing_template
    )
}

fn artifact_line(artifact: &ArtifactStatus) -> String {
    let icon = match (artifact.state.is_present(), artifact.required) {
        (true, _) => Icon::Check,
        (false, true) => Icon::Cross,
        (false, false) => Icon::Skip,
    };
    format!(
        "{} {:<24} {} ({})",
        icon,
        artifact.name,
        Theme::muted(artifact.path.display()),
        artifact.state
    )
}
