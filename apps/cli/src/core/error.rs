use bootstrap_manifest::ManifestError;
use env_bootstrap::domain::ProcessError;
use env_bootstrap::{BootstrapError, SequenceError, StepKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ManifestError),

    #[error(transparent)]
    Bootstrap(#[from] SequenceError),

    /// Failure while inspecting, outside any step.
    #[error(transparent)]
    Inspect(#[from] BootstrapError),

    #[error("Argument is not valid UTF-8: {}", .0.to_string_lossy())]
    Argument(std::ffi::OsString),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns an actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(ManifestError::Override { key, .. }) => {
                Some(format!("Unset {} or give it a valid value.", key))
            }
            CliError::Config(_) => Some(
                "Check bootstrap.toml for syntax errors, or remove it to use the defaults."
                    .to_string(),
            ),
            CliError::Bootstrap(err) => bootstrap_suggestion(err),
            CliError::Inspect(_) => Some(
                "Check that the interpreter on PATH can be started.".to_string(),
            ),
            CliError::Argument(_) | CliError::Io(_) => None,
        }
    }

    pub fn render(&self) {
        if let CliError::Config(ManifestError::Parse {
            path,
            content,
            message,
            span,
        }) = self
        {
            crate::ui::diagnostic::report_manifest_error(path, content, message, span.clone());
            return;
        }

        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

fn bootstrap_suggestion(err: &SequenceError) -> Option<String> {
    let hint = match (&err.error, err.step) {
        (BootstrapError::InterpreterNotFound { .. }, _) => {
            "Install Python 3 and make sure `python3` or `python` is on PATH.".to_string()
        }
        (BootstrapError::MissingPrerequisite { what, .. }, StepKind::DependencyInstallation) => {
            format!("Run from the repository root; the {} must exist there.", what)
        }
        (BootstrapError::MissingPrerequisite { .. }, StepKind::ConfigMaterialization) => {
            "Restore the configuration template, or set ENV_BOOTSTRAP_MISSING_TEMPLATE=warn."
                .to_string()
        }
        (BootstrapError::MissingPrerequisite { what, .. }, _) => {
            format!("Provide the {} and run again.", what)
        }
        (BootstrapError::Spawn(ProcessError::SearchPath { .. }), _) => {
            "Move the environment to a directory whose path has no PATH separator.".to_string()
        }
        (BootstrapError::Spawn(_), StepKind::VcsSync) => {
            "Install git, or disable submodule sync with ENV_BOOTSTRAP_VCS_SYNC=false.".to_string()
        }
        // Either the app directory or the environment interpreter is gone.
        (BootstrapError::Spawn(_), StepKind::Handoff) => {
            "Check that `handoff.dir` in bootstrap.toml exists, or run `env-bootstrap setup` to rebuild the environment."
                .to_string()
        }
        (BootstrapError::Spawn(_), _) => {
            "Check that the program is installed and on PATH.".to_string()
        }
        // The application has already reported its own failure.
        (BootstrapError::ProcessFailed { .. }, StepKind::Handoff) => return None,
        (BootstrapError::ProcessFailed { .. }, StepKind::DependencyInstallation) => {
            "Check your network connection and the pinned versions in the dependency manifest."
                .to_string()
        }
        (BootstrapError::ProcessFailed { .. }, _) => {
            "Re-run with ENV_BOOTSTRAP_LOG=debug to see every command.".to_string()
        }
        (BootstrapError::Io { .. }, _) => "Check permissions in the workspace.".to_string(),
    };
    Some(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn handoff_failure_has_no_extra_hint() {
        let err = CliError::Bootstrap(SequenceError::new(
            StepKind::Handoff,
            BootstrapError::ProcessFailed {
                command: "python -m autogpt run".into(),
                code: Some(2),
                detail: String::new(),
            },
        ));
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn missing_manifest_points_at_repo_root() {
        let err = CliError::Bootstrap(SequenceError::new(
            StepKind::DependencyInstallation,
            BootstrapError::missing("dependency manifest", PathBuf::from("requirements.txt")),
        ));
        let hint = err.suggestion().unwrap();
        assert!(hint.contains("repository root"));
        assert!(err.to_string().starts_with("dependency installation failed"));
    }

    #[test]
    fn handoff_spawn_failure_points_at_app_dir() {
        let err = CliError::Bootstrap(SequenceError::new(
            StepKind::Handoff,
            BootstrapError::Spawn(ProcessError::Spawn {
                program: ".venv/bin/python".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        ));
        let hint = err.suggestion().unwrap();
        assert!(hint.contains("handoff.dir"));
        assert!(!hint.contains("installed and on PATH"));
    }

    #[test]
    fn override_hint_names_the_variable() {
        let err = CliError::Config(ManifestError::Override {
            key: "ENV_BOOTSTRAP_VCS_SYNC",
            message: "expected a boolean".into(),
        });
        assert!(err.suggestion().unwrap().contains("ENV_BOOTSTRAP_VCS_SYNC"));
    }
}
