use bootstrap_manifest::{BootstrapManifest, Policy};
use domain::{
    ArtifactState, BootstrapError, CommandRunner, Interpreter, InterpreterLocator,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::steps::detect_interpreter;

/// One filesystem artifact the sequencer reads or produces.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactStatus {
    pub name: &'static str,
    pub path: PathBuf,
    pub state: ArtifactState,
    /// Absence blocks a run (rather than being skipped or created).
    pub required: bool,
}

/// Read-only snapshot of a workspace.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceStatus {
    pub root: PathBuf,
    pub interpreter: Option<Interpreter>,
    pub minimum: String,
    /// `None` when the version could not be determined.
    pub meets_minimum: Option<bool>,
    pub policy: Policy,
    pub artifacts: Vec<ArtifactStatus>,
    /// The next plain run would skip provisioning and hand off directly.
    pub ready: bool,
}

impl WorkspaceStatus {
    pub fn artifact(&self, name: &str) -> Option<&ArtifactStatus> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    /// Required artifacts that are absent.
    pub fn blockers(&self) -> impl Iterator<Item = &ArtifactStatus> {
        self.artifacts
            .iter()
            .filter(|a| a.required && !a.state.is_present())
    }
}

/// Probes every artifact without creating or modifying anything.
pub fn inspect(
    manifest: &BootstrapManifest,
    root: &Path,
    locator: &dyn InterpreterLocator,
    runner: &dyn CommandRunner,
) -> Result<WorkspaceStatus, BootstrapError> {
    let interpreter = detect_interpreter(&manifest.interpreter, locator, runner, root)?;
    let floor = manifest.interpreter.minimum;
    let meets_minimum = interpreter
        .as_ref()
        .and_then(|i| i.version.as_ref())
        .map(|v| floor.is_satisfied_by(v));

    let mut entries: Vec<(&'static str, PathBuf, bool)> = vec![
        ("environment", manifest.environment.dir.clone(), false),
        ("dependency manifest", manifest.dependencies.manifest.clone(), true),
    ];
    if let Some(dev) = &manifest.dependencies.dev_manifest {
        entries.push(("dev dependency manifest", dev.clone(), false));
    }
    entries.push(("config file", manifest.config.target.clone(), false));
    entries.push(("config template", manifest.config.template.clone(), false));
    if manifest.vcs.enabled {
        entries.push(("submodule", manifest.vcs.marker(), false));
    }
    entries.push(("tooling config", manifest.tooling.config.clone(), false));
    entries.push(("node manifest", manifest.tooling.node_manifest.clone(), false));

    let artifacts: Vec<ArtifactStatus> = entries
        .into_iter()
        .map(|(name, path, required)| ArtifactStatus {
            name,
            state: ArtifactState::probe(&root.join(&path)),
            path,
            required,
        })
        .collect();

    let present = |name: &str| {
        artifacts
            .iter()
            .any(|a| a.name == name && a.state.is_present())
    };
    let ready = present("environment") && present("dependency manifest");

    Ok(WorkspaceStatus {
        root: root.to_path_buf(),
        interpreter,
        minimum: floor.to_string(),
        meets_minimum,
        policy: manifest.policy(),
        artifacts,
        ready,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeLocator, FakeRunner};

    #[test]
    fn reports_fresh_workspace_without_touching_it() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("requirements.txt"), "requests\n").unwrap();
        let manifest = BootstrapManifest::default();
        let runner = FakeRunner::new();

        let status = inspect(&manifest, dir.path(), &FakeLocator::with(&["python3"]), &runner)
            .unwrap();

        assert!(!status.ready);
        assert_eq!(status.meets_minimum, Some(true));
        assert_eq!(status.artifact("environment").unwrap().state, ArtifactState::Absent);
        assert!(status.artifact("dependency manifest").unwrap().state.is_present());
        assert!(status.artifact("submodule").is_none());
        assert_eq!(status.blockers().count(), 0);
        assert_eq!(status.policy, Policy::standard());
        assert!(runner.calls().is_empty());
        assert!(!dir.path().join(".venv").exists());
        assert!(!dir.path().join(".env").exists());
    }

    #[test]
    fn flags_missing_manifest_and_old_interpreter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".venv")).unwrap();
        let mut manifest = BootstrapManifest::default();
        manifest.vcs.enabled = true;
        let runner = FakeRunner::new().with_version_output("Python 3.8.1");

        let status = inspect(&manifest, dir.path(), &FakeLocator::with(&["python"]), &runner)
            .unwrap();

        assert!(!status.ready);
        assert_eq!(status.meets_minimum, Some(false));
        assert_eq!(status.interpreter.as_ref().unwrap().program, "python");
        let blockers: Vec<&str> = status.blockers().map(|a| a.name).collect();
        assert_eq!(blockers, vec!["dependency manifest"]);
        assert!(status.artifact("submodule").is_some());
        assert!(status.policy.vcs_sync);
    }

    #[test]
    fn no_interpreter_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let status = inspect(
            &BootstrapManifest::default(),
            dir.path(),
            &FakeLocator::empty(),
            &FakeRunner::new(),
        )
        .unwrap();
        assert!(status.interpreter.is_none());
        assert_eq!(status.meets_minimum, None);
    }
}
