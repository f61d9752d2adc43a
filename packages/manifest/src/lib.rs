pub mod error;
pub mod overrides;
pub mod types;

pub use error::ManifestError;
pub use types::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name, looked up relative to the workspace root.
pub const MANIFEST_FILE: &str = "bootstrap.toml";

/// Bootstrap configuration (`bootstrap.toml`).
/// Every section is optional; an absent file yields [`BootstrapManifest::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BootstrapManifest {
    /// Interpreter discovery and version floor
    #[serde(default)]
    pub interpreter: InterpreterConfig,

    /// Isolated runtime environment
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Dependency manifests
    #[serde(default)]
    pub dependencies: DependenciesConfig,

    /// Submodule sync (variant)
    #[serde(default)]
    pub vcs: VcsConfig,

    /// Template materialisation
    #[serde(default)]
    pub config: ConfigFileConfig,

    /// Optional tooling (pre-commit, node packages)
    #[serde(default)]
    pub tooling: ToolingConfig,

    /// Downstream application
    #[serde(default)]
    pub handoff: HandoffConfig,
}

impl BootstrapManifest {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(path, content)
    }

    pub fn from_toml(path: &Path, content: String) -> Result<Self, ManifestError> {
        toml::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
            span: e.span(),
            content,
        })
    }

    pub fn policy(&self) -> Policy {
        Policy {
            vcs_sync: self.vcs.enabled,
            missing_template: self.config.missing_template,
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.vcs.enabled = policy.vcs_sync;
        self.config.missing_template = policy.missing_template;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = BootstrapManifest::load(&dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest, BootstrapManifest::default());
        assert_eq!(manifest.policy(), Policy::standard());
        assert_eq!(manifest.handoff.default_args, vec!["setup".to_string()]);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(
            &path,
            r#"
[interpreter]
minimum = "3.11"

[vcs]
enabled = true
submodule = "fixtures/cassettes"

[handoff]
dir = "autogpts/autogpt"
"#,
        )
        .unwrap();

        let manifest = BootstrapManifest::load(&path).unwrap();
        assert_eq!(manifest.interpreter.minimum, VersionFloor::new(3, 11));
        assert_eq!(
            manifest.interpreter.candidates,
            vec!["python3".to_string(), "python".to_string()]
        );
        assert_eq!(manifest.vcs.marker(), PathBuf::from("fixtures/cassettes/.git"));
        assert_eq!(manifest.handoff.dir, PathBuf::from("autogpts/autogpt"));
        assert_eq!(manifest.handoff.module, "autogpt");
        assert_eq!(manifest.environment.dir, PathBuf::from(".venv"));
    }

    #[test]
    fn unknown_keys_report_a_span() {
        let content = "[environment]\ndirectory = \"venv\"\n".to_string();
        let err = BootstrapManifest::from_toml(Path::new(MANIFEST_FILE), content.clone())
            .unwrap_err();

        match err {
            ManifestError::Parse { span, content: kept, .. } => {
                let span = span.expect("toml errors carry a span");
                assert_eq!(kept, content);
                assert!(kept[span].contains("directory"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_floor_is_a_parse_error() {
        let err = BootstrapManifest::from_toml(
            Path::new(MANIFEST_FILE),
            "[interpreter]\nminimum = \"latest\"\n".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn policy_variants_round_trip_through_manifest() {
        let manifest = BootstrapManifest::default().with_policy(Policy::with_submodules());
        assert!(manifest.vcs.enabled);
        assert_eq!(manifest.config.missing_template, TemplatePolicy::Fatal);
        assert_eq!(manifest.policy(), Policy::with_submodules());
    }
}
