use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::floor::VersionFloor;
use super::policy::TemplatePolicy;

/// Which interpreter to look for and how recent it should be.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Executable names probed on PATH, in order.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,

    /// Recommended floor (major.minor). Older interpreters only produce a warning.
    #[serde(default)]
    #[schemars(with = "String")]
    pub minimum: VersionFloor,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            minimum: VersionFloor::default(),
        }
    }
}

/// Location of the isolated runtime environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    #[serde(default = "default_env_dir")]
    pub dir: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            dir: default_env_dir(),
        }
    }
}

/// Dependency manifests installed into the environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DependenciesConfig {
    /// Required. Its absence aborts the run.
    #[serde(default = "default_requirements")]
    pub manifest: PathBuf,

    /// Installed as well when present.
    #[serde(default = "default_dev_requirements")]
    pub dev_manifest: Option<PathBuf>,

    /// Upgrade pip before installing.
    #[serde(default = "default_true")]
    pub upgrade_installer: bool,
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self {
            manifest: default_requirements(),
            dev_manifest: default_dev_requirements(),
            upgrade_installer: true,
        }
    }
}

/// Git submodule synchronisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VcsConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Submodule checkout whose `.git` marker decides init vs update.
    #[serde(default = "default_submodule")]
    pub submodule: PathBuf,
}

impl VcsConfig {
    pub fn marker(&self) -> PathBuf {
        self.submodule.join(".git")
    }
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            submodule: default_submodule(),
        }
    }
}

/// Runtime configuration file materialised from a checked-in template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileConfig {
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default = "default_target")]
    pub target: PathBuf,

    #[serde(default)]
    pub missing_template: TemplatePolicy,
}

impl Default for ConfigFileConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            target: default_target(),
            missing_template: TemplatePolicy::default(),
        }
    }
}

/// Optional developer tooling, each gated on a config file being present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ToolingConfig {
    #[serde(default = "default_tooling_config")]
    pub config: PathBuf,

    /// Package installed into the environment to provide the hook manager.
    #[serde(default = "default_tooling_package")]
    pub package: String,

    #[serde(default = "default_node_manifest")]
    pub node_manifest: PathBuf,
}

impl Default for ToolingConfig {
    fn default() -> Self {
        Self {
            config: default_tooling_config(),
            package: default_tooling_package(),
            node_manifest: default_node_manifest(),
        }
    }
}

/// The downstream application control is handed to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HandoffConfig {
    /// Working directory of the downstream application, relative to the root.
    #[serde(default = "default_handoff_dir")]
    pub dir: PathBuf,

    /// Entry point, run as `<env python> -m <module>`.
    #[serde(default = "default_module")]
    pub module: String,

    /// Forwarded when the caller supplies no arguments.
    #[serde(default = "default_args")]
    pub default_args: Vec<String>,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            dir: default_handoff_dir(),
            module: default_module(),
            default_args: default_args(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_candidates() -> Vec<String> {
    vec!["python3".to_string(), "python".to_string()]
}

fn default_env_dir() -> PathBuf {
    PathBuf::from(".venv")
}

fn default_requirements() -> PathBuf {
    PathBuf::from("requirements.txt")
}

fn default_dev_requirements() -> Option<PathBuf> {
    Some(PathBuf::from("requirements-dev.txt"))
}

fn default_submodule() -> PathBuf {
    PathBuf::from("tests/vcr_cassettes")
}

fn default_template() -> PathBuf {
    PathBuf::from(".env.template")
}

fn default_target() -> PathBuf {
    PathBuf::from(".env")
}

fn default_tooling_config() -> PathBuf {
    PathBuf::from(".pre-commit-config.yaml")
}

fn default_tooling_package() -> String {
    "pre-commit".to_string()
}

fn default_node_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_handoff_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_module() -> String {
    "autogpt".to_string()
}

fn default_args() -> Vec<String> {
    vec!["setup".to_string()]
}
