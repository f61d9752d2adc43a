use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens when neither the config file nor its template exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplatePolicy {
    /// Log a warning and continue; the operator creates the file by hand.
    #[default]
    Warn,
    /// Abort the run.
    Fatal,
}

impl fmt::Display for TemplatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplatePolicy::Warn => write!(f, "warn"),
            TemplatePolicy::Fatal => write!(f, "fatal"),
        }
    }
}

impl FromStr for TemplatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" | "warning" => Ok(TemplatePolicy::Warn),
            "fatal" | "error" => Ok(TemplatePolicy::Fatal),
            other => Err(format!("unknown template policy '{}'", other)),
        }
    }
}

/// The two behaviours the bootstrap scripts disagree on, as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub vcs_sync: bool,
    pub missing_template: TemplatePolicy,
}

impl Policy {
    /// No submodule sync; a missing template only warns.
    pub const fn standard() -> Self {
        Self {
            vcs_sync: false,
            missing_template: TemplatePolicy::Warn,
        }
    }

    /// Submodule sync enabled; a missing template aborts.
    pub const fn with_submodules() -> Self {
        Self {
            vcs_sync: true,
            missing_template: TemplatePolicy::Fatal,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::standard()
    }
}
