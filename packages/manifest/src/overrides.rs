//! Environment-variable overrides for `bootstrap.toml` values.

use std::path::PathBuf;

use crate::error::ManifestError;
use crate::{BootstrapManifest, TemplatePolicy, VersionFloor};

pub const ENV_DIR: &str = "ENV_BOOTSTRAP_ENV_DIR";
pub const PYTHON: &str = "ENV_BOOTSTRAP_PYTHON";
pub const MIN_PYTHON: &str = "ENV_BOOTSTRAP_MIN_PYTHON";
pub const VCS_SYNC: &str = "ENV_BOOTSTRAP_VCS_SYNC";
pub const MISSING_TEMPLATE: &str = "ENV_BOOTSTRAP_MISSING_TEMPLATE";

impl BootstrapManifest {
    /// Applies overrides read through `lookup` (normally `std::env::var(..).ok()`).
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ManifestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = get(ENV_DIR) {
            self.environment.dir = PathBuf::from(dir.trim());
        }

        if let Some(python) = get(PYTHON) {
            self.interpreter.candidates = vec![python.trim().to_string()];
        }

        if let Some(min) = get(MIN_PYTHON) {
            self.interpreter.minimum = min
                .parse::<VersionFloor>()
                .map_err(|message| ManifestError::Override {
                    key: MIN_PYTHON,
                    message,
                })?;
        }

        if let Some(flag) = get(VCS_SYNC) {
            self.vcs.enabled = parse_bool(&flag).ok_or_else(|| ManifestError::Override {
                key: VCS_SYNC,
                message: format!("expected a boolean, got '{}'", flag),
            })?;
        }

        if let Some(policy) = get(MISSING_TEMPLATE) {
            self.config.missing_template = policy
                .parse::<TemplatePolicy>()
                .map_err(|message| ManifestError::Override {
                    key: MISSING_TEMPLATE,
                    message,
                })?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut manifest = BootstrapManifest::default();
        manifest
            .apply_env_overrides(lookup(&[
                (ENV_DIR, "venv"),
                (PYTHON, "python3.12"),
                (MIN_PYTHON, "3.11"),
                (VCS_SYNC, "yes"),
                (MISSING_TEMPLATE, "fatal"),
            ]))
            .unwrap();

        assert_eq!(manifest.environment.dir, PathBuf::from("venv"));
        assert_eq!(manifest.interpreter.candidates, vec!["python3.12".to_string()]);
        assert_eq!(manifest.interpreter.minimum, VersionFloor::new(3, 11));
        assert!(manifest.vcs.enabled);
        assert_eq!(manifest.config.missing_template, TemplatePolicy::Fatal);
    }

    #[test]
    fn empty_values_are_ignored() {
        let mut manifest = BootstrapManifest::default();
        manifest
            .apply_env_overrides(lookup(&[(ENV_DIR, "  "), (VCS_SYNC, "")]))
            .unwrap();
        assert_eq!(manifest, BootstrapManifest::default());
    }

    #[test]
    fn invalid_values_name_the_key() {
        let mut manifest = BootstrapManifest::default();
        let err = manifest
            .apply_env_overrides(lookup(&[(VCS_SYNC, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ManifestError::Override { key: VCS_SYNC, .. }));

        let err = manifest
            .apply_env_overrides(lookup(&[(MIN_PYTHON, "3.x")]))
            .unwrap_err();
        assert!(err.to_string().contains(MIN_PYTHON));
    }
}
