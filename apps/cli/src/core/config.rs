use bootstrap_manifest::{BootstrapManifest, ManifestError};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ENV_BOOTSTRAP_CONFIG";

/// Absolute workspace root: `path` if given, else the current directory.
pub fn workspace_root(path: Option<PathBuf>) -> std::io::Result<PathBuf> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    std::fs::canonicalize(root)
}

/// Loads the manifest (relative paths resolve against `root`) and applies
/// `ENV_BOOTSTRAP_*` overrides from the process environment.
pub fn load_manifest(root: &Path, file: &Path) -> Result<BootstrapManifest, ManifestError> {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    };

    let mut manifest = BootstrapManifest::load(&path)?;
    manifest.apply_env_overrides(|key| std::env::var(key).ok())?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_config_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("ci.toml"),
            "[environment]\ndir = \"venv-ci\"\n",
        )
        .unwrap();

        let manifest = load_manifest(dir.path(), Path::new("ci.toml")).unwrap();
        assert_eq!(manifest.environment.dir, PathBuf::from("venv-ci"));
    }

    #[test]
    fn absent_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = load_manifest(dir.path(), Path::new("bootstrap.toml")).unwrap();
        assert_eq!(manifest.handoff.module, "autogpt");
    }
}
