use std::path::{Path, PathBuf};

/// An isolated environment that subsequent commands run inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEnvironment {
    pub root: PathBuf,
    pub bin_dir: PathBuf,
    pub python: PathBuf,
}

impl ActiveEnvironment {
    /// Resolves the layout of the environment at `root`.
    ///
    /// Prefers `Scripts/` when it exists (Windows venvs), otherwise `bin/`,
    /// so the result is usable before the directory has been populated.
    pub fn at(root: &Path) -> Self {
        let scripts = root.join("Scripts");
        let (bin_dir, python) = if scripts.join("python.exe").exists() {
            let python = scripts.join("python.exe");
            (scripts, python)
        } else if cfg!(windows) && !root.join("bin").exists() {
            let python = scripts.join("python.exe");
            (scripts, python)
        } else {
            let bin = root.join("bin");
            let python = bin.join("python");
            (bin, python)
        };

        Self {
            root: root.to_path_buf(),
            bin_dir,
            python,
        }
    }

    /// Path of an executable installed into the environment.
    pub fn executable(&self, name: &str) -> PathBuf {
        if cfg!(windows) {
            self.bin_dir.join(format!("{}.exe", name))
        } else {
            self.bin_dir.join(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn unix_layout() {
        let dir = tempfile::tempdir().unwrap();
        let env = ActiveEnvironment::at(&dir.path().join(".venv"));
        assert_eq!(env.bin_dir, dir.path().join(".venv/bin"));
        assert_eq!(env.python, dir.path().join(".venv/bin/python"));
        assert_eq!(env.executable("pre-commit"), dir.path().join(".venv/bin/pre-commit"));
    }

    #[test]
    fn windows_layout_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = dir.path().join("Scripts");
        std::fs::create_dir_all(&scripts).unwrap();
        std::fs::write(scripts.join("python.exe"), b"").unwrap();

        let env = ActiveEnvironment::at(dir.path());
        assert_eq!(env.bin_dir, scripts);
        assert_eq!(env.python, scripts.join("python.exe"));
    }
}
