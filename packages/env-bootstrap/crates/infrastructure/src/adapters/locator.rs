use domain::ports::InterpreterLocator;
use std::path::PathBuf;

/// Finds executables on PATH using the `which` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLocator;

impl PathLocator {
    pub fn new() -> Self {
        Self
    }
}

impl InterpreterLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(program = name, error = %e, "not found on PATH");
                None
            }
        }
    }
}
