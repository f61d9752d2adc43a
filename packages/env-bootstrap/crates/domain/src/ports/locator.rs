use std::path::PathBuf;

/// Resolves executables by name, the way a shell does through PATH.
pub trait InterpreterLocator {
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

impl<L: InterpreterLocator + ?Sized> InterpreterLocator for &L {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        (**self).locate(name)
    }
}
