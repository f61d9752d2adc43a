use std::ffi::OsString;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::entities::{ActiveEnvironment, Interpreter};
use crate::ports::CommandSpec;

/// Execution state threaded through every step.
///
/// Holds what a shell script would keep in ambient state (working directory,
/// activated environment) so steps never mutate the process itself.
#[derive(Debug, Clone)]
pub struct BootstrapContext {
    root: PathBuf,
    cwd: PathBuf,
    environment: Option<ActiveEnvironment>,
    interpreter: Option<Interpreter>,
}

impl BootstrapContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            cwd: root.clone(),
            root,
            environment: None,
            interpreter: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolves a workspace-relative path against the root.
    pub fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    pub fn activate(&mut self, environment: ActiveEnvironment) {
        self.environment = Some(environment);
    }

    pub fn environment(&self) -> Option<&ActiveEnvironment> {
        self.environment.as_ref()
    }

    pub fn set_interpreter(&mut self, interpreter: Interpreter) {
        self.interpreter = Some(interpreter);
    }

    pub fn interpreter(&self) -> Option<&Interpreter> {
        self.interpreter.as_ref()
    }

    /// Switches the working directory until the returned guard is dropped.
    pub fn enter(&mut self, dir: &Path) -> WorkingDir<'_> {
        let target = self.root.join(dir);
        let previous = std::mem::replace(&mut self.cwd, target);
        WorkingDir {
            ctx: self,
            previous: Some(previous),
        }
    }

    /// A command rooted at the current working directory with the active
    /// environment applied.
    pub fn command(&self, program: impl Into<OsString>) -> CommandSpec {
        let mut spec = CommandSpec::new(program, self.cwd.clone());
        if let Some(env) = &self.environment {
            spec.path_prefix = Some(env.bin_dir.clone());
            spec = spec.env("VIRTUAL_ENV", env.root.clone().into_os_string());
        }
        spec
    }
}

/// Scoped working-directory switch; restores the previous directory on drop.
pub struct WorkingDir<'a> {
    ctx: &'a mut BootstrapContext,
    previous: Option<PathBuf>,
}

impl Deref for WorkingDir<'_> {
    type Target = BootstrapContext;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl DerefMut for WorkingDir<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl Drop for WorkingDir<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.ctx.cwd = previous;
        }
    }
}
