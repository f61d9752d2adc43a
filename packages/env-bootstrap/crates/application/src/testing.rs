//! Test doubles for the runner and locator ports.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use domain::{
    ActiveEnvironment, BootstrapContext, CommandOutput, CommandRunner, CommandSpec, Interpreter,
    InterpreterLocator, ProcessError,
};
use semver::Version;

/// Records every command and simulates the side effects the sequencer relies on.
pub struct FakeRunner {
    calls: RefCell<Vec<CommandSpec>>,
    failures: Vec<(String, CommandOutput)>,
    version_output: String,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failures: Vec::new(),
            version_output: "Python 3.11.4\n".to_string(),
        }
    }

    pub fn with_version_output(mut self, output: &str) -> Self {
        self.version_output = output.to_string();
        self
    }

    /// Any command whose rendering contains `needle` returns `output`.
    pub fn fail_when(mut self, needle: &str, output: CommandOutput) -> Self {
        self.failures.push((needle.to_string(), output));
        self
    }

    /// Recorded commands, excluding `--version` probes.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls
            .borrow()
            .iter()
            .filter(|spec| !spec.has_arg("--version"))
            .cloned()
            .collect()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    pub fn count_matching(&self, needle: &str) -> usize {
        self.commands().iter().filter(|c| c.contains(needle)).count()
    }
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        self.calls.borrow_mut().push(spec.clone());
        let rendered = spec.to_string();

        if let Some((_, output)) = self.failures.iter().find(|(n, _)| rendered.contains(n)) {
            return Ok(output.clone());
        }

        if spec.has_arg("--version") {
            return Ok(CommandOutput {
                code: Some(0),
                stdout: self.version_output.clone(),
                stderr: String::new(),
            });
        }

        // `python -m venv <dir>`: materialise the directory like the real thing.
        if spec.has_arg("venv") {
            if let Some(target) = spec.args.last() {
                let bin = Path::new(target).join("bin");
                std::fs::create_dir_all(&bin).map_err(|source| ProcessError::Spawn {
                    program: rendered.clone(),
                    source,
                })?;
                std::fs::write(bin.join("python"), b"").map_err(|source| {
                    ProcessError::Spawn {
                        program: rendered.clone(),
                        source,
                    }
                })?;
            }
        }

        Ok(CommandOutput::success())
    }
}

/// Resolves only the names it was given, to `/usr/bin/<name>`.
pub struct FakeLocator {
    found: HashMap<String, PathBuf>,
}

impl FakeLocator {
    pub fn with(names: &[&str]) -> Self {
        Self {
            found: names
                .iter()
                .map(|n| (n.to_string(), PathBuf::from("/usr/bin").join(n)))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::with(&[])
    }
}

impl InterpreterLocator for FakeLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.found.get(name).cloned()
    }
}

/// Context after a successful interpreter check.
pub fn ready_context(root: &Path) -> BootstrapContext {
    let mut ctx = BootstrapContext::new(root);
    ctx.set_interpreter(Interpreter {
        program: "python3".to_string(),
        location: PathBuf::from("/usr/bin/python3"),
        version: Some(Version::new(3, 11, 4)),
    });
    ctx
}

/// Context with `<root>/.venv` active.
pub fn activated_context(root: &Path) -> BootstrapContext {
    let mut ctx = ready_context(root);
    ctx.activate(ActiveEnvironment::at(&root.join(".venv")));
    ctx
}
