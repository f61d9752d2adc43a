use domain::ports::{CommandOutput, CommandRunner, CommandSpec, ProcessError, Stdio};
use std::ffi::OsString;
use std::process::Command;

/// Runs commands with `std::process`, blocking until each exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(spec: &CommandSpec) -> Result<Command, ProcessError> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).current_dir(&spec.cwd);

        for (key, value) in &spec.envs {
            cmd.env(key, value);
        }

        if let Some(prefix) = &spec.path_prefix {
            cmd.env("PATH", prefixed_path(prefix, std::env::var_os("PATH"))?);
        }

        Ok(cmd)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        tracing::debug!(command = %spec, cwd = %spec.cwd.display(), "spawning");

        let spawn_err = |source| ProcessError::Spawn {
            program: spec.program.to_string_lossy().into_owned(),
            source,
        };

        let mut cmd = Self::build(spec)?;

        let output = match spec.stdio {
            Stdio::Inherit => {
                let status = cmd.status().map_err(spawn_err)?;
                CommandOutput {
                    code: status.code(),
                    ..CommandOutput::default()
                }
            }
            Stdio::Capture => {
                let out = cmd.output().map_err(spawn_err)?;
                CommandOutput {
                    code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
                }
            }
        };

        tracing::debug!(command = %spec, code = ?output.code, "exited");
        Ok(output)
    }
}

fn prefixed_path(
    prefix: &std::path::Path,
    current: Option<OsString>,
) -> Result<OsString, ProcessError> {
    let mut paths = vec![prefix.to_path_buf()];
    if let Some(current) = current {
        paths.extend(std::env::split_paths(&current));
    }
    std::env::join_paths(paths).map_err(|source| ProcessError::SearchPath {
        prefix: prefix.to_path_buf(),
        source,
    })
}
