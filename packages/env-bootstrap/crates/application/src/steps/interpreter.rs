use bootstrap_manifest::InterpreterConfig;
use domain::{
    parse_interpreter_version, BootstrapContext, BootstrapError, CommandRunner, CommandSpec,
    Interpreter, InterpreterLocator, StepKind, StepOutcome,
};

use crate::step::Step;

/// Finds the first candidate on PATH and asks it for its version.
///
/// A candidate that resolves but cannot report a version is still returned,
/// with `version: None`.
pub fn detect_interpreter(
    config: &InterpreterConfig,
    locator: &dyn InterpreterLocator,
    runner: &dyn CommandRunner,
    cwd: &std::path::Path,
) -> Result<Option<Interpreter>, BootstrapError> {
    let Some((program, location)) = config
        .candidates
        .iter()
        .find_map(|name| locator.locate(name).map(|path| (name.clone(), path)))
    else {
        return Ok(None);
    };

    let spec = CommandSpec::new(location.clone().into_os_string(), cwd).arg("--version");
    let output = runner.run(&spec)?;

    // Python 2 printed its version on stderr.
    let version = if output.is_success() {
        parse_interpreter_version(&output.stdout)
            .or_else(|| parse_interpreter_version(&output.stderr))
    } else {
        None
    };

    Ok(Some(Interpreter {
        program,
        location,
        version,
    }))
}

pub struct InterpreterCheck<'a> {
    pub config: &'a InterpreterConfig,
    pub locator: &'a dyn InterpreterLocator,
}

impl Step for InterpreterCheck<'_> {
    fn kind(&self) -> StepKind {
        StepKind::InterpreterCheck
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let interpreter = detect_interpreter(self.config, self.locator, runner, ctx.root())?
            .ok_or_else(|| BootstrapError::InterpreterNotFound {
                candidates: self.config.candidates.clone(),
            })?;

        let floor = self.config.minimum;
        let outcome = match &interpreter.version {
            None => {
                tracing::warn!(program = %interpreter.program, "could not determine interpreter version");
                StepOutcome::Warned(format!(
                    "Could not determine the version of {}; {} or newer is recommended",
                    interpreter.program, floor
                ))
            }
            Some(version) if !floor.is_satisfied_by(version) => {
                tracing::warn!(%version, %floor, "interpreter below recommended version");
                StepOutcome::Warned(format!(
                    "Python {} found; {} or newer is recommended",
                    version, floor
                ))
            }
            Some(version) => StepOutcome::Completed(format!(
                "{} {} at {}",
                interpreter.program,
                version,
                interpreter.location.display()
            )),
        };

        ctx.set_interpreter(interpreter);
        Ok(outcome)
    }
}
