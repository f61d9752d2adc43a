use domain::{BootstrapContext, BootstrapError, CommandRunner, StepKind, StepOutcome};

/// One unit of the bootstrap sequence.
pub trait Step {
    fn kind(&self) -> StepKind;

    /// Gate checked before `run`; irrelevant steps are recorded as skipped.
    fn is_relevant(&self, _ctx: &BootstrapContext) -> bool {
        true
    }

    /// Reported when `is_relevant` returns false.
    fn skip_reason(&self) -> String {
        "not applicable".to_string()
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError>;
}
