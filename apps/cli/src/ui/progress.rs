use env_bootstrap::{BootstrapError, StepKind, StepObserver, StepOutcome};
use std::cell::RefCell;

/// Renders sequencer progress with cliclack: a spinner around long-running
/// steps and one log line per finished step.
#[derive(Default)]
pub struct CliObserver {
    spinner: RefCell<Option<cliclack::ProgressBar>>,
}

impl CliObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for CliObserver {
    fn started(&self, step: StepKind) {
        if step.is_long_running() {
            let spinner = cliclack::spinner();
            spinner.start(format!("{}...", capitalize(&step.to_string())));
            *self.spinner.borrow_mut() = Some(spinner);
        } else if step == StepKind::Handoff {
            // The application owns the terminal from here on.
            let _ = cliclack::outro("Handing off");
        }
    }

    fn finished(&self, step: StepKind, outcome: &StepOutcome) {
        if step == StepKind::Handoff {
            return;
        }

        let spinner = self.spinner.borrow_mut().take();
        let _ = match (outcome, spinner) {
            (StepOutcome::Warned(detail), Some(spinner)) => {
                spinner.stop(capitalize(&step.to_string()));
                cliclack::log::warning(detail)
            }
            (StepOutcome::Warned(detail), None) => cliclack::log::warning(detail),
            (_, Some(spinner)) => {
                spinner.stop(outcome.detail());
                Ok(())
            }
            (StepOutcome::Skipped(detail), None) => cliclack::log::info(detail),
            (StepOutcome::Completed(detail), None) => cliclack::log::success(detail),
        };
    }

    fn failed(&self, step: StepKind, _error: &BootstrapError) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.error(format!("{} failed", capitalize(&step.to_string())));
        }
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
