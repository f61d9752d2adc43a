use env_bootstrap_cli::commands::RunCommand;
use env_bootstrap_cli::core::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();

    match RunCommand::from_env().and_then(RunCommand::execute) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            err.render();
            ExitCode::FAILURE
        }
    }
}
