use clap::Parser;
use env_bootstrap_cli::commands::DoctorCommand;
use env_bootstrap_cli::core::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    DoctorCommand::parse().execute()
}
