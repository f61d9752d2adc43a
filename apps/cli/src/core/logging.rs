use tracing_subscriber::{prelude::*, EnvFilter};

/// Filter directives for diagnostic output, e.g. `ENV_BOOTSTRAP_LOG=debug`.
pub const LOG_ENV: &str = "ENV_BOOTSTRAP_LOG";

/// Installs the stderr subscriber. Defaults to `warn` so terminal output
/// stays with the progress UI.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
