use tali::commands::Cli;
use tali::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured logging is only wired up in debug mode; in normal mode the
    // message macros print straight to the console.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tali=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    Cli::menu()
}
