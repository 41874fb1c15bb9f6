use anyhow::Result;
use attlog::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging is opt-in; without it the msg_* macros print directly.
    if std::env::var("ATTLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
