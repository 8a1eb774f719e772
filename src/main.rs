use tracing_subscriber::EnvFilter;
use worklog::commands::Cli;
use worklog::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging only when the user asked for it; the message
    // macros fall back to plain console output otherwise.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu().await
}
