use shiftshift::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Debug mode routes all user messages through the tracing subscriber.
    if std::env::var("SHIFTSHIFT_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu().await
}
