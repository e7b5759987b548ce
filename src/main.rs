use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mediafk::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_filter = if cli.verbose {
        "mediafk=debug,tower_http=debug"
    } else {
        "mediafk=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    info!("Starting mediafk v{}", env!("CARGO_PKG_VERSION"));

    cli.run().await?;

    Ok(())
}
