//! Finger-spelling CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fingerspell_cli::{replay, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => {
            replay::execute_classify(args).await?;
        }
        Commands::Auth(args) => {
            replay::execute_auth(args).await?;
        }
        Commands::Letters(args) => {
            replay::execute_letters(args)?;
        }
        Commands::Version => {
            println!("fingerspell {}", env!("CARGO_PKG_VERSION"));
            println!("recognition module version: {}", fingerspell_recognition::VERSION);
        }
    }

    Ok(())
}
