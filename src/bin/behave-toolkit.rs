use anyhow::Result;
use behave_toolkit::cli::Cli;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbosity flags pick the level
    let default_level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting behave-toolkit {}", behave_toolkit::VERSION);

    if let Err(e) = cli.execute().await {
        // Log the full error for debugging
        error!("Command execution failed: {:?}", e);

        eprintln!("Error: {}", e.user_message());

        // behave's own exit code when a run failed, 1 otherwise
        std::process::exit(e.exit_code());
    }

    Ok(())
}
