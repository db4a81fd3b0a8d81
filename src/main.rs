use anyhow::Result;
use clap::Parser;
use colored::*;
use seoscope::cli::Cli;
use seoscope::{resolve_cli, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let result = match resolve_cli(args) {
        Ok(args) => {
            init_tracing(args.verbose);
            run(args).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so JSON and CSV on stdout stay machine-readable
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "seoscope=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
