//! herald CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use herald_client::cli::{google, slack, telegram, Cli, Commands};
use herald_client::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.global) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Slack(cmd) => slack::run(cmd).await.context("slack")?,
        Commands::Telegram(cmd) => telegram::run(cmd).await.context("telegram")?,
        Commands::Google(cmd) => google::run(cmd).await.context("google")?,
        Commands::Version => println!("{}", env!("CARGO_PKG_VERSION")),
    }
    Ok(())
}
