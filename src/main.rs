mod cli;
mod client;
mod commands;
mod config;
mod draft;
mod error;
#[cfg(test)]
mod fake_api;
mod logging;
mod output;
mod responses;
mod sync;
mod types;

use std::io;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::AdminClient;
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "svu-admin", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            logging::init(config.log_level(), cli.verbose);

            let base_url = config.api_url(cli.api_url.as_deref())?;
            let timeout = config.request_timeout();
            tracing::debug!(%base_url, ?timeout, "Using admin API");
            let client = AdminClient::new(base_url, timeout)?;

            match command {
                Commands::Dashboard(args) => {
                    let period = args
                        .interval
                        .filter(|secs| *secs > 0)
                        .map(Duration::from_secs)
                        .unwrap_or_else(|| config.poll_interval());
                    commands::dashboard::run(&client, period).await?;
                }
                Commands::Projects { group } => {
                    commands::projects::list(&client, group).await?;
                }
                Commands::Project { id } => {
                    commands::projects::view(&client, id).await?;
                }
                Commands::Offer(args) => {
                    commands::offer::send(&client, args).await?;
                }
                Commands::Status { id, status } => {
                    commands::status::set(&client, id, status).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
