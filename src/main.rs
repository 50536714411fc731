//! # rebird
//!
//! Command-line entry point for the search-and-retweet bot. Parses the
//! arguments, loads the secrets file, runs one complete pass and exits.
//!
//! ## Example Usage
//!
//! ```bash
//! # Retweet recent matches for a hashtag
//! rebird -c secrets.txt -s '#PTCE'
//!
//! # Restrict to one language
//! rebird -c secrets.txt -s '#PTCE' -l fr
//!
//! # See what would be retweeted without touching anything
//! rebird -c secrets.txt -s '#PTCE' -z
//!
//! # With debug logging
//! RUST_LOG=debug rebird -c secrets.txt -s '#PTCE'
//! ```

use clap::Parser;
use log::{error, info};

use rebird::bot::RetweetBot;
use rebird::cli::Cli;
use rebird::config::Credentials;
use rebird::error::Result;

#[tokio::main]
async fn main() {
    // Initialize the logging system
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("Run aborted: {}", e);
        eprintln!("rebird: {}", e);
        std::process::exit(1);
    }
}

/// Loads credentials, builds the bot and runs one pass.
async fn run(cli: Cli) -> Result<()> {
    let credentials = Credentials::from_secrets_file(&cli.secrets)?;
    let mut bot = RetweetBot::new(credentials)?;

    let report = bot
        .run(&cli.search, cli.lang.as_deref(), cli.simulate)
        .await?;

    info!(
        "Done: {} own tweets, {} found, {} accepted, {} retweeted",
        report.own_count, report.found_count, report.accepted_count, report.retweeted_count
    );
    if cli.simulate {
        println!(
            "simulation: own={} found={} to_retweet={}",
            report.own_count, report.found_count, report.accepted_count
        );
    }
    Ok(())
}
