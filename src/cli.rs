//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// A search-and-retweet bot for Twitter/X.
///
/// Fetches the account's own timeline, searches recent tweets for the query,
/// and retweets every match the account has not already posted or retweeted.
#[derive(Debug, Parser)]
#[command(name = "rebird", version, about)]
pub struct Cli {
    /// Secrets file holding the account credentials
    #[arg(short = 'c', long = "secrets", value_name = "FILE")]
    pub secrets: PathBuf,

    /// Search query whose matches get retweeted
    #[arg(short = 's', long = "search", value_name = "QUERY")]
    pub search: String,

    /// Only consider tweets tagged with this language
    #[arg(short = 'l', long = "lang", value_name = "TAG")]
    pub lang: Option<String>,

    /// Fetch and report counts without retweeting anything
    #[arg(short = 'z', long = "simulate")]
    pub simulate: bool,
}
