//! Main CLI parser and argument handling.

use clap::Parser;

use crate::bootstrap::CliConfig;

/// Fetch a batch of randomly generated users and print them.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "List randomly generated users from randomuser.me")]
#[command(version)]
pub struct Cli {
    /// Print users as a JSON array instead of a table
    #[arg(long)]
    pub json: bool,

    /// Override the Random User API endpoint
    #[arg(long = "base-url", env = "ROSTER_BASE_URL")]
    pub base_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// How the fetched users are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width table, one row per user.
    Table,
    /// Pretty-printed JSON array of records.
    Json,
}

impl Cli {
    /// Output format selected by the flags.
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    /// Bootstrap configuration derived from the flags.
    pub fn config(&self) -> CliConfig {
        CliConfig {
            base_url: self.base_url.clone(),
        }
    }
}
