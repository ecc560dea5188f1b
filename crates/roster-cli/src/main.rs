//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster_cli::{Cli, bootstrap, handlers};

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(&cli.config())?;

    handlers::list::execute(&ctx, cli.output_format()).await
}
