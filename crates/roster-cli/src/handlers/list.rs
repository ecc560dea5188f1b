//! List command handler.
//!
//! Fetches one batch of users and prints it as a table or JSON.

use anyhow::Result;
use roster_core::UserSourcePort;

use crate::bootstrap::CliContext;
use crate::parser::OutputFormat;
use crate::presentation::{format_users_json, format_users_table};

/// Execute the list command.
///
/// # Errors
///
/// Returns the normalized fetch failure if the user source fails, or a
/// serialization error when JSON output cannot be produced.
pub async fn execute(ctx: &CliContext, format: OutputFormat) -> Result<()> {
    let output = render(ctx.users(), format).await?;
    print!("{output}");
    Ok(())
}

/// Fetch users from `source` and render them in `format`.
pub async fn render(source: &dyn UserSourcePort, format: OutputFormat) -> Result<String> {
    let users = source.fetch_users().await?;

    let output = match format {
        OutputFormat::Table => format_users_table(&users),
        OutputFormat::Json => {
            let mut json = format_users_json(&users)?;
            json.push('\n');
            json
        }
    };

    Ok(output)
}
