//! Table and JSON formatting for user lists.

use std::fmt::Write as _;

use roster_core::UserRecord;

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use roster_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Render users as a fixed-width table, one row per user in received order.
pub fn format_users_table(users: &[UserRecord]) -> String {
    let mut out = String::new();

    if users.is_empty() {
        out.push_str("No users returned.\n");
        return out;
    }

    let _ = writeln!(out, "Fetched {} user(s):\n", users.len());
    let _ = writeln!(out, "{:<3} {:<28} {:<36} Thumbnail", "#", "Name", "Email");
    let _ = writeln!(out, "{}", separator(110));

    for (index, user) in users.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<3} {:<28} {:<36} {}",
            index + 1,
            truncate_string(&user.name.full_name(), 27),
            truncate_string(&user.email, 35),
            user.picture.thumbnail
        );
    }

    out
}

/// Render users as a pretty-printed JSON array.
pub fn format_users_json(users: &[UserRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(users)
}
