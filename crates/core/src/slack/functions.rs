/// Title used when every line of the message is blank.
pub const NO_TITLE: &str = "No title";

/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 150;

/// Truncate `s` to at most `max` characters (not bytes).
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Derive a message title from the first non-blank line of `message`.
pub fn derive_title(message: &str) -> String {
    let line = message
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or(NO_TITLE);
    truncate(line, MAX_TITLE_CHARS)
}
