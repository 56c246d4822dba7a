// src/util/text.rs

/// Shorten text for one-line list display, appending an ellipsis when cut.
///
/// Counts characters, not bytes, so multi-byte titles are safe to cut.
///
/// # Examples
///
/// ```
/// use numisma::util::text::truncate;
///
/// assert_eq!(truncate("Lincoln Penny", 20), "Lincoln Penny");
/// assert_eq!(truncate("An extremely long coin title", 10), "An extrem…");
/// ```
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
