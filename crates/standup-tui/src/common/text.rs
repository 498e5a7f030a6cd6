//! Width-aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` terminal columns, ending with `…` when
/// anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Joins names with ", ", or a dash for an empty list.
pub fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "—".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_with_ellipsis("Improv", 6), "Improv");
    }

    #[test]
    fn test_truncate_cuts() {
        assert_eq!(truncate_with_ellipsis("Stand Up Special", 8), "Stand U…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // The mask emoji is two columns wide.
        assert_eq!(truncate_with_ellipsis("🎭 StandUp", 4), "🎭 …");
    }

    #[test]
    fn test_truncate_tiny_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(&[]), "—");
        assert_eq!(
            join_names(&["Ali Wong".to_string(), "Kevin Hart".to_string()]),
            "Ali Wong, Kevin Hart"
        );
    }
}
