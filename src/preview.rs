use unicode_segmentation::UnicodeSegmentation;

/// Cap a list for a bounded panel, keeping the first `limit` items.
pub fn capped<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

/// Squeeze text onto one line for a display surface of `max_len`
/// user-visible characters.
///
/// Every line terminator collapses to a single space and the result
/// is trimmed; anything longer than `max_len` is cut to `max_len - 1`
/// grapheme clusters plus an ellipsis, so the result is exactly
/// `max_len` long. Lengths count grapheme clusters, not code units.
pub fn truncate(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let collapsed = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    let trimmed = collapsed.trim();

    if trimmed.graphemes(true).count() <= max_len {
        return trimmed.to_string();
    }

    let mut out: String = trimmed.graphemes(true).take(max_len - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_keeps_prefix_in_order() {
        let items = vec!["a", "b", "c", "d", "e", "f"];
        assert_eq!(capped(&items, 5), &["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_capped_short_list_unchanged() {
        let items = vec![1, 2];
        assert_eq!(capped(&items, 5), &[1, 2]);
    }

    #[test]
    fn test_capped_zero_limit() {
        let items = vec![1, 2, 3];
        assert!(capped(&items, 0).is_empty());
    }

    #[test]
    fn test_truncate_collapses_newlines() {
        assert_eq!(truncate("hello\nworld", 60), "hello world");
        assert_eq!(truncate("hello\r\nworld", 60), "hello world");
    }

    #[test]
    fn test_truncate_trims_surrounding_whitespace() {
        assert_eq!(truncate("  padded  \n", 60), "padded");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_long_text_is_exactly_max_len() {
        let long = "a".repeat(100);
        let out = truncate(&long, 20);

        assert_eq!(out.graphemes(true).count(), 20);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_truncate_zero_length() {
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_truncate_counts_graphemes_not_bytes() {
        // Each flag is one grapheme but several code units.
        let flags = "🇩🇪🇫🇷🇯🇵🇧🇷";
        assert_eq!(truncate(flags, 4), flags);

        let cut = truncate(flags, 3);
        assert_eq!(cut.graphemes(true).count(), 3);
        assert!(cut.ends_with('…'));
    }
}
