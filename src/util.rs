//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, marking the cut with `…`.
///
/// Width is measured in display columns, so wide (CJK, emoji) characters
/// count double and combining marks count zero.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_to_width("raw potatoes x75", 8), "raw pot…");
/// assert_eq!(truncate_to_width("rice", 8), "rice");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one column for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_to_width("rice", 10), "rice");
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("potatoes", 8), "potatoes");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("raw potatoes x75", 8), "raw pot…");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each of these takes two columns
        let s = "日本語";
        assert_eq!(truncate_to_width(s, 5), "日本…");
        assert_eq!(truncate_to_width(s, 4), "日…");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
