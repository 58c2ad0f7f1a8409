//! Command line entry point and the interactive menu

pub mod definition;
pub mod menu;
pub mod prompt;
pub mod render;

pub use definition::{Cli, Commands};
pub use prompt::Prompt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max` terminal columns.
pub fn truncate(s: &str, max: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max {
            return &s[..idx];
        }
    }
    s
}

/// Left-align `s` in a field `width` terminal columns wide.
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_equal_to_max() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello wo");
    }

    #[test]
    fn test_truncate_zero_max() {
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("año nuevo", 3), "año");
        // Wide characters take two columns each.
        assert_eq!(truncate("日本語", 4), "日本");
        assert_eq!(truncate("日本語", 3), "日");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("ñu", 3), "ñu ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
