//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Truncate a string to at most `max_width` terminal columns.
///
/// If the string already fits, returns it unchanged. Otherwise keeps as many
/// leading characters as fit in `max_width - 1` columns and appends `…`.
/// Width is measured in display columns, so wide (CJK) characters count as two.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
/// The last line is truncated with `…` when text remains.
pub fn wrap_to_width(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut words = s.split_whitespace().peekable();

    while let Some(word) = words.next() {
        let candidate_width = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if candidate_width <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            // Out of room: mark the final line as cut
            let last = lines.pop().unwrap_or_default();
            lines.push(truncate_to_width(&format!("{last} {word}"), width));
            return lines;
        }
        if word.width() > width {
            current = truncate_to_width(word, width);
            if words.peek().is_some() && lines.len() + 1 == max_lines {
                lines.push(current);
                return lines;
            }
            lines.push(std::mem::take(&mut current));
        } else {
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        if lines.len() == max_lines {
            let last = lines.pop().unwrap_or_default();
            lines.push(truncate_to_width(&format!("{last} {current}"), width));
        } else {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each character is two columns wide
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("日本語", 5), "日本…");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn test_wrap_fits_on_lines() {
        assert_eq!(
            wrap_to_width("An apple mobile which is nothing like apple", 16, 3),
            vec!["An apple mobile", "which is nothing", "like apple"]
        );
    }

    #[test]
    fn test_wrap_truncates_last_line() {
        let lines = wrap_to_width("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with('…'));
        assert!(lines[1].width() <= 9);
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap_to_width("supercalifragilistic", 6, 2), vec!["super…"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_to_width("", 10, 2).is_empty());
        assert!(wrap_to_width("text", 0, 2).is_empty());
    }
}
