//! Width-aware string helpers shared by the components.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Wrapping options that match how `Paragraph` breaks lines.
pub fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Display width of `s` in terminal columns.
pub fn width(s: &str) -> u16 {
    s.width().min(u16::MAX as usize) as u16
}

/// Cut `s` to at most `max` columns, ending in `…` when anything was dropped.
pub fn truncate(s: &str, max: u16) -> String {
    let max = max as usize;
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Wrap `s` to `width` columns, keeping at most `max_lines`. The last kept
/// line is ellipsized when text was dropped.
pub fn wrap_clamped(s: &str, width: u16, max_lines: usize) -> Vec<String> {
    if max_lines == 0 || width == 0 {
        return vec![];
    }
    let lines = textwrap::wrap(s, wrap_options(width));
    let overflow = lines.len() > max_lines;
    let mut out: Vec<String> = lines
        .into_iter()
        .take(max_lines)
        .map(|l| l.into_owned())
        .collect();
    if overflow && let Some(last) = out.last_mut() {
        let shortened = truncate(last, width.saturating_sub(1));
        *last = if shortened.ends_with(ELLIPSIS) {
            shortened
        } else {
            format!("{shortened}{ELLIPSIS}")
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Tokyo", 10), "Tokyo");
        assert_eq!(truncate("Tokyo", 5), "Tokyo");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("Shanghai", 5), "Shan…");
        assert_eq!(truncate("Shanghai", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // Each CJK character takes two columns.
        assert_eq!(truncate("检票口检票口", 5), "检票…");
    }

    #[test]
    fn wrap_clamped_limits_lines() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_clamped(text, 10, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
        assert!(lines.iter().all(|l| width(l) <= 10));
    }

    #[test]
    fn wrap_clamped_fits_without_ellipsis() {
        let lines = wrap_clamped("short text", 20, 3);
        assert_eq!(lines, vec!["short text".to_string()]);
    }
}
