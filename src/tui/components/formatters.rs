// Text formatters
//
// Shared width-aware helpers for laying out page text. Widths are display
// columns (unicode-width), not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap text to fit within `width` columns
///
/// Words longer than the width get a line of their own rather than being
/// split. Empty input yields one empty line so callers keep vertical rhythm.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut result = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_line.is_empty() {
            current_line.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            // Word fits on current line (1 for space separator)
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
        } else {
            result.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_width = word_width;
        }
    }

    if !current_line.is_empty() || result.is_empty() {
        result.push(current_line);
    }
    result
}

/// Cut text to `width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad with spaces up to `width` columns
pub fn pad_to_width(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("build REST APIs with Spring Boot", 12);
        assert_eq!(lines, vec!["build REST", "APIs with", "Spring Boot"]);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap_text("see https://github.com/vanshbatham now", 10);
        assert_eq!(lines[1], "https://github.com/vanshbatham");
    }

    #[test]
    fn wrap_empty_gives_one_line() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Authentication", 6), "Authe…");
        assert_eq!(truncate_to_width("JWT", 6), "JWT");
        assert_eq!(truncate_to_width("Authentication", 6).width(), 6);
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }
}
