//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Width used by the detail view for title and description.
pub const DETAIL_WIDTH: usize = 30;

/// Labels at least this long are cut in the list view.
const LABEL_CUT_AT: usize = 33;
const LABEL_KEEP: usize = 30;

/// Pad to `width` terminal columns (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Shorten a list label to 30 characters plus `...` once it reaches 33.
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() >= LABEL_CUT_AT {
        let mut s: String = label.chars().take(LABEL_KEEP).collect();
        s.push_str("...");
        s
    } else {
        label.to_string()
    }
}

/// Greedy word wrap.
///
/// Newlines count as whitespace. A word longer than `max_width` is cut into
/// chunks of `max_width - 1` characters, each but the last ending with `-`.
/// Lengths are counted in chars; `max_width` below 2 is raised to 2.
pub fn wrap(text: &str, max_width: usize) -> String {
    let max_width = max_width.max(2);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }

            let chars: Vec<char> = word.chars().collect();
            let chunks: Vec<String> = chars
                .chunks(max_width - 1)
                .map(|c| c.iter().collect())
                .collect();
            let last = chunks.len() - 1;
            for (i, chunk) in chunks.into_iter().enumerate() {
                if i < last {
                    lines.push(format!("{chunk}-"));
                } else {
                    lines.push(chunk);
                }
            }
        } else if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + word_len + 1 <= max_width {
            line.push(' ');
            line.push_str(word);
            line_len += word_len + 1;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            line_len = word_len;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}
