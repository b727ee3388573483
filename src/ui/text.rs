//! Word wrapping and padding for styled text, measured in terminal columns.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap across differently styled runs. Whitespace inside a run
/// collapses to single spaces; a word wider than `width` gets its own line.
pub fn wrap_runs(runs: &[(&str, Style)], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    let mut prev_ends_space = true;

    for (text, style) in runs {
        if text.is_empty() {
            continue;
        }
        // Runs that meet without whitespace continue the same word.
        let mut glue = !prev_ends_space && !text.starts_with(char::is_whitespace);
        prev_ends_space = text.ends_with(char::is_whitespace);
        for word in text.split_whitespace() {
            let w = word.width();
            let sep = if used == 0 || glue { 0 } else { 1 };
            if used > 0 && used + sep + w > width {
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            } else if sep == 1 {
                current.push(Span::styled(" ", *style));
                used += 1;
            }
            current.push(Span::styled(word.to_string(), *style));
            used += w;
            glue = false;
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

pub fn wrap(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    wrap_runs(&[(text, style)], width)
}

/// Pad or truncate to exactly `width` columns.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Center `text` in `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        return fit(text, width);
    }
    let left = (width - w) / 2;
    fit(&format!("{}{}", " ".repeat(left), text), width)
}

#[cfg(test)]
pub fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
