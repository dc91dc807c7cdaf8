use std::io::{self, Write};
use std::ops::Range;
use crossterm::{cursor::MoveTo, queue, style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor}};

use super::Theme;

/// Truncate a string to at most `max_len` characters (not bytes), appending "..."
/// if truncated. Safe for multi-byte UTF-8.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(keep).collect();
        format!("{}...", truncated)
    }
}

/// Truncate a string to at most `max_len` bytes for display. Returns a &str
/// slice up to the last valid char boundary within `max_len` bytes.
pub fn safe_truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// The last `n` lines of `text`. A trailing newline does not count as an empty line.
pub fn tail_lines(text: &str, n: usize) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].to_vec()
}

/// Index range of a list that fits in `rows`, keeping `selected` roughly centred.
pub fn visible_window(selected: usize, len: usize, rows: usize) -> Range<usize> {
    if len <= rows {
        return 0..len;
    }
    let start = selected.saturating_sub(rows / 2).min(len - rows);
    start..start + rows
}

pub fn write_at(out: &mut impl Write, col: u16, row: u16, text: &str) -> io::Result<()> {
    queue!(out, MoveTo(col, row))?;
    write!(out, "{}", text)
}

pub fn write_colored(out: &mut impl Write, text: &str, color: Color) -> io::Result<()> {
    queue!(out, SetForegroundColor(color))?;
    write!(out, "{}", text)?;
    queue!(out, ResetColor)
}

pub fn write_title(out: &mut impl Write, col: u16, row: u16, text: &str, theme: &Theme) -> io::Result<()> {
    queue!(out, MoveTo(col, row), SetAttribute(Attribute::Bold), SetForegroundColor(theme.highlight))?;
    write!(out, "{}", text)?;
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))
}

/// Write a list row; the selected one is bold in the primary color.
pub fn write_selectable(out: &mut impl Write, col: u16, row: u16, text: &str, selected: bool, theme: &Theme) -> io::Result<()> {
    queue!(out, MoveTo(col, row))?;
    if selected {
        queue!(out, SetAttribute(Attribute::Bold), SetForegroundColor(theme.primary))?;
    } else {
        queue!(out, SetForegroundColor(theme.text))?;
    }
    write!(out, "{}", text)?;
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))
}

/// Footer line pinned to the bottom row.
pub fn write_footer(out: &mut impl Write, viewport: (u16, u16), text: &str, theme: &Theme) -> io::Result<()> {
    let help_y = viewport.1.saturating_sub(1);
    queue!(out, MoveTo(1, help_y), SetForegroundColor(theme.subtext))?;
    write!(out, "{}", safe_truncate(text, viewport.0.saturating_sub(2) as usize))?;
    queue!(out, ResetColor)
}

/// Horizontal rule with an embedded title, e.g. `── Output Log ─────`.
pub fn write_rule(out: &mut impl Write, row: u16, width: u16, title: &str, color: Color) -> io::Result<()> {
    let label = format!("── {} ", title);
    let rest = (width as usize).saturating_sub(label.chars().count());
    queue!(out, MoveTo(0, row), SetForegroundColor(color))?;
    write!(out, "{}{}", label, "─".repeat(rest))?;
    queue!(out, ResetColor)
}
