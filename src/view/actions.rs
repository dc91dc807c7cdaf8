use std::io::{self, Write};
use crossterm::{cursor::MoveTo, queue, style::{ResetColor, SetForegroundColor}};

use super::Theme;
use super::shared::{write_colored, write_title};

/// Centered box listing the stack actions.
pub fn render_action_menu(
    out: &mut impl Write,
    stack: &str,
    viewport: (u16, u16),
    theme: &Theme,
) -> io::Result<()> {
    let (width, height) = viewport;
    let title = format!("Actions for Stack: {}", stack);
    let options = [
        ("[R]", "Restart Stack"),
        ("[K]", "Kill Stack"),
        ("[L]", "View Logs"),
        ("[Esc/B]", "Back to Stack List"),
    ];

    let box_width = (width / 2).max(title.chars().count() as u16 + 6);
    let box_height = options.len() as u16 + 6;
    let left = width.saturating_sub(box_width) / 2;
    let top = 2 + height.saturating_sub(2 + box_height) / 2;
    let inner = box_width.saturating_sub(2) as usize;

    queue!(out, SetForegroundColor(theme.primary), MoveTo(left, top))?;
    write!(out, "╭{}╮", "─".repeat(inner))?;
    for r in 1..box_height - 1 {
        queue!(out, MoveTo(left, top + r))?;
        write!(out, "│{}│", " ".repeat(inner))?;
    }
    queue!(out, MoveTo(left, top + box_height - 1))?;
    write!(out, "╰{}╯", "─".repeat(inner))?;
    queue!(out, ResetColor)?;

    let title_col = left + (box_width.saturating_sub(title.chars().count() as u16)) / 2;
    write_title(out, title_col, top + 1, &title, theme)?;

    for (i, (key, label)) in options.iter().enumerate() {
        queue!(out, MoveTo(left + 4, top + 3 + i as u16))?;
        write_colored(out, key, theme.primary)?;
        write!(out, " {}", label)?;
    }

    Ok(())
}
