use std::io::{self, Write};
use crossterm::{cursor::MoveTo, queue};

use crate::model::DirectorySnapshot;
use super::Theme;
use super::shared::{
    safe_truncate, tail_lines, visible_window, write_at, write_colored, write_rule, write_selectable,
    write_title,
};

const MIN_STACK_WIDTH: u16 = 40;
const FIRST_STACK_ROW: u16 = 4;

pub fn render_stack_list(
    out: &mut impl Write,
    directory: &DirectorySnapshot,
    selected: usize,
    log_output: &str,
    viewport: (u16, u16),
    theme: &Theme,
) -> io::Result<()> {
    let (width, height) = viewport;
    let stack_width = (width * 2 / 3).max(MIN_STACK_WIDTH);

    // The output panel is pinned to the bottom; the stack rows get what is left.
    let panel = if log_output.is_empty() {
        Vec::new()
    } else {
        tail_lines(log_output, (height / 3).max(1) as usize)
    };
    let panel_top = if panel.is_empty() {
        height
    } else {
        height.saturating_sub(panel.len() as u16 + 1)
    };
    let list_rows = panel_top.saturating_sub(FIRST_STACK_ROW + 3) as usize;

    write_title(out, 2, 2, "Docker Stacks", theme)?;
    let mut row = FIRST_STACK_ROW;

    if directory.stacks.is_empty() {
        write_selectable(out, 2, row, "No stacks found", false, theme)?;
        row += 1;
    }

    for idx in visible_window(selected, directory.stacks.len(), list_rows) {
        let stack = &directory.stacks[idx];
        let is_selected = idx == selected;
        let stats = directory.stats_for(stack);
        let prefix = if is_selected { "❯ " } else { "  " };

        write_selectable(out, 2, row, &format!("{}{} ", prefix, stack), is_selected, theme)?;
        write!(out, "[")?;
        write_colored(out, "●", theme.success)?;
        write!(out, " {} • ", stats.running)?;
        write_colored(out, "●", theme.danger)?;
        write!(out, " {} • ", stats.stopped)?;
        write_colored(out, "●", theme.warning)?;
        write!(out, " {}]", stats.other)?;
        row += 1;
    }

    queue!(out, MoveTo(2, row + 1))?;
    write_colored(out, "Press 'A' for actions, 'Enter' to view containers", theme.subtext)?;

    render_help(out, stack_width + 2, theme)?;

    if !panel.is_empty() {
        write_rule(out, panel_top, width, "Output Log", theme.accent)?;
        for (i, line) in panel.iter().enumerate() {
            write_at(out, 2, panel_top + 1 + i as u16, safe_truncate(line, width.saturating_sub(4) as usize))?;
        }
    }

    Ok(())
}

fn render_help(out: &mut impl Write, col: u16, theme: &Theme) -> io::Result<()> {
    write_title(out, col, 2, "Keyboard Controls", theme)?;
    let entries = [
        ("↑/↓", "Navigate stacks"),
        ("Enter", "View containers"),
        ("A", "Action menu"),
        ("Esc/B", "Back/Escape"),
        ("Q", "Quit application"),
    ];
    for (i, (keys, label)) in entries.iter().enumerate() {
        queue!(out, MoveTo(col, 4 + i as u16))?;
        write_colored(out, keys, theme.primary)?;
        write!(out, " {}", label)?;
    }
    Ok(())
}
