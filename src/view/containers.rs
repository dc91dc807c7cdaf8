use std::io::{self, Write};
use crossterm::{cursor, queue, style::{Attribute, ResetColor, SetAttribute, SetForegroundColor}};

use crate::model::ContainerSummary;
use super::Theme;
use super::shared::{
    safe_truncate, truncate_str, visible_window, write_footer, write_selectable, write_title,
};

pub fn render_containers(
    out: &mut impl Write,
    stack: &str,
    containers: &[ContainerSummary],
    selected: usize,
    status_message: &str,
    viewport: (u16, u16),
    theme: &Theme,
) -> io::Result<()> {
    let width = viewport.0;
    write_title(out, 2, 2, &format!("Containers in {}", stack), theme)?;
    let mut row: u16 = 4;

    if containers.is_empty() {
        write_selectable(out, 2, row, "No containers found for this stack", false, theme)?;
        row += 1;
    } else {
        // Column header
        queue!(out, cursor::MoveTo(2, row), SetAttribute(Attribute::Bold), SetForegroundColor(theme.highlight))?;
        write!(out, "  {:<20} {:<15} {:<12} {:<20}", "NAME", "STATUS", "ID", "IMAGE")?;
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
        row += 1;
        queue!(out, cursor::MoveTo(2, row))?;
        write!(out, "  {:<20} {:<15} {:<12} {:<20}",
            "━".repeat(18), "━".repeat(12), "━".repeat(10), "━".repeat(18))?;
        row += 1;

        // Table header, status message and footer take the remaining rows.
        let rows = viewport.1.saturating_sub(row + 3) as usize;
        for idx in visible_window(selected, containers.len(), rows) {
            let c = &containers[idx];
            let is_selected = idx == selected;
            let prefix = if is_selected { "❯ " } else { "  " };

            write_selectable(out, 2, row, &format!("{}{:<20} ", prefix, truncate_str(&c.name, 18)), is_selected, theme)?;
            queue!(out, SetForegroundColor(theme.state_color(&c.state)), SetAttribute(Attribute::Bold))?;
            write!(out, "{:<15}", truncate_str(&c.state, 15))?;
            queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
            write!(out, " {:<12} {:<20}", c.short_id(), truncate_str(&c.image, 18))?;
            row += 1;
        }
    }

    // Last failed container-log fetch, if any
    if !status_message.is_empty() {
        row += 1;
        queue!(out, cursor::MoveTo(2, row), SetForegroundColor(theme.warning))?;
        let first = status_message.lines().next().unwrap_or_default();
        write!(out, "{}", safe_truncate(first, width.saturating_sub(4) as usize))?;
        queue!(out, ResetColor)?;
    }

    write_footer(out, viewport, "Press Enter to view container logs, Esc/B to go back", theme)
}
