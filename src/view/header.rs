use std::io::{self, Write};
use crossterm::{cursor::MoveTo, queue, style::{Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor}};

use crate::model::DirectorySnapshot;
use super::Theme;

pub fn render_header(
    out: &mut impl Write,
    directory: &DirectorySnapshot,
    viewport: (u16, u16),
    theme: &Theme,
) -> io::Result<()> {
    let width = viewport.0 as usize;
    let left = format!(
        " DOCKER STACK MANAGER | Active: {}/{} services",
        directory.active_services, directory.total_services
    );
    let right = format!("{} ", chrono::Local::now().format("%H:%M:%S"));
    let pad = width.saturating_sub(left.chars().count() + right.chars().count());

    queue!(
        out,
        MoveTo(0, 0),
        SetBackgroundColor(theme.primary),
        SetForegroundColor(theme.text),
        SetAttribute(Attribute::Bold)
    )?;
    write!(out, "{}{}{}", left, " ".repeat(pad), right)?;
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}
