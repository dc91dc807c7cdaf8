use std::io::{self, Write};
use crossterm::{cursor::MoveTo, queue, style::{ResetColor, SetForegroundColor}};

use crate::app::NavigationState;
use super::Theme;

const OVERLAY_WIDTH: u16 = 26;

/// State name, cursors and viewport in the top-right corner.
pub fn render_debug(out: &mut impl Write, state: &NavigationState, theme: &Theme) -> io::Result<()> {
    let col = state.viewport.0.saturating_sub(OVERLAY_WIDTH);
    let lines = [
        "DEBUG:".to_string(),
        format!("state: {}", state.screen),
        format!("selectedStack: {}", state.selected_stack),
        format!("selectedContainer: {}", state.selected_container),
        format!("viewport: {}x{}", state.viewport.0, state.viewport.1),
    ];

    queue!(out, SetForegroundColor(theme.danger))?;
    for (i, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(col, 2 + i as u16))?;
        write!(out, "{}", line)?;
    }
    queue!(out, ResetColor)
}
