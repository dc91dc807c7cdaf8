mod shared;
mod theme;
mod header;
mod stacks;
mod actions;
mod containers;
mod logs;
mod debug;

use std::io::{self, Write};
use crossterm::{cursor, queue, style::{ResetColor, SetForegroundColor}};

use crate::app::NavigationState;
use crate::model::{ContainerSummary, DirectorySnapshot};

pub use shared::{truncate_str, safe_truncate};
pub use theme::Theme;

pub struct Presenter;

/// Minimum terminal dimensions for usable rendering.
pub const MIN_COLS: u16 = 60;
pub const MIN_ROWS: u16 = 12;

impl Presenter {
    /// Check if the viewport is large enough. If not, render a "too small"
    /// message and return `true` (meaning "skip normal rendering").
    pub fn render_size_guard(out: &mut impl Write, viewport: (u16, u16), theme: &Theme) -> io::Result<bool> {
        let (cols, rows) = viewport;
        if cols < MIN_COLS || rows < MIN_ROWS {
            let msg = format!(
                "Terminal too small ({}x{}). Resize to at least {}x{}.",
                cols, rows, MIN_COLS, MIN_ROWS
            );
            let y = rows / 2;
            let x = cols.saturating_sub(msg.chars().count() as u16) / 2;
            queue!(out, cursor::MoveTo(x, y), SetForegroundColor(theme.warning))?;
            write!(out, "{}", msg)?;
            queue!(out, ResetColor)?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn render_header(
        out: &mut impl Write,
        directory: &DirectorySnapshot,
        viewport: (u16, u16),
        theme: &Theme,
    ) -> io::Result<()> {
        header::render_header(out, directory, viewport, theme)
    }

    pub fn render_stack_list(
        out: &mut impl Write,
        directory: &DirectorySnapshot,
        selected: usize,
        log_output: &str,
        viewport: (u16, u16),
        theme: &Theme,
    ) -> io::Result<()> {
        stacks::render_stack_list(out, directory, selected, log_output, viewport, theme)
    }

    pub fn render_action_menu(
        out: &mut impl Write,
        stack: &str,
        viewport: (u16, u16),
        theme: &Theme,
    ) -> io::Result<()> {
        actions::render_action_menu(out, stack, viewport, theme)
    }

    pub fn render_containers(
        out: &mut impl Write,
        stack: &str,
        containers: &[ContainerSummary],
        selected: usize,
        status_message: &str,
        viewport: (u16, u16),
        theme: &Theme,
    ) -> io::Result<()> {
        containers::render_containers(out, stack, containers, selected, status_message, viewport, theme)
    }

    pub fn render_container_logs(
        out: &mut impl Write,
        container: Option<&ContainerSummary>,
        log_output: &str,
        viewport: (u16, u16),
        theme: &Theme,
    ) -> io::Result<()> {
        logs::render_container_logs(out, container, log_output, viewport, theme)
    }

    pub fn render_debug(out: &mut impl Write, state: &NavigationState, theme: &Theme) -> io::Result<()> {
        debug::render_debug(out, state, theme)
    }
}
