use std::io::{self, Write};

use crossterm::{cursor::MoveTo, queue, terminal::Clear, terminal::ClearType};

use crate::model::Screen;
use crate::view::{Presenter, Theme};

use super::NavigationState;

/// Draw one full frame for the current screen.
pub fn render(out: &mut impl Write, state: &NavigationState, theme: &Theme) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    if Presenter::render_size_guard(out, state.viewport, theme)? {
        return out.flush();
    }

    Presenter::render_header(out, &state.directory, state.viewport, theme)?;

    match state.screen {
        Screen::StackList => {
            Presenter::render_stack_list(
                out,
                &state.directory,
                state.selected_stack,
                &state.log_output,
                state.viewport,
                theme,
            )?;
        }
        Screen::ActionMenu => {
            if let Some(stack) = state.current_stack() {
                Presenter::render_action_menu(out, stack, state.viewport, theme)?;
            }
        }
        Screen::ContainerList => {
            Presenter::render_containers(
                out,
                state.current_stack().unwrap_or_default(),
                &state.containers,
                state.selected_container,
                &state.log_output,
                state.viewport,
                theme,
            )?;
        }
        Screen::ContainerLogs => {
            Presenter::render_container_logs(
                out,
                state.current_container(),
                &state.log_output,
                state.viewport,
                theme,
            )?;
        }
    }

    if state.debug {
        Presenter::render_debug(out, state, theme)?;
    }

    out.flush()
}
