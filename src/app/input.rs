use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

use crate::gateway::Gateway;
use crate::model::Screen;

use super::App;
use super::state::step_cursor;

/// Discrete input tokens the navigation core understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Enter,
    /// `a`: open the action menu
    Action,
    /// `r`
    Restart,
    /// `k`
    Kill,
    /// `l`
    Logs,
    /// `Esc`, `Backspace` or `b`
    Back,
    Quit,
    Resize(u16, u16),
}

impl Input {
    /// Map a terminal event to an input token. Key releases and unbound keys
    /// map to `None`.
    pub fn from_event(event: &Event) -> Option<Input> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(w, h) => Some(Input::Resize(*w, *h)),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Input> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Input::Quit);
        }

        match key.code {
            KeyCode::Up => Some(Input::Up),
            KeyCode::Down => Some(Input::Down),
            KeyCode::Enter => Some(Input::Enter),
            KeyCode::Esc | KeyCode::Backspace => Some(Input::Back),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'a' => Some(Input::Action),
                'r' => Some(Input::Restart),
                'k' => Some(Input::Kill),
                'l' => Some(Input::Logs),
                'b' => Some(Input::Back),
                'q' => Some(Input::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Result of handling an input: Quit the app, or input was consumed (needs render).
/// None means the input did not apply to the current screen and nothing changed.
#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    Quit,
    Consumed,
}

/// Apply one input to the app, running any gateway calls it triggers before
/// returning.
pub fn handle_input<G: Gateway>(app: &mut App<G>, input: Input) -> Option<InputResult> {
    match input {
        Input::Quit => return Some(InputResult::Quit),
        Input::Resize(w, h) => {
            app.state.viewport = (w, h);
            return Some(InputResult::Consumed);
        }
        _ => {}
    }

    let before = app.state.screen;
    let result = match before {
        Screen::StackList => handle_stack_list(app, input),
        Screen::ActionMenu => handle_action_menu(app, input),
        Screen::ContainerList => handle_container_list(app, input),
        Screen::ContainerLogs => handle_container_logs(app, input),
    };

    if app.state.screen != before {
        debug!(from = %before, to = %app.state.screen, "screen transition");
    }
    result
}

fn handle_stack_list<G: Gateway>(app: &mut App<G>, input: Input) -> Option<InputResult> {
    let len = app.state.stacks().len();
    match input {
        Input::Up | Input::Down => {
            if step_cursor(&mut app.state.selected_stack, len, input == Input::Down) {
                return Some(InputResult::Consumed);
            }
            None
        }
        Input::Enter => {
            let stack = app.state.current_stack()?.to_string();
            app.state.selected_container = 0;
            match app.directory.list_containers(&stack) {
                Ok(containers) => {
                    // Stack-level output does not carry over to the container table.
                    app.state.log_output.clear();
                    app.state.set_containers(containers);
                    app.state.screen = Screen::ContainerList;
                }
                Err(e) => {
                    warn!(stack = %stack, error = %e, "container listing failed");
                    app.state.log_output = format!("Error listing containers: {}", e);
                }
            }
            Some(InputResult::Consumed)
        }
        Input::Action => {
            app.state.current_stack()?;
            app.state.screen = Screen::ActionMenu;
            Some(InputResult::Consumed)
        }
        _ => None,
    }
}

fn handle_action_menu<G: Gateway>(app: &mut App<G>, input: Input) -> Option<InputResult> {
    let Some(stack) = app.state.current_stack().map(str::to_string) else {
        // Listing emptied underneath the menu; nothing to act on.
        app.state.screen = Screen::StackList;
        return Some(InputResult::Consumed);
    };

    match input {
        Input::Restart => {
            info!(stack = %stack, "restart requested");
            app.state.log_output = match app.directory.restart_stack(&stack) {
                Ok(()) => format!("Stack {} restarted successfully", stack),
                Err(e) => format!("Error restarting stack: {}", e),
            };
            app.state.screen = Screen::StackList;
        }
        Input::Kill => {
            info!(stack = %stack, "kill requested");
            match app.directory.kill_stack(&stack) {
                Ok(()) => {
                    app.state.log_output = format!("Stack {} killed successfully", stack);
                    refresh_directory(app);
                }
                Err(e) => {
                    app.state.log_output = format!("Error killing stack: {}", e);
                }
            }
            app.state.screen = Screen::StackList;
        }
        Input::Logs => {
            app.state.log_output = match app.directory.stack_logs(&stack) {
                Ok(logs) => logs,
                Err(e) => format!("Error retrieving logs: {}", e),
            };
            app.state.screen = Screen::StackList;
        }
        Input::Back => {
            app.state.screen = Screen::StackList;
        }
        _ => return None,
    }
    Some(InputResult::Consumed)
}

fn handle_container_list<G: Gateway>(app: &mut App<G>, input: Input) -> Option<InputResult> {
    let len = app.state.containers.len();
    match input {
        Input::Up | Input::Down => {
            if step_cursor(&mut app.state.selected_container, len, input == Input::Down) {
                return Some(InputResult::Consumed);
            }
            None
        }
        Input::Enter => {
            let id = app.state.current_container()?.id.clone();
            match app.directory.container_logs(&id) {
                Ok(logs) => {
                    app.state.log_output = logs;
                    app.state.screen = Screen::ContainerLogs;
                }
                Err(e) => {
                    warn!(container = %id, error = %e, "container logs failed");
                    app.state.log_output = format!("Error retrieving container logs: {}", e);
                }
            }
            Some(InputResult::Consumed)
        }
        Input::Back => {
            let report = app.directory.refresh_all_stats(app.state.stacks());
            let next = app.state.directory.with_report(report);
            app.state.replace_directory(next);
            app.state.screen = Screen::StackList;
            Some(InputResult::Consumed)
        }
        _ => None,
    }
}

fn handle_container_logs<G: Gateway>(app: &mut App<G>, input: Input) -> Option<InputResult> {
    match input {
        Input::Back => {
            app.state.log_output.clear();
            app.state.screen = Screen::ContainerList;
            Some(InputResult::Consumed)
        }
        _ => None,
    }
}

/// Reload stacks and counts after a destructive action. On failure the
/// previous listing stays on screen.
fn refresh_directory<G: Gateway>(app: &mut App<G>) {
    match app.directory.load() {
        Ok(snapshot) => app.state.replace_directory(snapshot),
        Err(e) => warn!(error = %e, "stack refresh failed; keeping previous listing"),
    }
}
