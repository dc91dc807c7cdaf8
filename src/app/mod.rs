mod state;
mod event_loop;
mod render;
mod input;

use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, Clear, ClearType},
};
use tracing::info;

use crate::directory::StackDirectory;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::view::Theme;

pub use input::{handle_input, Input, InputResult};
pub use render::render;
pub use state::NavigationState;

/// Restore the terminal to normal mode. Safe to call multiple times.
pub fn restore_terminal() {
    let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Navigation core: the stack directory plus the state it drives.
pub struct App<G> {
    pub directory: StackDirectory<G>,
    pub state: NavigationState,
}

impl<G: Gateway> App<G> {
    /// Load stacks and counts eagerly. A listing failure here is fatal to the caller.
    pub fn new(directory: StackDirectory<G>, debug: bool) -> Result<Self, GatewayError> {
        let snapshot = directory.load()?;
        info!(
            stacks = snapshot.stacks.len(),
            containers = snapshot.total_services,
            "initial stack listing loaded"
        );
        Ok(Self {
            directory,
            state: NavigationState::new(snapshot, debug),
        })
    }
}

/// Run the application. Sets up terminal, runs the main loop, restores terminal on exit.
pub fn run<G: Gateway>(app: &mut App<G>, theme: &Theme, should_quit: Arc<AtomicBool>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;

    if let Ok((w, h)) = crossterm::terminal::size() {
        app.state.viewport = (w, h);
    }

    let result = app.event_loop(&mut stdout, theme, &should_quit);

    restore_terminal();
    result
}
