use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::info;

use crate::gateway::Gateway;
use crate::view::Theme;

use super::input::{handle_input, Input, InputResult};
use super::{render, App};

/// How long to wait for a terminal event before re-checking the quit flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl<G: Gateway> App<G> {
    /// Process events one at a time until the user or a signal asks to quit.
    /// Gateway calls triggered by an event complete before the next event is read.
    pub(super) fn event_loop(
        &mut self,
        out: &mut impl Write,
        theme: &Theme,
        should_quit: &AtomicBool,
    ) -> io::Result<()> {
        let mut needs_render = true;

        loop {
            if should_quit.load(Ordering::Relaxed) {
                info!("quit signal received");
                break;
            }

            if needs_render {
                render::render(out, &self.state, theme)?;
                needs_render = false;
            }

            if !crossterm::event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Some(input) = Input::from_event(&crossterm::event::read()?) else {
                continue;
            };

            match handle_input(self, input) {
                Some(InputResult::Quit) => break,
                Some(InputResult::Consumed) => needs_render = true,
                None => {}
            }
        }

        Ok(())
    }
}
