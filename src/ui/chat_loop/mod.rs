//! Main chat event loop and UI rendering
//!
//! This module owns the terminal for the length of a chat session: it sets
//! the terminal up, runs the event loop and restores the terminal on exit.

mod event_loop;
mod keybindings;
mod lifecycle;

use std::error::Error;

use crate::core::app::App;

use self::event_loop::run_event_loop;
use self::lifecycle::{restore_terminal, setup_terminal};

pub async fn run_chat(app: App) -> Result<(), Box<dyn Error>> {
    let mut terminal = setup_terminal()?;

    let result = run_event_loop(&mut terminal, app).await;

    // Restore even when the loop failed, then report the loop's error first.
    let restored = restore_terminal(&mut terminal);
    result?;
    restored
}
