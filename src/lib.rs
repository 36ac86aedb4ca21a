//! Charla is a small terminal chat client that forwards each message to a
//! webhook and shows the webhook's reply.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation log, the display mode, the webhook
//!   exchange and configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//! - [`api`] defines the webhook request and reply payloads.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which loads configuration, sets up logging
//! and dispatches into [`ui::chat_loop`] for interactive sessions.

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
