pub mod app;
pub mod config;
pub mod conversation;
pub mod display_mode;
pub mod exchange;
pub mod message;
pub mod text_wrapping;
