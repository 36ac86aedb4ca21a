use crate::core::config::Config;
use crate::core::conversation::ConversationState;
use crate::core::display_mode::DisplayMode;
use crate::ui::shell::Shell;

pub mod actions;
pub mod ui_state;

#[cfg(test)]
mod tests;

pub use actions::{
    apply_action, apply_actions, AppAction, AppActionContext, AppActionDispatcher,
    AppActionEnvelope, AppCommand,
};
pub use ui_state::UiState;

/// Where and how messages are sent.
pub struct SessionContext {
    pub client: reqwest::Client,
    pub webhook_url: String,
}

/// Everything the event loop owns: the shell (display mode and theme), the
/// conversation and the presentation state around it.
pub struct App {
    pub session: SessionContext,
    pub shell: Shell,
    pub conversation: ConversationState,
    pub ui: UiState,
}

impl App {
    pub fn new(webhook_url: impl Into<String>, mode: DisplayMode) -> Self {
        let shell = Shell::new(mode);
        let ui = UiState::new(shell.theme());
        Self {
            session: SessionContext {
                client: reqwest::Client::new(),
                webhook_url: webhook_url.into(),
            },
            shell,
            conversation: ConversationState::new(),
            ui,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.webhook_url(), config.display_mode())
    }

    /// Flips light/dark and restyles everything derived from the theme.
    pub fn toggle_mode(&mut self) {
        self.shell.toggle_mode();
        self.ui.apply_theme(self.shell.theme());
    }
}
