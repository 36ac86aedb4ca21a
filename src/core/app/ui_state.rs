use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::ui::theme::Theme;
use crate::utils::scroll::ScrollState;

pub const INPUT_PLACEHOLDER: &str = "Escribe tu mensaje aquí...";

/// Presentation-only state: the input widget, the log scroll position and the
/// exit flag. Nothing here is part of the conversation itself.
pub struct UiState {
    textarea: TextArea<'static>,
    pub scroll: ScrollState,
    pub exit_requested: bool,
}

impl UiState {
    pub fn new(theme: &Theme) -> Self {
        let mut ui = Self {
            textarea: TextArea::default(),
            scroll: ScrollState::default(),
            exit_requested: false,
        };
        ui.apply_theme(theme);
        ui
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Current contents of the input field.
    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Runs an edit against the input field and returns its new contents.
    pub fn apply_textarea_edit<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.textarea);
        self.input_text()
    }

    pub fn clear_input(&mut self, theme: &Theme) {
        self.textarea = TextArea::default();
        self.apply_theme(theme);
    }

    /// Restyles the input field; called at startup and on every mode toggle.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.textarea.set_style(theme.input_text_style);
        self.textarea.set_cursor_style(theme.input_cursor_style);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        self.textarea.set_placeholder_style(theme.input_placeholder_style);
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.shapes.panel_border)
                .border_style(theme.input_border_style)
                .style(theme.input_text_style),
        );
    }
}
