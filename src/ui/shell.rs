//! The themed frame around the conversation: display mode, derived theme and
//! the header bar with the logo and the mode toggle.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::display_mode::DisplayMode;
use crate::ui::layout::ChatLayout;
use crate::ui::theme::Theme;

pub const LOGO: &str = "◆ charla";

pub struct Shell {
    mode: DisplayMode,
    theme: Theme,
}

impl Shell {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            theme: Theme::for_mode(mode),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.theme = Theme::for_mode(self.mode);
    }
}

/// Glyph on the toggle control: the mode a click switches to.
pub fn toggle_glyph(mode: DisplayMode) -> &'static str {
    if mode.dark {
        "☀"
    } else {
        "☾"
    }
}

pub fn render_header(f: &mut Frame, layout: &ChatLayout, shell: &Shell) {
    let theme = shell.theme();

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(LOGO, theme.header_title_style),
    ]))
    .style(theme.header_style);
    f.render_widget(title, layout.header);

    let toggle = Paragraph::new(Line::from(Span::styled(
        format!("[{}]", toggle_glyph(shell.mode())),
        theme.toggle_style,
    )))
    .alignment(Alignment::Center)
    .style(theme.header_style);
    f.render_widget(toggle, layout.toggle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_rederives_theme() {
        let mut shell = Shell::new(DisplayMode::DARK);
        let original = shell.theme().clone();

        shell.toggle_mode();
        assert_eq!(shell.mode(), DisplayMode::LIGHT);
        assert_eq!(shell.theme(), &Theme::for_mode(DisplayMode::LIGHT));

        shell.toggle_mode();
        assert_eq!(shell.mode(), DisplayMode::DARK);
        assert_eq!(shell.theme(), &original);
    }

    #[test]
    fn glyph_reflects_mode() {
        assert_eq!(toggle_glyph(DisplayMode::DARK), "☀");
        assert_eq!(toggle_glyph(DisplayMode::LIGHT), "☾");
    }
}
