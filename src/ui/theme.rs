use crate::core::display_mode::DisplayMode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub const PRIMARY: Color = rgb(0x6200ee);
pub const SECONDARY: Color = rgb(0x03dac6);
pub const DARK_BACKGROUND: Color = rgb(0x121212);
pub const LIGHT_BACKGROUND: Color = rgb(0xf5f5f5);
const GREY_300: Color = rgb(0xe0e0e0);
const WHITE: Color = rgb(0xffffff);
const BLACK: Color = rgb(0x000000);
const LIGHT_TEXT: Color = rgb(0x212121);

/// Named colors shared by every style in a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
}

/// Shape and typography overrides applied on top of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeOverrides {
    pub panel_border: BorderType,
    pub button_border: BorderType,
    /// Button labels are shown as written unless this is set.
    pub uppercase_buttons: bool,
    pub title_modifier: Modifier,
}

impl Default for ShapeOverrides {
    fn default() -> Self {
        Self {
            panel_border: BorderType::Rounded,
            button_border: BorderType::Rounded,
            uppercase_buttons: false,
            title_modifier: Modifier::BOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: DisplayMode,
    pub palette: Palette,
    pub shapes: ShapeOverrides,

    // Header bar
    pub header_style: Style,
    pub header_title_style: Style,
    pub toggle_style: Style,

    // Message log
    pub log_style: Style,
    pub panel_border_style: Style,
    pub user_bubble_style: Style,
    pub bot_bubble_style: Style,
    pub user_marker_style: Style,
    pub bot_marker_style: Style,
    pub typing_style: Style,

    // Input row
    pub input_border_style: Style,
    pub input_text_style: Style,
    pub input_placeholder_style: Style,
    pub input_cursor_style: Style,
    pub send_button_style: Style,
    pub send_button_busy_style: Style,
}

impl Theme {
    /// Derives every style from the display mode. Equal modes always give
    /// equal themes.
    pub fn for_mode(mode: DisplayMode) -> Self {
        let palette = Palette {
            primary: PRIMARY,
            secondary: SECONDARY,
            background: if mode.dark {
                DARK_BACKGROUND
            } else {
                LIGHT_BACKGROUND
            },
            text: if mode.dark { WHITE } else { LIGHT_TEXT },
        };
        let shapes = ShapeOverrides::default();
        let base = Style::default().fg(palette.text).bg(palette.background);
        let header = Style::default().fg(WHITE).bg(palette.primary);
        let bot_bubble = Style::default().fg(BLACK).bg(GREY_300);

        Theme {
            mode,
            palette,
            shapes,

            header_style: header,
            header_title_style: header.add_modifier(shapes.title_modifier),
            toggle_style: header.add_modifier(Modifier::BOLD),

            log_style: base,
            panel_border_style: base.fg(if mode.dark { GREY_300 } else { LIGHT_TEXT }),
            user_bubble_style: Style::default().fg(WHITE).bg(palette.primary),
            bot_bubble_style: bot_bubble,
            user_marker_style: base.fg(palette.primary).add_modifier(Modifier::BOLD),
            bot_marker_style: base.fg(palette.secondary).add_modifier(Modifier::BOLD),
            typing_style: bot_bubble.add_modifier(Modifier::ITALIC),

            input_border_style: base.fg(palette.primary),
            input_text_style: base,
            input_placeholder_style: base.add_modifier(Modifier::DIM),
            input_cursor_style: base.add_modifier(Modifier::REVERSED),
            send_button_style: Style::default()
                .fg(WHITE)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
            send_button_busy_style: Style::default().fg(BLACK).bg(palette.secondary),
        }
    }

    /// Applies the button typography override to a label.
    pub fn button_label(&self, label: &str) -> String {
        if self.shapes.uppercase_buttons {
            label.to_uppercase()
        } else {
            label.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(DisplayMode::default())
    }
}
