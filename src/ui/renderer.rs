use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::app::App;
use crate::core::conversation::ConversationState;
use crate::core::message::{Message, Sender, TYPING_PLACEHOLDER_TEXT};
use crate::core::text_wrapping::TextWrapper;
use crate::ui::layout::ChatLayout;
use crate::ui::shell::render_header;
use crate::ui::theme::Theme;

const BOT_MARKER: &str = "● ";
const USER_MARKER: &str = " ●";
const SEND_LABEL: &str = "Enviar";

/// Draws the whole interface. Reads `app` only.
pub fn ui(f: &mut Frame, app: &App) {
    let theme = app.shell.theme();
    f.render_widget(Block::default().style(theme.log_style), f.area());

    let layout = ChatLayout::new(f.area());
    render_header(f, &layout, &app.shell);
    render_conversation(f, &layout, app, theme);
}

fn render_conversation(f: &mut Frame, layout: &ChatLayout, app: &App, theme: &Theme) {
    let panel = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.shapes.panel_border)
        .border_style(theme.panel_border_style)
        .style(theme.log_style);
    f.render_widget(panel, layout.log_panel);

    let lines = build_log_lines(&app.conversation, theme, layout.log.width);
    let offset = app.ui.scroll.offset(lines.len(), layout.log.height);
    let log = Paragraph::new(lines)
        .style(theme.log_style)
        .scroll((offset, 0));
    f.render_widget(log, layout.log);

    f.render_widget(app.ui.textarea(), layout.input);

    let button_style = if app.conversation.awaiting_response() {
        theme.send_button_busy_style
    } else {
        theme.send_button_style
    };
    let send = Paragraph::new(theme.button_label(SEND_LABEL))
        .alignment(Alignment::Center)
        .style(button_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.shapes.button_border)
                .border_style(button_style),
        );
    f.render_widget(send, layout.send);
}

/// Lays the log out as pre-wrapped rows for a log area `width` columns wide:
/// user bubbles on the right, bot bubbles on the left behind a marker, a blank
/// row after each message, and the typing bubble last while a reply is
/// pending.
pub fn build_log_lines(
    conversation: &ConversationState,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for message in conversation.messages() {
        push_bubble(&mut lines, message, bubble_style(message.sender, theme), theme, width);
    }

    if conversation.awaiting_response() {
        let placeholder = Message::bot(TYPING_PLACEHOLDER_TEXT);
        push_bubble(&mut lines, &placeholder, theme.typing_style, theme, width);
    }

    lines
}

fn bubble_style(sender: Sender, theme: &Theme) -> Style {
    match sender {
        Sender::User => theme.user_bubble_style,
        Sender::Bot => theme.bot_bubble_style,
    }
}

fn push_bubble(
    lines: &mut Vec<Line<'static>>,
    message: &Message,
    style: Style,
    theme: &Theme,
    width: u16,
) {
    // Bubbles take at most three quarters of the row, one column of padding
    // on each side of the text. The marker sits outside the bubble.
    let max_bubble = (usize::from(width) * 3 / 4).max(3);
    let text_width = max_bubble - 2;
    let rows = TextWrapper::wrap_lines(&message.text, text_width);
    let inner = TextWrapper::max_row_width(&rows);

    for (i, row) in rows.iter().enumerate() {
        let padding = " ".repeat(inner.saturating_sub(row.width()));
        let bubble = Span::styled(format!(" {row}{padding} "), style);

        // Markers sit on the first row only, on the sender's side.
        let marker_span = |text: &'static str, marker_style: Style| {
            if i == 0 {
                Span::styled(text, marker_style)
            } else {
                Span::raw(" ".repeat(text.width()))
            }
        };
        let line = match message.sender {
            Sender::User => {
                let marker = marker_span(USER_MARKER, theme.user_marker_style);
                Line::from(vec![bubble, marker]).alignment(Alignment::Right)
            }
            Sender::Bot => {
                let marker = marker_span(BOT_MARKER, theme.bot_marker_style);
                Line::from(vec![marker, bubble]).alignment(Alignment::Left)
            }
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
}
