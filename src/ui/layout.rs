use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Columns taken by the send control at the end of the input row.
pub const SEND_BUTTON_WIDTH: u16 = 10;
/// Columns taken by the mode toggle at the end of the header bar.
pub const TOGGLE_WIDTH: u16 = 5;
const INPUT_ROW_HEIGHT: u16 = 3;

/// Screen regions of the chat interface. Shared by the renderer and by mouse
/// hit testing so both agree on where each control is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    pub toggle: Rect,
    pub log_panel: Rect,
    /// Inside of the log panel's border.
    pub log: Rect,
    pub input: Rect,
    pub send: Rect,
}

/// A control the mouse can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Send,
    ToggleMode,
}

impl ChatLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(INPUT_ROW_HEIGHT),
            ])
            .split(area);

        let header_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
            .split(rows[0]);

        let input_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SEND_BUTTON_WIDTH)])
            .split(rows[2]);

        let log_panel = rows[1];
        let log = Rect {
            x: log_panel.x.saturating_add(1),
            y: log_panel.y.saturating_add(1),
            width: log_panel.width.saturating_sub(2),
            height: log_panel.height.saturating_sub(2),
        };

        Self {
            header: rows[0],
            toggle: header_cols[1],
            log_panel,
            log,
            input: input_cols[0],
            send: input_cols[1],
        }
    }

    /// Which control, if any, sits under the given cell.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        if self.send.contains(position) {
            Some(Control::Send)
        } else if self.toggle.contains(position) {
            Some(Control::ToggleMode)
        } else {
            None
        }
    }
}
