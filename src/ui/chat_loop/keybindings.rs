//! Key and mouse bindings for the chat screen.
//!
//! Keys without a binding are editing keys and go to the input field.

use std::collections::HashMap;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::layout::{ChatLayout, Control};

const PAGE_LINES: u16 = 10;
const WHEEL_LINES: u16 = 3;

/// What a bound key or click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Submit,
    ToggleMode,
    ScrollUp(u16),
    ScrollDown(u16),
    Quit,
}

/// Pattern for matching key events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyPattern {
    pub fn simple(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    fn from_event(key: &KeyEvent) -> Self {
        // Shift is implied by the character itself for printable keys.
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self {
            code: key.code,
            modifiers,
        }
    }
}

pub struct KeyBindings {
    bindings: HashMap<KeyPattern, Binding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyPattern::simple(KeyCode::Enter), Binding::Submit),
            (KeyPattern::ctrl(KeyCode::Char('t')), Binding::ToggleMode),
            (KeyPattern::simple(KeyCode::F(2)), Binding::ToggleMode),
            (KeyPattern::simple(KeyCode::Up), Binding::ScrollUp(1)),
            (KeyPattern::simple(KeyCode::Down), Binding::ScrollDown(1)),
            (KeyPattern::simple(KeyCode::PageUp), Binding::ScrollUp(PAGE_LINES)),
            (KeyPattern::simple(KeyCode::PageDown), Binding::ScrollDown(PAGE_LINES)),
            (KeyPattern::ctrl(KeyCode::Char('c')), Binding::Quit),
            (KeyPattern::simple(KeyCode::Esc), Binding::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn resolve_key(&self, key: &KeyEvent) -> Option<Binding> {
        self.bindings.get(&KeyPattern::from_event(key)).copied()
    }
}

pub fn resolve_mouse(event: &MouseEvent, layout: &ChatLayout) -> Option<Binding> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match layout.control_at(event.column, event.row)? {
                Control::Send => Some(Binding::Submit),
                Control::ToggleMode => Some(Binding::ToggleMode),
            }
        }
        MouseEventKind::ScrollUp => Some(Binding::ScrollUp(WHEEL_LINES)),
        MouseEventKind::ScrollDown => Some(Binding::ScrollDown(WHEEL_LINES)),
        _ => None,
    }
}
