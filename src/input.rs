//! Terminal events mapped to game-level inputs (UI-agnostic).

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input actions read from the terminal once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Space: flap / confirm.
    Confirm,
    /// F11.
    ToggleFullscreen,
    /// Esc (only leaves fullscreen).
    ExitFullscreen,
    /// Pointer position in terminal cells.
    PointerMoved { col: u16, row: u16 },
    /// Primary-button press in terminal cells.
    PointerDown { col: u16, row: u16 },
    /// Any other printable key, used for control shortcuts.
    Hotkey(char),
}

pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        KeyCode::Char(' ') => Some(InputEvent::Confirm),
        KeyCode::F(11) => Some(InputEvent::ToggleFullscreen),
        KeyCode::Esc => Some(InputEvent::ExitFullscreen),
        KeyCode::Char(c) => Some(InputEvent::Hotkey(c)),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown { col, row }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(InputEvent::PointerMoved { col, row })
        }
        _ => None,
    }
}
