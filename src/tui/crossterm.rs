//! crossterm → [`InputEvent`] conversion.

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::event as ct;

pub fn into_input_event(event: ct::Event) -> InputEvent {
    match event {
        ct::Event::Key(key) => InputEvent::Key(into_key_event(key)),
        ct::Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        ct::Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    }
}

pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let code = match event.code {
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        _ => KeyCode::Unknown,
    };
    let kind = match event.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };
    KeyEvent {
        code,
        modifiers: into_key_modifiers(event.modifiers),
        kind,
    }
}

fn into_key_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if mods.contains(ct::KeyModifiers::SHIFT) {
        out.insert(KeyModifiers::SHIFT);
    }
    if mods.contains(ct::KeyModifiers::CONTROL) {
        out.insert(KeyModifiers::CONTROL);
    }
    if mods.contains(ct::KeyModifiers::ALT) {
        out.insert(KeyModifiers::ALT);
    }
    out
}

pub fn into_mouse_event(event: ct::MouseEvent) -> MouseEvent {
    let button = |b: ct::MouseButton| match b {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    };
    let kind = match event.kind {
        ct::MouseEventKind::Down(b) => MouseEventKind::Down(button(b)),
        ct::MouseEventKind::Up(b) => MouseEventKind::Up(button(b)),
        ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(button(b)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        _ => MouseEventKind::Scroll,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
