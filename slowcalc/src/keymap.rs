//! Keyboard shortcuts.
//!
//! Printable keys are matched on the character they produce, so shifted
//! shortcuts (`Shift+8` for `*`, `Shift+6` for `^`, `Shift+/` for `?`,
//! `Shift+=` for `+`) work on any layout that produces those characters.

use crate::event::CalcEvent;
use crate::operation::Operation;

/// A key press as seen by the calculator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyInput {
    /// A printable character.
    Text(char),
    Enter,
    Escape,
    Backspace,
    /// The dedicated sign-change key (F9 on the desktop).
    Invert,
}

pub fn event_for_key(input: KeyInput) -> Option<CalcEvent> {
    match input {
        KeyInput::Enter => Some(CalcEvent::Solve),
        KeyInput::Escape => Some(CalcEvent::Clear),
        KeyInput::Backspace => Some(CalcEvent::Backspace),
        KeyInput::Invert => Some(CalcEvent::Invert),
        KeyInput::Text(c) => event_for_char(c),
    }
}

fn event_for_char(c: char) -> Option<CalcEvent> {
    if let Some(d) = c.to_digit(10) {
        return Some(CalcEvent::Digit(d as u8));
    }
    if let Some(op) = Operation::from_symbol(c) {
        return Some(CalcEvent::Operator(op));
    }
    match c {
        '.' | ',' => Some(CalcEvent::Decimal),
        '=' => Some(CalcEvent::Solve),
        '?' => Some(CalcEvent::Random),
        'c' | 'C' => Some(CalcEvent::Clear),
        _ => None,
    }
}
