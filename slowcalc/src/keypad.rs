//! On-screen keypad layout.
//!
//! ```text
//! C  ±  ^  ÷
//! 7  8  9  ×
//! 4  5  6  −
//! 1  2  3  +
//! ?  0  .  =
//! ```

use crate::event::CalcEvent;
use crate::operation::Operation;

pub const KEYPAD_ROWS: usize = 5;
pub const KEYPAD_COLUMNS: usize = 4;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct KeypadButton {
    pub label: &'static str,
    pub event: CalcEvent,
}

const fn button(label: &'static str, event: CalcEvent) -> KeypadButton {
    KeypadButton { label, event }
}

const fn digit(label: &'static str, d: u8) -> KeypadButton {
    button(label, CalcEvent::Digit(d))
}

const fn op(operation: Operation) -> KeypadButton {
    button(operation.label(), CalcEvent::Operator(operation))
}

pub const KEYPAD: [[KeypadButton; KEYPAD_COLUMNS]; KEYPAD_ROWS] = [
    [
        button("C", CalcEvent::Clear),
        button("\u{00b1}", CalcEvent::Invert),
        op(Operation::Power),
        op(Operation::Divide),
    ],
    [digit("7", 7), digit("8", 8), digit("9", 9), op(Operation::Multiply)],
    [digit("4", 4), digit("5", 5), digit("6", 6), op(Operation::Subtract)],
    [digit("1", 1), digit("2", 2), digit("3", 3), op(Operation::Add)],
    [
        button("?", CalcEvent::Random),
        digit("0", 0),
        button(".", CalcEvent::Decimal),
        button("=", CalcEvent::Solve),
    ],
];

/// Grid position `(row, column)` of the button that fires `event`.
pub fn find(event: CalcEvent) -> Option<(usize, usize)> {
    KEYPAD.iter().enumerate().find_map(|(row, buttons)| {
        buttons
            .iter()
            .position(|b| b.event == event)
            .map(|col| (row, col))
    })
}
