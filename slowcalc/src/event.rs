//! Semantic input events.

use crate::operation::Operation;

/// One button press or key press, already stripped of toolkit details.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CalcEvent {
    /// A digit 0-9. Larger values are ignored by the engine.
    Digit(u8),
    Decimal,
    Operator(Operation),
    Solve,
    Clear,
    Invert,
    Backspace,
    Random,
}
