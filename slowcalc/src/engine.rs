//! Calculator engine.
//!
//! A small state machine over three operand slots and two operator slots.
//! Operators fold left to right (`3 + 4 *` shows `7`), and pressing solve
//! again with no new input repeats the last operation against the last
//! second operand.

use rand::Rng;

use crate::event::CalcEvent;
use crate::operand::{Operand, DECIMAL_POINT, MINUS};
use crate::operation::{Operation, MINUS_GLYPH};

/// Shown when nothing has been typed or stored.
pub const DEFAULT_DISPLAY_TEXT: &str = "0";
/// Upper bound on decimal places used when rounding sums and differences.
pub const MAX_PRECISION: usize = 15;
pub const OVERFLOW_MESSAGE: &str = "Overflow";
pub const UNDERFLOW_MESSAGE: &str = "Underflow";
/// `random()` yields an integer in `0..RANDOM_LIMIT`.
pub const RANDOM_LIMIT: u32 = 100;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    /// Left-hand operand of the pending operation, or the last result.
    stored: Operand,
    /// Operand being typed.
    current: Operand,
    /// Second operand of the last solve, replayed by repeated solves.
    repeated: Operand,
    operation: Operation,
    /// Operator of the last solve.
    operation_repeated: Operation,
}

impl CalculatorState {
    pub fn stored(&self) -> &Operand {
        &self.stored
    }

    pub fn current(&self) -> &Operand {
        &self.current
    }

    pub fn repeated(&self) -> &Operand {
        &self.repeated
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operation_repeated(&self) -> Operation {
        self.operation_repeated
    }

    /// A solve has completed and no new operator has been chosen since.
    fn just_solved(&self) -> bool {
        !self.stored.is_empty() && !self.operation.is_pending()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Perform the operation behind `event`.
    pub fn dispatch(&mut self, event: CalcEvent) {
        match event {
            CalcEvent::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => self.enter(c),
                None => tracing::trace!(digit = d, "ignoring out-of-range digit"),
            },
            CalcEvent::Decimal => self.enter(DECIMAL_POINT),
            CalcEvent::Operator(op) => self.operate(op),
            CalcEvent::Solve => self.solve(),
            CalcEvent::Clear => self.clear(),
            CalcEvent::Invert => self.invert(),
            CalcEvent::Backspace => self.backspace(),
            CalcEvent::Random => self.random(),
        }
        tracing::trace!(?event, display = %self.display_text(), "dispatched");
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// Typing right after a solve starts a new calculation.
    pub fn enter(&mut self, token: char) {
        if !self.state.current.accepts(token) {
            tracing::trace!(%token, current = %self.state.current, "rejected token");
            return;
        }
        if self.state.just_solved() {
            self.clear();
        }
        self.state.current.push(token);
    }

    pub fn backspace(&mut self) {
        self.state.current.pop();
    }

    /// Toggle the sign of whatever is on screen. If nothing is being typed,
    /// the stored operand is moved into the current slot first.
    pub fn invert(&mut self) {
        if self.state.current.is_empty() {
            self.state.current = std::mem::take(&mut self.state.stored);
        }
        self.state.current.toggle_sign();
    }

    pub fn random(&mut self) {
        self.random_with(&mut rand::thread_rng());
    }

    /// Replace the current operand with an integer drawn from `rng`.
    pub fn random_with<R: Rng>(&mut self, rng: &mut R) {
        let n: u32 = rng.gen_range(0..RANDOM_LIMIT);
        self.state.current = Operand::from_result(n.to_string());
    }

    /// Commit `operator`. With both operands present the pending operation
    /// is folded into the stored operand first.
    pub fn operate(&mut self, operator: Operation) {
        if !operator.is_pending() {
            tracing::trace!("ignoring empty operator");
            return;
        }
        if !self.state.current.is_empty() {
            if self.state.stored.is_empty() {
                self.state.stored = self.state.current.clone();
            } else {
                let folded = self.calculate();
                tracing::debug!(
                    stored = %self.state.stored,
                    current = %self.state.current,
                    operation = ?self.state.operation,
                    %folded,
                    "intermediate result"
                );
                self.state.stored = Operand::from_result(folded);
            }
        }
        self.state.current.clear();
        self.state.operation = operator;
    }

    pub fn solve(&mut self) {
        let state = &mut self.state;
        if !state.current.is_empty() {
            state.repeated = state.current.clone();
        }
        if state.operation.is_pending() {
            if !state.current.is_empty() {
                state.operation_repeated = state.operation;
            } else {
                // operator chosen but no operand typed: reuse the last one
                state.operation = state.operation_repeated;
            }
        }

        if !state.stored.is_empty() && (!state.current.is_empty() || !state.repeated.is_empty()) {
            let result = self.calculate();
            tracing::debug!(
                stored = %self.state.stored,
                operation = ?self.effective_operation(),
                %result,
                "solved"
            );
            self.state.stored = Operand::from_result(result);
            self.state.current.clear();
            self.state.operation = Operation::None;
        }
    }

    fn effective_operation(&self) -> Operation {
        if self.state.operation.is_pending() {
            self.state.operation
        } else {
            self.state.operation_repeated
        }
    }

    fn second_operand(&self) -> &Operand {
        if self.state.current.is_empty() {
            &self.state.repeated
        } else {
            &self.state.current
        }
    }

    /// Result of the pending (or last) operation as display-ready text.
    /// Does not change any state.
    pub fn calculate(&self) -> String {
        let first = &self.state.stored;
        let second = self.second_operand();
        let operation = self.effective_operation();

        let Some(result) = operation.apply(first.value(), second.value()) else {
            return DEFAULT_DISPLAY_TEXT.to_string();
        };
        let precision = operation.rounds_to_inputs().then(|| {
            first
                .decimal_places()
                .max(second.decimal_places())
                .min(MAX_PRECISION)
        });
        format_result(result, precision)
    }

    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    pub fn display_text(&self) -> String {
        let text = if !self.state.current.is_empty() {
            self.state.current.as_str()
        } else if !self.state.stored.is_empty() {
            self.state.stored.as_str()
        } else {
            DEFAULT_DISPLAY_TEXT
        };

        let mut shown = String::with_capacity(text.len() + 1);
        if text.starts_with(DECIMAL_POINT) {
            shown.push_str(DEFAULT_DISPLAY_TEXT);
        }
        shown.extend(text.chars().map(|c| if c == MINUS { MINUS_GLYPH } else { c }));
        shown
    }
}

/// Render a raw result. `round_to` is the number of decimal places sums and
/// differences are rounded to, to hide binary roundoff (`0.1 + 0.2`).
///
/// Results whose integer truncation saturates `i64` are reported as
/// `Overflow` / `Underflow`.
fn format_result(result: f64, round_to: Option<usize>) -> String {
    if result.is_nan() {
        return "NaN".to_string();
    }
    if result.is_infinite() {
        return if result > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `as` saturates at the i64 bounds
    let truncated = result as i64;
    if truncated == i64::MAX {
        return OVERFLOW_MESSAGE.to_string();
    }
    if truncated == i64::MIN {
        return UNDERFLOW_MESSAGE.to_string();
    }

    let mut result = result;
    if let Some(places) = round_to {
        if result != 0.0 {
            let scale = 10f64.powi(places as i32);
            result = (result * scale).round() / scale;
        }
    }

    if result % 1.0 == 0.0 {
        (result as i64).to_string()
    } else {
        result.to_string()
    }
}
