//! Operand text.
//!
//! Operands are kept as the text the user sees so that typing `1.50`
//! displays `1.50`, not `1.5`. Typed text is an optional leading `-`
//! followed by digits and at most one `.`; results written back by the
//! engine may also be `Overflow`, `Underflow`, `NaN` or `±Infinity`.

use std::fmt;

pub const DECIMAL_POINT: char = '.';
pub const MINUS: char = '-';

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Operand {
    text: String,
}

impl Operand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap text produced by the engine's result formatter.
    pub fn from_result(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Whether `c` may be appended: a digit, or a decimal point when there
    /// is none yet. A `0` onto a lone `"0"` is refused.
    pub fn accepts(&self, c: char) -> bool {
        match c {
            DECIMAL_POINT => !self.text.contains(DECIMAL_POINT),
            '0' => self.text != "0",
            c => c.is_ascii_digit(),
        }
    }

    /// Append `c` if [`accepts`](Self::accepts) allows it. A lone leading
    /// zero is replaced rather than extended. Returns whether the text changed.
    pub fn push(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        if self.text == "0" {
            self.text.clear();
        }
        self.text.push(c);
        true
    }

    /// Drop the last character; a single character leaves the operand empty.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn toggle_sign(&mut self) {
        if self.text.starts_with(MINUS) {
            self.text.remove(0);
        } else {
            self.text.insert(0, MINUS);
        }
    }

    /// Numeric value. Anything unparseable (empty, a lone `-` or `.`, the
    /// overflow markers) counts as zero.
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }

    /// Characters after the decimal point.
    pub fn decimal_places(&self) -> usize {
        self.text
            .find(DECIMAL_POINT)
            .map_or(0, |i| self.text.len() - i - 1)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
