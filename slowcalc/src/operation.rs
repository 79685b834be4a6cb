//! Binary operators.

/// Typographic minus used on screen in place of the ASCII hyphen.
pub const MINUS_GLYPH: char = '\u{2212}';

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    /// No operator pending.
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Glyph shown on the keypad.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
            Self::Power => "^",
        }
    }

    pub fn is_pending(self) -> bool {
        self != Self::None
    }

    /// Sums and differences are rounded back to the precision of their inputs.
    pub fn rounds_to_inputs(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// IEEE-754 arithmetic. Division by zero and invalid powers produce
    /// infinities or NaN rather than an error.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide => Some(a / b),
            Self::Power => Some(a.powf(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        let parsed: Vec<_> = "+-*/^".chars().filter_map(Operation::from_symbol).collect();
        assert_eq!(parsed, Operation::ALL);
        assert_eq!(Operation::from_symbol('%'), None);
        assert_eq!(Operation::from_symbol('x'), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(3.0, 4.0), Some(7.0));
        assert_eq!(Operation::Subtract.apply(3.0, 4.0), Some(-1.0));
        assert_eq!(Operation::Multiply.apply(3.0, 4.0), Some(12.0));
        assert_eq!(Operation::Divide.apply(3.0, 4.0), Some(0.75));
        assert_eq!(Operation::Power.apply(2.0, 10.0), Some(1024.0));
        assert_eq!(Operation::None.apply(1.0, 1.0), None);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0), Some(f64::INFINITY));
        assert_eq!(Operation::Divide.apply(-5.0, 0.0), Some(f64::NEG_INFINITY));
        assert!(Operation::Divide.apply(0.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_negative_base_fractional_power_is_nan() {
        assert!(Operation::Power.apply(-8.0, 0.5).unwrap().is_nan());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Subtract.label(), MINUS_GLYPH.to_string());
        assert_eq!(Operation::Multiply.label(), "×");
        assert_eq!(Operation::Divide.label(), "÷");
    }

    #[test]
    fn test_pending_and_rounding_flags() {
        assert!(!Operation::None.is_pending());
        assert!(Operation::Power.is_pending());
        assert!(Operation::Add.rounds_to_inputs());
        assert!(Operation::Subtract.rounds_to_inputs());
        assert!(!Operation::Multiply.rounds_to_inputs());
        assert!(!Operation::Divide.rounds_to_inputs());
    }
}
