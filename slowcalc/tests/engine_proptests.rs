//! Property-based tests for the calculator engine

use proptest::prelude::*;
use slowcalc::{CalcEvent, Calculator, Operation};

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    proptest::sample::select(Operation::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = CalcEvent> {
    prop_oneof![
        4 => digit_strategy().prop_map(CalcEvent::Digit),
        1 => Just(CalcEvent::Decimal),
        2 => operator_strategy().prop_map(CalcEvent::Operator),
        1 => Just(CalcEvent::Solve),
        1 => Just(CalcEvent::Clear),
        1 => Just(CalcEvent::Invert),
        1 => Just(CalcEvent::Backspace),
        1 => Just(CalcEvent::Random),
    ]
}

fn type_number(calc: &mut Calculator, n: u64) {
    for c in n.to_string().chars() {
        calc.dispatch(CalcEvent::Digit(c.to_digit(10).unwrap() as u8));
    }
}

// ===== Typing =====

proptest! {
    /// Typed digits show up verbatim, minus any leading zeros
    #[test]
    fn prop_digits_display_as_typed(digits in prop::collection::vec(digit_strategy(), 1..16)) {
        let mut calc = Calculator::new();
        for d in &digits {
            calc.dispatch(CalcEvent::Digit(*d));
        }
        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.display_text(), expected);
    }

    /// However many decimal points are pressed, at most one lands
    #[test]
    fn prop_single_decimal_point(
        keys in prop::collection::vec(prop_oneof![
            digit_strategy().prop_map(CalcEvent::Digit),
            Just(CalcEvent::Decimal),
        ], 1..20)
    ) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.dispatch(key);
        }
        let current = calc.state().current().as_str();
        prop_assert!(current.matches('.').count() <= 1);
        prop_assert!(current.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    /// Backspace drains the operand to empty and then does nothing
    #[test]
    fn prop_backspace_drains(n in 0u64..10_000_000, extra in 0usize..4) {
        let mut calc = Calculator::new();
        type_number(&mut calc, n);
        for _ in 0..n.to_string().len() + extra {
            calc.dispatch(CalcEvent::Backspace);
        }
        prop_assert!(calc.state().current().is_empty());
        prop_assert_eq!(calc.display_text(), "0");
    }

    /// Changing sign twice restores the operand
    #[test]
    fn prop_invert_is_involution(n in 1u64..10_000_000, frac in prop::option::of(0u32..1000)) {
        let mut calc = Calculator::new();
        type_number(&mut calc, n);
        if let Some(frac) = frac {
            calc.dispatch(CalcEvent::Decimal);
            type_number(&mut calc, u64::from(frac));
        }
        let before = calc.state().current().clone();
        calc.dispatch(CalcEvent::Invert);
        prop_assert_ne!(calc.state().current(), &before);
        calc.dispatch(CalcEvent::Invert);
        prop_assert_eq!(calc.state().current(), &before);
    }
}

// ===== Arithmetic =====

proptest! {
    #[test]
    fn prop_integer_addition(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.dispatch(CalcEvent::Operator(Operation::Add));
        type_number(&mut calc, b);
        calc.dispatch(CalcEvent::Solve);
        prop_assert_eq!(calc.display_text(), (a + b).to_string());
    }

    /// Each extra solve adds the second operand again
    #[test]
    fn prop_repeated_solve(a in 0u64..1_000_000, b in 0u64..1_000, presses in 1u64..6) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.dispatch(CalcEvent::Operator(Operation::Add));
        type_number(&mut calc, b);
        for _ in 0..presses {
            calc.dispatch(CalcEvent::Solve);
        }
        prop_assert_eq!(calc.display_text(), (a + b * presses).to_string());
    }

    /// `a op b op2 c =` equals `(a op b) op2 c`
    #[test]
    fn prop_chained_operators_fold_left(a in 1u64..1000, b in 1u64..1000, c in 1u64..1000) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.dispatch(CalcEvent::Operator(Operation::Add));
        type_number(&mut calc, b);
        calc.dispatch(CalcEvent::Operator(Operation::Multiply));
        prop_assert_eq!(calc.display_text(), (a + b).to_string());
        type_number(&mut calc, c);
        calc.dispatch(CalcEvent::Solve);
        prop_assert_eq!(calc.display_text(), ((a + b) * c).to_string());
    }

    /// One-decimal sums never show binary roundoff
    #[test]
    fn prop_tenths_sum_is_clean(a in 0u32..1000, b in 0u32..1000) {
        let mut calc = Calculator::new();
        for (i, n) in [a, b].into_iter().enumerate() {
            type_number(&mut calc, u64::from(n / 10));
            calc.dispatch(CalcEvent::Decimal);
            type_number(&mut calc, u64::from(n % 10));
            if i == 0 {
                calc.dispatch(CalcEvent::Operator(Operation::Add));
            }
        }
        calc.dispatch(CalcEvent::Solve);
        let sum = a + b;
        let expected = if sum % 10 == 0 {
            (sum / 10).to_string()
        } else {
            format!("{}.{}", sum / 10, sum % 10)
        };
        prop_assert_eq!(calc.display_text(), expected);
    }
}

// ===== Robustness =====

proptest! {
    /// No sequence of events panics, and the display is never blank
    #[test]
    fn prop_any_sequence_is_safe(events in prop::collection::vec(event_strategy(), 0..64)) {
        let mut calc = Calculator::new();
        for event in events {
            calc.dispatch(event);
            prop_assert!(!calc.display_text().is_empty());
            prop_assert!(!calc.display_text().contains('-'));
        }
    }

    /// Clear resets everything no matter what came before
    #[test]
    fn prop_clear_restores_zero(events in prop::collection::vec(event_strategy(), 0..64)) {
        let mut calc = Calculator::new();
        for event in events {
            calc.dispatch(event);
        }
        calc.dispatch(CalcEvent::Clear);
        let fresh = Calculator::new();
        prop_assert_eq!(calc.display_text(), "0");
        prop_assert_eq!(calc.state(), fresh.state());
    }

    /// calculate() is a pure query
    #[test]
    fn prop_calculate_is_pure(events in prop::collection::vec(event_strategy(), 0..32)) {
        let mut calc = Calculator::new();
        for event in events {
            calc.dispatch(event);
        }
        let before = calc.state().clone();
        let first = calc.calculate();
        prop_assert_eq!(calc.state(), &before);
        prop_assert_eq!(calc.calculate(), first);
    }
}
