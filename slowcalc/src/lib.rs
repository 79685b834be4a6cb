//! slowcalc — the calculator engine behind the Slow Computer calculator.
//!
//! The engine is toolkit-free: a UI feeds it [`CalcEvent`]s and reads
//! [`Calculator::display_text`] back after every call.

pub mod config;
pub mod engine;
pub mod event;
pub mod keymap;
pub mod keypad;
pub mod operand;
pub mod operation;

pub use config::CalcConfig;
pub use engine::{Calculator, CalculatorState};
pub use event::CalcEvent;
pub use keymap::{event_for_key, KeyInput};
pub use keypad::{KeypadButton, KEYPAD};
pub use operand::Operand;
pub use operation::Operation;
