//! deskcalc - pocket calculator and counter widgets
//!
//! Both widgets are plain state machines driven by discrete actions. The
//! presentation layer (terminal, web, native) stays outside this crate;
//! it only forwards button presses and reads back the readout.
//!
//! # Calculator semantics
//!
//! - One pending binary operation; operators chain left to right with no
//!   precedence (`1 + 2 * 3 =` gives 9)
//! - Division by zero is not guarded: the display reads `Infinity` or `NaN`
//! - `=` with nothing pending does nothing
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut calc = Evaluator::new();
//! calc.enter_digit(Digit::ALL[5]);
//! calc.select_operator(Operation::Add);
//! calc.enter_digit(Digit::ALL[3]);
//! calc.equals();
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history(), "5 + 3");
//!
//! // Or drive it with a script
//! let mut session = CalculatorSession::new();
//! let readout = replay(&mut session, parse_calculator_script("6 / 0 =").unwrap());
//! assert_eq!(readout.display, "Infinity");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{Evaluator, EvaluatorState, Snapshot};
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{
        format_number, parse_display, Counter, Digit, Operation, WidgetError, WidgetResult,
    };
    pub use crate::driver::{
        parse_calculator_script, parse_counter_script, replay, CalculatorSession, Readout, Widget,
    };
    pub use crate::keypad::{CounterAction, Keypad, KeypadAction, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::input::{InputHandler, KeyAction};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn press(calc: &mut Evaluator, keys: &str) {
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            calc.dispatch(KeypadAction::try_from(c).unwrap());
        }
    }

    #[test]
    fn test_prelude_imports() {
        let mut calc = Evaluator::new();
        press(&mut calc, "2 + 3 =");
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_no_precedence() {
        let mut calc = Evaluator::new();
        press(&mut calc, "1 + 2 * 3 =");
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn test_all_operations() {
        let cases = [
            ("10 + 5 =", "15"),
            ("10 - 3 =", "7"),
            ("6 * 7 =", "42"),
            ("20 / 4 =", "5"),
            ("1 / 4 =", "0.25"),
            ("0.1 + 0.2 =", "0.30000000000000004"),
            ("5 + .5 =", "5.5"),
        ];
        for (keys, expected) in cases {
            let mut calc = Evaluator::new();
            press(&mut calc, keys);
            assert_eq!(calc.display(), expected, "{keys}");
        }
    }

    #[test]
    fn test_counter_from_prelude() {
        let mut counter = Counter::new();
        counter.increment();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_keypad_legend_mentions_clear() {
        assert!(Keypad::new().legend().contains("Clear"));
    }
}
