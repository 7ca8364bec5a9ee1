//! Core widget state machines
//!
//! The calculator evaluator, the counter, and the small value types they
//! share: operations, digits, display-number formatting and the tape of
//! completed equations.

mod counter;
pub mod evaluator;
mod operations;
pub mod tape;

pub use counter::Counter;
pub use operations::Operation;

use thiserror::Error;

/// Result type for widget input parsing
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors raised while turning raw input into widget actions.
///
/// The state machines themselves never fail; these only surface at the
/// edges where characters and script tokens are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A character with no keypad meaning
    #[error("unknown key '{0}'")]
    UnknownKey(char),
    /// A script token with no widget meaning
    #[error("unknown token '{0}'")]
    UnknownToken(String),
    /// A digit value outside 0-9
    #[error("invalid digit {0}: expected 0-9")]
    InvalidDigit(u8),
}

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Every digit, indexed by value
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, returning `None` above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = WidgetError;

    fn try_from(value: u8) -> WidgetResult<Self> {
        Self::new(value).ok_or(WidgetError::InvalidDigit(value))
    }
}

impl TryFrom<char> for Digit {
    type Error = WidgetError;

    fn try_from(c: char) -> WidgetResult<Self> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(WidgetError::UnknownKey(c))
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a number the way a pocket display shows it.
///
/// Integral values have no fraction, `-0` reads `0`, non-finite values
/// read `Infinity`/`-Infinity`/`NaN`, and very large or very small
/// magnitudes switch to exponent form with an explicit sign (`1e+21`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        return "0".into();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }

    format!("{value}")
}

/// Reads a display string back into a number.
///
/// Accepts everything [`format_number`] produces plus partial entries
/// such as `"5."`. Unparsable text reads as NaN.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    match text {
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        "NaN" => f64::NAN,
        _ => text.parse().unwrap_or(f64::NAN),
    }
}
