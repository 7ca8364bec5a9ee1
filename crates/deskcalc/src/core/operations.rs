//! Binary arithmetic operations

use serde::{Deserialize, Serialize};

use crate::core::{WidgetError, WidgetResult};

/// The four calculator operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Keyboard spelling of the operator, as typed
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Typographic symbol used on the display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operation to `a` and `b`.
    ///
    /// Plain IEEE-754 arithmetic: dividing by zero gives an infinity or NaN.
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<char> for Operation {
    type Error = WidgetError;

    fn try_from(c: char) -> WidgetResult<Self> {
        match c {
            '+' => Ok(Self::Add),
            '-' | '−' => Ok(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(WidgetError::UnknownKey(other)),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = WidgetError;

    fn from_str(s: &str) -> WidgetResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => match s.to_ascii_lowercase().as_str() {
                "add" | "plus" => Ok(Self::Add),
                "sub" | "subtract" | "minus" => Ok(Self::Subtract),
                "mul" | "multiply" | "times" => Ok(Self::Multiply),
                "div" | "divide" => Ok(Self::Divide),
                _ => Err(WidgetError::UnknownToken(s.to_string())),
            },
        }
    }
}
