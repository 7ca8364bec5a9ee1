//! Keypad layout and widget actions
//!
//! The calculator's button grid as plain data, plus the action types both
//! widgets accept. Buttons can span rows or columns:
//!
//! ```text
//! [ Clear   ] [ ÷ ] [ × ]
//! [ 7 ] [ 8 ] [ 9 ] [ − ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0       ] [ . ] [ = ]
//! ```

use crate::core::{Digit, Operation, WidgetError, WidgetResult};

/// Anything a calculator button can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Type a digit
    Digit(Digit),
    /// Type a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operation),
    /// Complete the pending operation
    Equals,
    /// Reset the calculator
    Clear,
}

impl KeypadAction {
    /// Text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Operator(op) => op.symbol().into(),
            Self::Equals => "=".into(),
            Self::Clear => "Clear".into(),
        }
    }
}

impl TryFrom<char> for KeypadAction {
    type Error = WidgetError;

    fn try_from(c: char) -> WidgetResult<Self> {
        match c {
            '0'..='9' => Digit::try_from(c).map(Self::Digit),
            '.' => Ok(Self::Decimal),
            '=' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            other => Operation::try_from(other).map(Self::Operator),
        }
    }
}

/// Anything the counter's buttons can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAction {
    /// Add one
    Increment,
    /// Subtract one
    Decrement,
}

impl CounterAction {
    /// Text printed on the button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Increment => "+",
            Self::Decrement => "-",
        }
    }
}

impl std::str::FromStr for CounterAction {
    type Err = WidgetError;

    fn from_str(s: &str) -> WidgetResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "+" | "inc" | "increment" => Ok(Self::Increment),
            "-" | "−" | "dec" | "decrement" => Ok(Self::Decrement),
            _ => Err(WidgetError::UnknownToken(s.to_string())),
        }
    }
}

/// A button placed on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// What pressing it does
    pub action: KeypadAction,
    /// Top row occupied
    pub row: usize,
    /// Leftmost column occupied
    pub col: usize,
    /// Columns covered
    pub col_span: usize,
    /// Rows covered
    pub row_span: usize,
}

impl KeypadButton {
    const fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            action,
            row,
            col,
            col_span: 1,
            row_span: 1,
        }
    }

    const fn wide(mut self, cols: usize) -> Self {
        self.col_span = cols;
        self
    }

    const fn tall(mut self, rows: usize) -> Self {
        self.row_span = rows;
        self
    }

    /// True if the button covers the cell at `(row, col)`
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.row_span
            && col >= self.col
            && col < self.col + self.col_span
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Grid width
    pub const COLS: usize = 4;
    /// Grid height
    pub const ROWS: usize = 5;

    /// Builds the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: usize| KeypadAction::Digit(Digit::ALL[d]);
        let op = KeypadAction::Operator;

        let buttons = vec![
            KeypadButton::new(KeypadAction::Clear, 0, 0).wide(2),
            KeypadButton::new(op(Operation::Divide), 0, 2),
            KeypadButton::new(op(Operation::Multiply), 0, 3),
            KeypadButton::new(digit(7), 1, 0),
            KeypadButton::new(digit(8), 1, 1),
            KeypadButton::new(digit(9), 1, 2),
            KeypadButton::new(op(Operation::Subtract), 1, 3),
            KeypadButton::new(digit(4), 2, 0),
            KeypadButton::new(digit(5), 2, 1),
            KeypadButton::new(digit(6), 2, 2),
            KeypadButton::new(op(Operation::Add), 2, 3),
            KeypadButton::new(digit(1), 3, 0),
            KeypadButton::new(digit(2), 3, 1),
            KeypadButton::new(digit(3), 3, 2),
            KeypadButton::new(KeypadAction::Equals, 3, 3).tall(2),
            KeypadButton::new(digit(0), 4, 0).wide(2),
            KeypadButton::new(KeypadAction::Decimal, 4, 2),
        ];

        Self { buttons }
    }

    /// All buttons, in reading order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button covering the cell at `(row, col)`
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Button performing `action`
    #[must_use]
    pub fn find(&self, action: KeypadAction) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Buttons visible on each row, left to right.
    ///
    /// A button spanning several rows appears in each of them.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<&KeypadButton>> {
        (0..Self::ROWS)
            .map(|row| {
                let mut cells: Vec<&KeypadButton> = Vec::new();
                for col in 0..Self::COLS {
                    if let Some(button) = self.button_at(row, col) {
                        if !cells.last().is_some_and(|last| std::ptr::eq(*last, button)) {
                            cells.push(button);
                        }
                    }
                }
                cells
            })
            .collect()
    }

    /// Renders the grid as text, one line per row
    #[must_use]
    pub fn legend(&self) -> String {
        const CELL: usize = 5;

        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| {
                        let width = CELL * button.col_span + button.col_span - 1 - 4;
                        format!("[ {:<width$} ]", button.action.label())
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
