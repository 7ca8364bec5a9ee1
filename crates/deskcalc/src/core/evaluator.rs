//! Calculator input/operation state machine
//!
//! Models a pocket calculator with a single pending binary operation.
//! Operators chain strictly left to right with no precedence: pressing a
//! second operator first folds the pending one into the display.
//!
//! ```text
//!            digit / decimal                  digit / decimal
//!              ┌──────┐                         ┌──────┐
//!              ▼      │     operator            ▼      │
//!           ┌──────────┴┐ ───────────────▶ ┌──────────┴───────┐
//!           │   Idle    │                  │ OperationPending │──┐ operator
//!           └───────────┘ ◀─────────────── └──────────────────┘◀─┘ (fold)
//!                ▲              equals
//!                └──── clear (from any state)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::tape::TapeEntry;
use crate::core::{format_number, parse_display, Digit, Operation};
use crate::keypad::KeypadAction;

const INITIAL_DISPLAY: &str = "0";

/// Coarse state of the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorState {
    /// No operation pending
    Idle,
    /// Operator chosen, waiting for the right-hand operand
    OperationPending,
}

/// Left operand and operator waiting for a right-hand side.
///
/// Kept together so neither can exist without the other.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    operand: f64,
    operation: Operation,
}

/// Serializable copy of everything the evaluator exposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number currently shown
    pub display: String,
    /// History line above the display
    pub history: String,
    /// Idle or waiting for an operand
    pub state: EvaluatorState,
    /// Operator awaiting a right-hand operand
    pub pending_operation: Option<Operation>,
    /// Left-hand operand of the pending operator
    pub pending_operand: Option<f64>,
    /// Whether the next digit starts a new number
    pub reset: bool,
}

/// The calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluator {
    display: String,
    pending: Option<Pending>,
    reset: bool,
    history: String,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            reset: false,
            history: String::new(),
        }
    }

    /// Text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Raw history text set by the last operator or equals
    #[must_use]
    pub fn history(&self) -> &str {
        &self.history
    }

    /// History line to show above the display.
    ///
    /// Falls back to `"{operand} {symbol}"` while an operation is pending
    /// and no history text has been set yet.
    #[must_use]
    pub fn history_display(&self) -> String {
        if !self.history.is_empty() {
            return self.history.clone();
        }
        self.pending
            .map(|p| format!("{} {}", format_number(p.operand), p.operation.symbol()))
            .unwrap_or_default()
    }

    /// Operator awaiting a right-hand operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending.map(|p| p.operation)
    }

    /// Left-hand operand of the pending operator
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Whether the next digit replaces the display
    #[must_use]
    pub fn is_reset_pending(&self) -> bool {
        self.reset
    }

    /// Idle or waiting for an operand
    #[must_use]
    pub fn state(&self) -> EvaluatorState {
        if self.pending.is_some() {
            EvaluatorState::OperationPending
        } else {
            EvaluatorState::Idle
        }
    }

    /// Numeric value of the display
    #[must_use]
    pub fn current_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Captures the observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            history: self.history_display(),
            state: self.state(),
            pending_operation: self.pending_operation(),
            pending_operand: self.pending_operand(),
            reset: self.reset,
        }
    }

    /// Types a digit
    pub fn enter_digit(&mut self, digit: Digit) {
        if self.display == INITIAL_DISPLAY || self.reset {
            self.display = digit.to_char().to_string();
            self.reset = false;
        } else {
            self.display.push(digit.to_char());
        }
        tracing::trace!(%digit, display = %self.display, "digit entered");
    }

    /// Types a decimal point; ignored if the number already has one
    pub fn enter_decimal(&mut self) {
        if self.reset {
            self.display = "0.".to_string();
            self.reset = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        tracing::trace!(display = %self.display, "decimal entered");
    }

    /// Chooses the next operator, folding any pending one first
    pub fn select_operator(&mut self, operation: Operation) {
        let current = self.current_value();

        let operand = match self.pending {
            None => current,
            Some(pending) => {
                let result = pending.operation.apply(pending.operand, current);
                self.display = format_number(result);
                result
            }
        };

        self.pending = Some(Pending { operand, operation });
        self.reset = true;
        self.history = format!("{} {}", format_number(current), operation.key());
        tracing::debug!(
            operation = operation.key(),
            display = %self.display,
            "operator selected"
        );
    }

    /// Completes the pending operation.
    ///
    /// Returns the finished equation, or `None` without touching any state
    /// when nothing is pending.
    pub fn equals(&mut self) -> Option<TapeEntry> {
        let Some(pending) = self.pending.take() else {
            tracing::trace!("equals ignored: nothing pending");
            return None;
        };

        let entry = TapeEntry::compute(pending.operand, pending.operation, self.current_value());
        self.history = entry.equation();
        self.display = format_number(entry.result);
        self.reset = true;
        tracing::debug!(equation = %entry, "equation completed");
        Some(entry)
    }

    /// Returns every field to its initial value
    pub fn clear(&mut self) {
        *self = Self::new();
        tracing::trace!("cleared");
    }

    /// Routes a keypad action to its transition
    pub fn dispatch(&mut self, action: KeypadAction) -> Option<TapeEntry> {
        match action {
            KeypadAction::Digit(d) => self.enter_digit(d),
            KeypadAction::Decimal => self.enter_decimal(),
            KeypadAction::Operator(op) => self.select_operator(op),
            KeypadAction::Equals => return self.equals(),
            KeypadAction::Clear => self.clear(),
        }
        None
    }
}
