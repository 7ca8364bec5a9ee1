//! Widget driver
//!
//! One seam for both widgets: anything that accepts discrete actions and
//! shows a two-line readout implements [`Widget`]. Scripts (`"5 + 3 ="`,
//! `"+ + -"`) parse into action lists and [`replay`] feeds them through,
//! so the same driving code serves the CLI, the interactive loop and tests.

use serde::{Deserialize, Serialize};

use crate::core::evaluator::{Evaluator, Snapshot};
use crate::core::tape::Tape;
use crate::core::{Counter, WidgetResult};
use crate::keypad::{CounterAction, KeypadAction};

/// What a widget currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Readout {
    /// Small line above the main display (may be empty)
    pub history: String,
    /// Main display
    pub display: String,
}

/// A widget driven by discrete actions
pub trait Widget {
    /// Action type the widget accepts
    type Action: Copy + std::fmt::Debug;

    /// Applies one action
    fn apply(&mut self, action: Self::Action);

    /// Current readout
    fn readout(&self) -> Readout;

    /// Returns to the initial state
    fn reset(&mut self);
}

/// A calculator plus the tape of equations it has completed
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    evaluator: Evaluator,
    tape: Tape,
}

impl CalculatorSession {
    /// Creates a session with the default tape length
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session keeping at most `max_entries` tape lines
    #[must_use]
    pub fn with_tape_capacity(max_entries: usize) -> Self {
        Self {
            evaluator: Evaluator::new(),
            tape: Tape::with_capacity(max_entries),
        }
    }

    /// The underlying state machine
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Completed equations, oldest first
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Snapshot of the evaluator
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.evaluator.snapshot()
    }
}

impl Widget for CalculatorSession {
    type Action = KeypadAction;

    fn apply(&mut self, action: KeypadAction) {
        if let Some(entry) = self.evaluator.dispatch(action) {
            self.tape.push(entry);
        }
    }

    fn readout(&self) -> Readout {
        Readout {
            history: self.evaluator.history_display(),
            display: self.evaluator.display().to_string(),
        }
    }

    /// Clears the calculator; the tape survives.
    fn reset(&mut self) {
        self.evaluator.clear();
    }
}

impl Widget for Counter {
    type Action = CounterAction;

    fn apply(&mut self, action: CounterAction) {
        match action {
            CounterAction::Increment => self.increment(),
            CounterAction::Decrement => self.decrement(),
        }
    }

    fn readout(&self) -> Readout {
        Readout {
            history: String::new(),
            display: self.to_string(),
        }
    }

    fn reset(&mut self) {
        Counter::reset(self);
    }
}

/// Applies `actions` in order and returns the final readout
pub fn replay<W, I>(widget: &mut W, actions: I) -> Readout
where
    W: Widget,
    I: IntoIterator<Item = W::Action>,
{
    let mut count = 0usize;
    for action in actions {
        widget.apply(action);
        count += 1;
    }
    let readout = widget.readout();
    tracing::debug!(actions = count, display = %readout.display, "replay finished");
    readout
}

/// Parses a calculator script.
///
/// Tokens are whitespace separated. `clear` and `ac` are words for Clear;
/// any other token is read one character at a time, so `12.5*2=` and
/// `12.5 * 2 =` are the same script.
pub fn parse_calculator_script(script: &str) -> WidgetResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();
    for token in script.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "clear" | "ac" => actions.push(KeypadAction::Clear),
            _ => {
                for c in token.chars() {
                    actions.push(KeypadAction::try_from(c)?);
                }
            }
        }
    }
    Ok(actions)
}

/// Parses a counter script of `+`/`-` or `inc`/`dec` tokens.
///
/// Runs of signs without spaces (`++-`) count one step per sign.
pub fn parse_counter_script(script: &str) -> WidgetResult<Vec<CounterAction>> {
    let mut actions = Vec::new();
    for token in script.split_whitespace() {
        if token.chars().all(|c| matches!(c, '+' | '-')) {
            actions.extend(token.chars().map(|c| {
                if c == '+' {
                    CounterAction::Increment
                } else {
                    CounterAction::Decrement
                }
            }));
        } else {
            actions.push(token.parse()?);
        }
    }
    Ok(actions)
}
