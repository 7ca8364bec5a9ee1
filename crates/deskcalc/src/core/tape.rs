//! Paper tape of completed equations
//!
//! Every `=` that actually computes something yields a [`TapeEntry`];
//! a [`Tape`] keeps the most recent ones in a bounded queue.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::{format_number, Operation};

/// One completed equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// Left-hand operand
    pub left: f64,
    /// Operator applied
    pub operation: Operation,
    /// Right-hand operand
    pub right: f64,
    /// Result of the equation
    pub result: f64,
}

impl TapeEntry {
    /// Creates an entry by applying `operation` to the operands
    #[must_use]
    pub fn compute(left: f64, operation: Operation, right: f64) -> Self {
        Self {
            left,
            operation,
            right,
            result: operation.apply(left, right),
        }
    }

    /// The equation without its result, e.g. `5 + 3`
    #[must_use]
    pub fn equation(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.left),
            self.operation.symbol(),
            format_number(self.right)
        )
    }
}

impl std::fmt::Display for TapeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.equation(), format_number(self.result))
    }
}

/// Bounded record of completed equations, oldest evicted first
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a tape holding at most `max_entries` equations
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Number of recorded equations
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
