//! Increment/decrement counter

use serde::{Deserialize, Serialize};

/// A single integer moved up or down one step at a time.
///
/// Saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Creates a counter at zero
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Creates a counter starting at `value`
    #[must_use]
    pub const fn starting_at(value: i64) -> Self {
        Self { value }
    }

    /// Current value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Adds one
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        tracing::trace!(value = self.value, "counter incremented");
    }

    /// Subtracts one
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
        tracing::trace!(value = self.value, "counter decremented");
    }

    /// Back to zero
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
