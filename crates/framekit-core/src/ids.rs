//! Identifier sequences.
//!
//! Entity IDs (`N1`, `B4`, `r2`, ...) are built from a number drawn from an
//! [`IdSequence`]. The registry owns one sequence per entity class, so ID
//! assignment is explicit state that tests can inject and inspect.

use std::fmt;

/// Source of monotonically increasing identifier numbers.
pub trait IdSequence: fmt::Debug + Send {
    /// Returns the next number in the sequence.
    fn next_id(&mut self) -> u64;

    /// Returns the number the next call to [`IdSequence::next_id`] will yield.
    fn peek(&self) -> u64;

    /// Rewinds the sequence to its initial state.
    fn reset(&mut self);
}

/// Counter starting at a fixed value and incrementing by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSequence {
    start: u64,
    next: u64,
}

impl CounterSequence {
    /// Creates a counter whose first value is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a counter whose first value is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { start, next: start }
    }
}

impl Default for CounterSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence for CounterSequence {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    fn peek(&self) -> u64 {
        self.next
    }

    fn reset(&mut self) {
        self.next = self.start;
    }
}
