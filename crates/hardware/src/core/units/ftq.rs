//! Fetch Target Queue (FTQ).
//!
//! A small circular FIFO that records, for every request the basic fetcher
//! issues, the requested address and the generation tag it was issued under.
//! It provides:
//! 1. **Matching:** Responses are paired with entries strictly in issue order.
//! 2. **Backpressure:** A full queue blocks further request issue.
//! 3. **Stale Detection:** The stored tag lets the controller drop responses
//!    issued before a redirection without cancelling them.

use crate::core::pipeline::latches::FetchTarget;

/// Bounded FIFO of issued fetch targets.
#[derive(Debug, Clone)]
pub struct FetchTargetQueue {
    /// Fixed-size entry array.
    entries: Vec<FetchTarget>,
    /// Index of the oldest entry.
    head: usize,
    /// Index where the next entry will be written.
    tail: usize,
    /// Number of valid entries.
    count: usize,
}

impl FetchTargetQueue {
    /// Creates an empty queue with `depth` slots.
    pub fn new(depth: usize) -> Self {
        Self {
            entries: vec![FetchTarget::default(); depth],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no request is being tracked.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if no further request can be tracked.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.entries.len()
    }

    /// Oldest entry, if any.
    pub fn front(&self) -> Option<&FetchTarget> {
        if self.is_empty() {
            None
        } else {
            Some(&self.entries[self.head])
        }
    }

    /// Appends an entry. Returns `false` (and drops it) if the queue is full.
    pub fn push(&mut self, target: FetchTarget) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries[self.tail] = target;
        self.tail = (self.tail + 1) % self.entries.len();
        self.count += 1;
        true
    }

    /// Removes and returns the oldest entry.
    pub fn pop(&mut self) -> Option<FetchTarget> {
        if self.is_empty() {
            return None;
        }
        let target = self.entries[self.head];
        self.head = (self.head + 1) % self.entries.len();
        self.count -= 1;
        Some(target)
    }

}
