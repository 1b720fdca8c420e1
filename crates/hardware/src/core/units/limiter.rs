//! Request Limiter.
//!
//! A counting semaphore that bounds the number of instruction-cache requests
//! in flight. The controller acquires a slot when a request is admitted and
//! releases it when the matching response is consumed.

/// Counting admission gate for outstanding cache requests.
#[derive(Debug, Clone)]
pub struct RequestLimiter {
    /// Maximum number of outstanding requests.
    capacity: usize,
    /// Requests issued but not yet consumed.
    count: usize,
}

impl RequestLimiter {
    /// Creates a limiter admitting at most `capacity` outstanding requests.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity, count: 0 }
    }

    /// Maximum number of outstanding requests.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of outstanding requests.
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if another request may be issued.
    #[inline]
    pub const fn is_available(&self) -> bool {
        self.count < self.capacity
    }

    /// Returns `true` if nothing is in flight.
    #[inline]
    pub const fn is_idle(&self) -> bool {
        self.count == 0
    }

    /// Claims a slot for a newly issued request.
    ///
    /// Only legal while [`is_available`](Self::is_available) holds; the count
    /// saturates at the capacity otherwise.
    pub fn acquire(&mut self) {
        debug_assert!(self.is_available(), "request limiter overrun");
        self.count = (self.count + 1).min(self.capacity);
    }

    /// Returns the slot of a consumed response. Never goes below zero.
    pub fn release(&mut self) {
        self.count = self.count.saturating_sub(1);
    }
}
