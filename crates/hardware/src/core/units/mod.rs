//! Bookkeeping units used by the fetch controllers.
//!
//! Neither unit touches the instruction cache; they only track what the
//! controller has asked it for.

/// Fetch target queue recording issued request addresses and their generation.
pub mod ftq;

/// Counting admission gate bounding outstanding cache requests.
pub mod limiter;

pub use ftq::FetchTargetQueue;
pub use limiter::RequestLimiter;
