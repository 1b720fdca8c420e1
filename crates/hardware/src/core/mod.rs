//! Core fetch front end.
//!
//! This module contains the fetch controllers together with the small
//! hardware units they are built from.

/// Fetch pipeline implementation (controllers, latches, and interfaces).
pub mod pipeline;

/// Bookkeeping units (request limiter, fetch target queue).
pub mod units;

pub use self::pipeline::frontend::{Fetch, FetchFrontend, FetchUnit, UnalignedFetch};
