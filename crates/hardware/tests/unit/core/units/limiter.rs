//! Request Limiter Tests.

use rvfetch_core::core::units::RequestLimiter;

#[test]
fn starts_idle_with_fixed_capacity() {
    let limiter = RequestLimiter::new(2);
    assert_eq!(limiter.capacity(), 2);
    assert_eq!(limiter.count(), 0);
    assert!(limiter.is_idle());
    assert!(limiter.is_available());
}

#[test]
fn single_slot_blocks_second_acquire() {
    let mut limiter = RequestLimiter::new(1);
    limiter.acquire();
    assert!(!limiter.is_available());
    assert!(!limiter.is_idle());
    limiter.release();
    assert!(limiter.is_idle());
}

#[test]
fn release_never_goes_below_zero() {
    let mut limiter = RequestLimiter::new(2);
    limiter.release();
    assert_eq!(limiter.count(), 0);
    limiter.acquire();
    limiter.release();
    limiter.release();
    assert_eq!(limiter.count(), 0);
}
