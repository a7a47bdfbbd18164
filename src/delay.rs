//! Timer-backed delay.
//!
//! The returned future completes exactly once, after the duration has
//! elapsed. There is no cancellation handle: dropping the future is the only
//! way to stop waiting.

use std::time::Duration;

/// Suspend the current task for at least `duration`.
///
/// A zero duration still yields to the scheduler once, so the caller
/// resumes on the next tick rather than on the first poll.
pub async fn wait(duration: Duration) {
    if duration.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(duration).await;
    }
}

/// Suspend the current task for `ms` milliseconds.
pub async fn wait_ms(ms: u64) {
    wait(Duration::from_millis(ms)).await;
}
