//! Inter-request pacing.
//!
//! Quote batches are fetched one symbol at a time and the client pauses after
//! every request so the provider's rate limit is not exceeded. The policy is a
//! trait so tests can swap in a zero delay.
use std::thread;
use std::time::Duration;

/// Pause policy applied after each provider request.
pub trait Pacer: Send + Sync {
    /// Blocks the calling thread until the next request may be issued.
    fn pause(&self);
}

/// Sleeps for a fixed duration after every request.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Creates a fixed-delay pacer.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Convenience constructor from milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Pacer for FixedDelay {
    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) {}
}
