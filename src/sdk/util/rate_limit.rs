use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;

use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Shared blocking limiter applied before every hosted-API call.
#[derive(Clone)]
pub struct Limiter {
    inner: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    clock: DefaultClock,
}

impl Limiter {
    pub fn per_minute(calls: u32) -> Self {
        let calls = NonZeroU32::new(calls.max(1)).unwrap_or(NonZeroU32::MIN);
        Self {
            inner: Arc::new(RateLimiter::direct(Quota::per_minute(calls))),
            clock: DefaultClock::default(),
        }
    }

    /// Blocks the current thread until the limiter admits one more call.
    pub fn wait(&self) {
        while let Err(not_until) = self.inner.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }
}

impl Default for Limiter {
    fn default() -> Self {
        // Free tiers of hosted routing APIs commonly allow 40 calls/minute.
        Self::per_minute(40)
    }
}
