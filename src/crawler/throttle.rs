//! Global request spacing
//!
//! Every fetch waits until at least the configured interval has elapsed
//! since the previous fetch began.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_start: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_start: None,
        }
    }

    /// Time left before the next fetch may begin
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_start {
            Some(last) => self.interval.saturating_sub(now.duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Sleeps until the interval has passed, then records a fetch start
    pub async fn wait(&mut self) {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            tracing::debug!("Rate limit: sleeping {:?}", wait);
            tokio::time::sleep(wait).await;
        }
        self.last_start = Some(Instant::now());
    }
}
