//! Minimum-interval gate for geocoding requests.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Serializes lookups behind a minimum inter-call delay.
///
/// The upstream service enforces usage limits, so every lookup -
/// regardless of caller - must pass through one gate. Cloning shares the
/// underlying gate; the mutex is held across the wait so concurrent
/// callers queue rather than racing past each other.
#[derive(Debug, Clone)]
pub struct RequestGate {
    min_interval: Duration,
    last: Arc<Mutex<Option<Instant>>>,
}

impl RequestGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait until the minimum interval since the previous call has
    /// passed, then claim the slot.
    pub async fn acquire(&self) {
        let mut last = self.last.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(?wait, "rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }

        *last = Some(Instant::now());
    }
}
