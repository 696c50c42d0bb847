//! Per-query policy.

use std::time::Duration;

/// Upper bound for the exponential retry delay.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Disabled queries never call their fetcher.
    pub enabled: bool,
    /// How long a cached value is served without refetching.
    pub stale_time: Duration,
    /// Extra attempts after the first failure.
    pub retry: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_delay: Duration,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            stale_time: Duration::ZERO,
            retry: 3,
            retry_delay: Duration::from_secs(1),
        }
    }
}

impl QueryOptions {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    pub fn retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.retry_delay
            .checked_mul(factor)
            .unwrap_or(MAX_RETRY_DELAY)
            .min(MAX_RETRY_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let options = QueryOptions::default();
        assert_eq!(options.backoff(0), Duration::from_secs(1));
        assert_eq!(options.backoff(1), Duration::from_secs(2));
        assert_eq!(options.backoff(4), Duration::from_secs(16));
        assert_eq!(options.backoff(5), MAX_RETRY_DELAY);
        assert_eq!(options.backoff(40), MAX_RETRY_DELAY);
    }
}
