use std::time::Duration;

use popcorn_config::{BackoffKind, RetryConfig};

/// Automatic retry budget and delay schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub limit: u32,
    pub base_delay: Duration,
    pub backoff: BackoffKind,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            limit: config.limit,
            base_delay: config.base_delay,
            backoff: config.backoff,
        }
    }
}

impl RetryPolicy {
    /// Delay before the `attempt`-th automatic retry (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let attempt = attempt.max(1);
        match self.backoff {
            BackoffKind::Linear => self.base_delay.saturating_mul(attempt),
            BackoffKind::Exponential => {
                let factor = 1u32.checked_shl(attempt - 1).unwrap_or(u32::MAX);
                self.base_delay.saturating_mul(factor)
            }
        }
    }

    /// Whether another automatic retry fits after `used` of them.
    pub fn allows(&self, used: u32) -> bool {
        used < self.limit
    }
}
