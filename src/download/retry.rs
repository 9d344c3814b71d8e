//! Retry policy for listing page attempts.
use std::time::Duration;

/// How many listing attempts a category gets, and how long to wait between two of them.
///
/// `max_attempts` set to `None` retries forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: Option<usize>,
    backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: Option<usize>, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    /// Never give up on a category.
    pub fn unbounded(backoff: Duration) -> Self {
        Self::new(None, backoff)
    }

    /// Returns `true` if another attempt can be made after `made` attempts.
    pub fn allows(&self, made: usize) -> bool {
        self.max_attempts.map_or(true, |max| made < max)
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }
}

impl Default for RetryPolicy {
    /// 25 attempts, one second apart.
    fn default() -> Self {
        Self::new(Some(25), Duration::from_secs(1))
    }
}
