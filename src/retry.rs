use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// How the delay between attempts grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backoff {
    /// Same delay before every retry
    Fixed,
    /// Delay grows by the base delay each retry
    Linear,
    /// Delay doubles each retry
    Exponential,
}

/// Bounded retry policy shared by every retry site in the scraper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,

    /// Base delay between attempts in milliseconds
    #[serde(default)]
    pub delay_ms: u64,

    #[serde(default = "default_backoff")]
    pub backoff: Backoff,
}

fn default_backoff() -> Backoff {
    Backoff::Fixed
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration, backoff: Backoff) -> Self {
        Self {
            max_attempts,
            delay_ms: delay.as_millis() as u64,
            backoff,
        }
    }

    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self::new(max_attempts, delay, Backoff::Fixed)
    }

    /// Single attempt, no waiting
    pub fn once() -> Self {
        Self::fixed(1, Duration::ZERO)
    }

    /// A zero attempt budget still runs the operation once
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to sleep after the given failed attempt (0-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let base = self.delay_ms;
        let ms = match self.backoff {
            Backoff::Fixed => base,
            Backoff::Linear => base.saturating_mul(u64::from(attempt) + 1),
            Backoff::Exponential => base.saturating_mul(1u64 << attempt.min(16)),
        };
        Duration::from_millis(ms)
    }

    /// Runs `op` until it succeeds or the attempt budget is spent.
    ///
    /// The closure receives the 0-based attempt number, so callers can do
    /// extra work (such as reloading a page) before every retry. The last
    /// error is returned when all attempts fail.
    pub async fn retry<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let attempts = self.attempts();
        let mut attempt = 0;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt + 1 >= attempts => return Err(e),
                Err(e) => {
                    let delay = self.delay_after(attempt);
                    ::log::debug!(
                        "Attempt {} of {} failed ({}), retrying in {:?}",
                        attempt + 1,
                        attempts,
                        e,
                        delay
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}
