//! Bounded polling with a fixed delay
//!
//! This module implements the polling helper used to tolerate eventual
//! consistency: a write may not be immediately visible to a subsequent list,
//! so callers re-evaluate a condition a bounded number of times with a fixed
//! delay between attempts.

use crate::error::LoggingError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Polling configuration
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Maximum number of attempts
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(1),
        }
    }
}

impl PollConfig {
    /// Create a new polling configuration
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Evaluate a condition until it holds or attempts run out
    ///
    /// Evaluates the condition up to `max_attempts` times, sleeping `delay`
    /// between attempts (never after the last one). Returns immediately once
    /// the condition evaluates to true.
    ///
    /// # Arguments
    ///
    /// * `condition` - Zero-argument async predicate
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` once the condition holds, or `PollTimeout` after all
    /// attempts are exhausted.
    pub async fn poll_until<F, Fut>(&self, condition: F) -> Result<(), LoggingError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        let (result, _) = self.poll_until_tracked(condition).await;
        result
    }

    /// Evaluate a condition until it holds and track the attempt count
    ///
    /// Same as [`poll_until`](Self::poll_until), but also reports how many
    /// evaluations were made.
    ///
    /// # Arguments
    ///
    /// * `condition` - Zero-argument async predicate
    ///
    /// # Returns
    ///
    /// Returns a tuple of (result, attempts) where:
    /// - `result`: `Ok(())` once the condition holds, or `PollTimeout` after
    ///   all attempts are exhausted.
    /// - `attempts`: The number of evaluations made (1-indexed, so 1 means
    ///   the condition held on the first evaluation)
    pub async fn poll_until_tracked<F, Fut>(&self, mut condition: F) -> (Result<(), LoggingError>, u32)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        for attempt in 0..self.max_attempts {
            let attempt_number = attempt + 1; // 1-indexed
            if condition().await {
                return (Ok(()), attempt_number);
            }

            // Don't sleep after the last attempt
            if attempt < self.max_attempts - 1 {
                sleep(self.delay).await;
            }
        }

        (
            Err(LoggingError::PollTimeout(format!(
                "condition not met after {} attempts",
                self.max_attempts
            ))),
            self.max_attempts,
        )
    }
}
