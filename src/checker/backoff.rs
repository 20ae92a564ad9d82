// src/checker/backoff.rs
// =============================================================================
// Backoff delays and the waiter that sleeps them off.
//
// Two callers share this:
// - the URL checker, between retry attempts (2s, 4s, 8s)
// - the rate-limit handler, for API cooldowns (possibly minutes)
//
// The wait is an awaited tokio sleep rather than a thread block, so a future
// concurrent checker would not be pinned behind one slow retry sequence. The
// sequential behavior callers observe today is unchanged.
// =============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Exponential delay for a retry attempt: `base * 2^attempt`.
///
/// Attempt numbering starts at 0, so the first retry waits `base` itself.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
}

/// Sleep for `delay`, ticking a progress bar once per second.
///
/// Always logs the total intended delay before sleeping. Runs to completion
/// once started; there is no cancellation.
pub async fn wait(delay: Duration) {
    info!(seconds = delay.as_secs_f64(), "backing off");

    let whole_seconds = delay.as_secs();
    let bar = ProgressBar::new(whole_seconds);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len}s waiting")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for _ in 0..whole_seconds {
        tokio::time::sleep(Duration::from_secs(1)).await;
        bar.inc(1);
    }

    // Sub-second remainder, if any (delays shorter than a second get no ticks)
    let remainder = delay - Duration::from_secs(whole_seconds);
    if !remainder.is_zero() {
        tokio::time::sleep(remainder).await;
    }

    bar.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_doubles_per_attempt() {
        let base = Duration::from_secs(2);
        assert_eq!(backoff_delay(base, 0), Duration::from_secs(2));
        assert_eq!(backoff_delay(base, 1), Duration::from_secs(4));
        assert_eq!(backoff_delay(base, 2), Duration::from_secs(8));
    }

    #[test]
    fn test_delay_strictly_increases() {
        let base = Duration::from_secs(2);
        for attempt in 0..10 {
            assert!(backoff_delay(base, attempt + 1) > backoff_delay(base, attempt));
        }
    }

    #[test]
    fn test_exhausted_retry_total_wait() {
        // Three retries at base 2s add up to at least 14 seconds of waiting
        let base = Duration::from_secs(2);
        let total: Duration = (0..3).map(|a| backoff_delay(base, a)).sum();
        assert_eq!(total, Duration::from_secs(14));
    }

    #[tokio::test]
    async fn test_wait_subsecond_delay_completes() {
        wait(Duration::from_millis(20)).await;
    }
}
