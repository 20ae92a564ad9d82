// src/github/ratelimit.rs
// =============================================================================
// Cooldown handling for an exhausted GitHub API rate limit.
//
// The API reports the reset moment as an epoch second in x-ratelimit-reset.
// When that header was present we wait until the reset; when it was missing
// we fall back to a flat 60 seconds. The interrupted walk is not resumed —
// the caller abandons the run after the wait.
// =============================================================================

use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::warn;

use crate::checker::backoff;

const FALLBACK_COOLDOWN: Duration = Duration::from_secs(60);

/// How long to wait before the limit resets.
///
/// A reset in the past means no wait at all; an unknown reset means the flat
/// fallback.
pub fn cooldown(reset: Option<u64>, now: u64) -> Duration {
    match reset {
        Some(reset) if reset > now => Duration::from_secs(reset - now),
        Some(_) => Duration::ZERO,
        None => FALLBACK_COOLDOWN,
    }
}

/// Waits out a rate-limit window signalled by the API.
pub async fn handle_rate_limit(reset: Option<u64>) {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let delay = cooldown(reset, now);

    warn!(
        reset = reset,
        seconds = delay.as_secs(),
        "GitHub API rate limit exceeded"
    );

    if !delay.is_zero() {
        backoff::wait(delay).await;
    }
}
