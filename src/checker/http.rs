// src/checker/http.rs
// =============================================================================
// Checks whether a URL is alive by probing it with a HEAD request.
//
// Outcome rules:
// - HTTP 404            -> dead, immediately (no retry; 404 is definitive)
// - any other status    -> alive (including 3xx, 403, 5xx — redirects are not
//                          followed and non-404 statuses are not distinguished;
//                          deliberate simplification, do not tighten)
// - transport failure   -> retried with exponential backoff, then dead
//
// The retry loop never lets an error escape: after max_retries transport
// failures the URL is simply reported dead.
// =============================================================================

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{error, info, warn};

use super::backoff;

/// Per-request probe timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Retry schedule for transport failures while probing one URL.
///
/// With the defaults a URL sees at most 4 attempts, with 2s, 4s and 8s waits
/// between them.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

/// Builds the client used for link probes.
///
/// Redirects are disabled so a 301/302 response is classified on its own
/// status rather than on wherever it points.
pub fn probe_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// Probes `url` and returns true if it is alive.
///
/// Transport failures (timeout, connection refused, DNS) are retried up to
/// `policy.max_retries` times with exponentially growing waits; a response of
/// any kind ends the loop on the first attempt it arrives.
pub async fn check_url(client: &Client, url: &str, policy: &RetryPolicy) -> bool {
    let mut attempt = 0u32;

    loop {
        match client.head(url).send().await {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                warn!(url, "dead link (404 Not Found)");
                return false;
            }
            Ok(response) => {
                info!(url, status = response.status().as_u16(), "valid link");
                return true;
            }
            Err(err) => {
                error!(url, error = %err, "error checking link");
                if attempt < policy.max_retries {
                    backoff::wait(backoff::backoff_delay(policy.base_delay, attempt)).await;
                    attempt += 1;
                } else {
                    error!(url, "max retries reached");
                    return false;
                }
            }
        }
    }
}
