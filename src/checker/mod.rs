// src/checker/mod.rs
// =============================================================================
// Link checking: extraction, liveness probing, and backoff waits.
//
// Submodules:
// - markdown: regex extraction of URLs from markdown text
// - http: HEAD-probe of a single URL with retry/backoff
// - backoff: exponential delay math and the progress-bar sleep
// =============================================================================

pub mod backoff;
mod http;
mod markdown;

pub use http::{check_url, probe_client, RetryPolicy, PROBE_TIMEOUT};
pub use markdown::extract_links;
