// src/github/mod.rs
// =============================================================================
// GitHub as the hosting API: repository resolution, tree listing, file
// content fetches, and rate-limit cooldowns.
// =============================================================================

mod api;
mod ratelimit;

pub use api::{ContentEntry, EntryKind, GithubClient, GithubError, RepoId};
pub use ratelimit::handle_rate_limit;
