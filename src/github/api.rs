// src/github/api.rs
// =============================================================================
// Client for the GitHub REST contents API.
//
// Operations:
// - RepoId::parse: owner/name out of a github.com URL
// - list_contents: entries (file/dir) at a path in the repository tree
// - fetch_text: raw text of a file entry via its download_url
//
// A rate-limit response (403/429 with x-ratelimit-remaining: 0) surfaces as
// the distinct GithubError::RateLimited variant carrying the reset timestamp,
// so the caller can branch on it instead of pattern-matching error strings.
// =============================================================================

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("link-warden/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GithubError {
    /// The API refused the request because the rate limit is exhausted.
    /// `reset` is the epoch second the limit resets at, when the API said so.
    #[error("GitHub API rate limit exceeded")]
    RateLimited { reset: Option<u64> },

    #[error("request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("not a GitHub repository URL: {0}")]
    InvalidRepoUrl(String),

    #[error("no download URL for {0}")]
    MissingDownloadUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// A repository handle: owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Parses `https://github.com/owner/repo`, with or without scheme, with
    /// or without a trailing `.git`.
    pub fn parse(repo_url: &str) -> Result<Self, GithubError> {
        let normalized = if repo_url.contains("://") {
            repo_url.to_string()
        } else {
            format!("https://{repo_url}")
        };

        let parsed = Url::parse(&normalized)
            .map_err(|_| GithubError::InvalidRepoUrl(repo_url.to_string()))?;

        match parsed.host_str() {
            Some("github.com") | Some("www.github.com") => {}
            _ => return Err(GithubError::InvalidRepoUrl(repo_url.to_string())),
        }

        let mut segments = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());
        let owner = segments
            .next()
            .ok_or_else(|| GithubError::InvalidRepoUrl(repo_url.to_string()))?;
        let name = segments
            .next()
            .ok_or_else(|| GithubError::InvalidRepoUrl(repo_url.to_string()))?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.trim_end_matches(".git").to_string(),
        })
    }
}

/// One entry from a contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub download_url: Option<String>,
}

impl ContentEntry {
    pub fn is_markdown(&self) -> bool {
        self.kind == EntryKind::File && self.name.ends_with(".md")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules — listed by the API but not traversed here
    #[serde(other)]
    Other,
}

pub struct GithubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> reqwest::Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_API_BASE.to_string(),
            token,
        })
    }

    /// Points the client at a different API root. Used by tests to talk to a
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Lists the entries at `path` inside the repository (`""` for the root).
    pub async fn list_contents(
        &self,
        repo: &RepoId,
        path: &str,
    ) -> Result<Vec<ContentEntry>, GithubError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url, repo.owner, repo.name, path
        );

        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let response = Self::reject_errors(url, response)?;
        Ok(response.json().await?)
    }

    /// Fetches the raw text of a file entry.
    pub async fn fetch_text(&self, entry: &ContentEntry) -> Result<String, GithubError> {
        let url = entry
            .download_url
            .clone()
            .ok_or_else(|| GithubError::MissingDownloadUrl(entry.path.clone()))?;

        let response = self.http.get(&url).send().await?;
        let response = Self::reject_errors(url, response)?;
        Ok(response.text().await?)
    }

    /// Maps non-success responses to errors, with rate limits split out into
    /// their own variant.
    fn reject_errors(url: String, response: Response) -> Result<Response, GithubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let exhausted = matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS)
            && header_value(&response, "x-ratelimit-remaining").as_deref() == Some("0");
        if exhausted {
            let reset = header_value(&response, "x-ratelimit-reset").and_then(|v| v.parse().ok());
            return Err(GithubError::RateLimited { reset });
        }

        Err(GithubError::Status {
            url,
            status: status.as_u16(),
        })
    }
}

fn header_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
