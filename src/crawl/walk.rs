// src/crawl/walk.rs
// =============================================================================
// Walks a repository tree and checks every link in every markdown file.
//
// The traversal is a FIFO work-list: entries pop off the front, directory
// children go on the back. Effective order is level-order across the whole
// tree — deterministic for a fixed tree, which keeps repeated runs producing
// byte-identical reports.
//
// Everything is sequential: one file fetch, one URL probe at a time. A
// rate-limit error from any listing or fetch aborts the walk and bubbles up
// as GithubError::RateLimited.
// =============================================================================

use reqwest::Client;
use std::collections::VecDeque;
use tracing::info;

use crate::checker::{self, RetryPolicy};
use crate::github::{EntryKind, GithubClient, GithubError, RepoId};

use super::LinkOccurrence;

pub async fn walk_repo(
    gh: &GithubClient,
    probe: &Client,
    repo: &RepoId,
    policy: &RetryPolicy,
) -> Result<Vec<LinkOccurrence>, GithubError> {
    info!(owner = %repo.owner, repo = %repo.name, "starting to check repository");

    let mut pending = VecDeque::from(gh.list_contents(repo, "").await?);
    let mut dead_links = Vec::new();
    let mut total_checked = 0usize;

    while let Some(entry) = pending.pop_front() {
        match entry.kind {
            EntryKind::Dir => {
                info!(path = %entry.path, "entering directory");
                pending.extend(gh.list_contents(repo, &entry.path).await?);
            }
            EntryKind::File if entry.is_markdown() => {
                info!(path = %entry.path, "checking file");
                let text = gh.fetch_text(&entry).await?;

                let urls = checker::extract_links(&text);
                info!(path = %entry.path, count = urls.len(), "links found");

                for url in urls {
                    total_checked += 1;
                    if !checker::check_url(probe, &url, policy).await {
                        dead_links.push(LinkOccurrence {
                            path: entry.path.clone(),
                            url,
                        });
                    }
                }
            }
            EntryKind::File | EntryKind::Other => {}
        }
    }

    info!(total_checked, dead = dead_links.len(), "walk complete");
    Ok(dead_links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo() -> RepoId {
        RepoId {
            owner: "octo".to_string(),
            name: "demo".to_string(),
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 0,
            base_delay: Duration::from_millis(5),
        }
    }

    /// One mock server plays both the hosting API and the linked sites:
    /// a.md holds a link that 404s, sub/b.md holds a link that 200s.
    async fn mock_repo_tree() -> MockServer {
        let server = MockServer::start().await;
        let base = server.uri();

        Mock::given(method("GET"))
            .and(path("/repos/octo/demo/contents/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "a.md", "path": "a.md", "type": "file",
                 "download_url": format!("{base}/raw/a.md")},
                {"name": "sub", "path": "sub", "type": "dir", "download_url": null},
                {"name": "main.rs", "path": "main.rs", "type": "file",
                 "download_url": format!("{base}/raw/main.rs")}
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/demo/contents/sub"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "b.md", "path": "sub/b.md", "type": "file",
                 "download_url": format!("{base}/raw/b.md")}
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/raw/a.md"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("dead: {base}/404page here")),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/raw/b.md"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(format!("ok: {base}/alive here")),
            )
            .mount(&server)
            .await;

        Mock::given(method("HEAD"))
            .and(path("/404page"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("HEAD"))
            .and(path("/alive"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        server
    }

    #[tokio::test]
    async fn test_walk_collects_only_dead_links() {
        let server = mock_repo_tree().await;
        let gh = GithubClient::new(None).unwrap().with_base_url(server.uri());
        let probe = checker::probe_client(Duration::from_secs(1)).unwrap();

        let dead = walk_repo(&gh, &probe, &repo(), &fast_policy()).await.unwrap();

        assert_eq!(
            dead,
            vec![LinkOccurrence {
                path: "a.md".to_string(),
                url: format!("{}/404page", server.uri()),
            }]
        );
    }

    #[tokio::test]
    async fn test_walk_is_order_stable_across_runs() {
        let server = mock_repo_tree().await;
        let gh = GithubClient::new(None).unwrap().with_base_url(server.uri());
        let probe = checker::probe_client(Duration::from_secs(1)).unwrap();

        let first = walk_repo(&gh, &probe, &repo(), &fast_policy()).await.unwrap();
        let second = walk_repo(&gh, &probe, &repo(), &fast_policy()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_non_markdown_files_are_skipped() {
        let server = mock_repo_tree().await;
        let gh = GithubClient::new(None).unwrap().with_base_url(server.uri());
        let probe = checker::probe_client(Duration::from_secs(1)).unwrap();

        walk_repo(&gh, &probe, &repo(), &fast_policy()).await.unwrap();

        // main.rs must never have been fetched
        let fetched: Vec<_> = server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == "/raw/main.rs")
            .collect();
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_aborts_the_walk() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/demo/contents/"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", "0")
                    .insert_header("x-ratelimit-reset", "42"),
            )
            .mount(&server)
            .await;

        let gh = GithubClient::new(None).unwrap().with_base_url(server.uri());
        let probe = checker::probe_client(Duration::from_secs(1)).unwrap();

        let err = walk_repo(&gh, &probe, &repo(), &fast_policy())
            .await
            .unwrap_err();
        assert!(matches!(err, GithubError::RateLimited { reset: Some(42) }));
    }
}
