// src/main.rs
// =============================================================================
// Entry point.
//
// Flow:
// 1. Initialize tracing (timestamped, leveled, RUST_LOG-filterable)
// 2. Parse arguments; prompt for a repository URL if none was given
// 3. Walk the repository, checking every markdown link sequentially
// 4. On success, write the report and print the one-line verdict
// 5. On a rate limit, wait out the cooldown and abandon the run (no report)
//
// Exit codes: 0 = no dead links, 1 = dead links found, 2 = error or
// rate-limit abort.
// =============================================================================

mod checker;
mod cli;
mod crawl;
mod github;
mod report;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use checker::RetryPolicy;
use cli::Cli;
use github::{GithubClient, GithubError, RepoId};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let repo_url = match cli.repo_url {
        Some(url) => url,
        None => prompt_for_repo_url()?,
    };
    if repo_url == "quit" {
        return Ok(0);
    }

    let repo = RepoId::parse(&repo_url)?;
    let gh = GithubClient::new(cli.token)?;
    let probe = checker::probe_client(checker::PROBE_TIMEOUT)?;

    match crawl::walk_repo(&gh, &probe, &repo, &RetryPolicy::default()).await {
        Ok(dead_links) => {
            report::write_dead_links(&dead_links, &cli.output)?;
            if dead_links.is_empty() {
                println!("No dead links found.");
                Ok(0)
            } else {
                println!(
                    "Dead links found and written to {}.",
                    cli.output.display()
                );
                Ok(1)
            }
        }
        Err(GithubError::RateLimited { reset }) => {
            // Cooldown, then give up on this run; no report is written
            github::handle_rate_limit(reset).await;
            warn!("rate limit hit, run abandoned");
            Ok(2)
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt_for_repo_url() -> Result<String> {
    print!("Enter the GitHub repository URL to check: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
