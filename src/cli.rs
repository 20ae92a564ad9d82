// src/cli.rs
// =============================================================================
// Command-line interface, built with clap's derive API.
//
// The repository URL may be passed as a positional argument; when it is
// omitted the program prompts for it on stdin (typing "quit" exits).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::report::DEFAULT_REPORT_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "link-warden",
    version,
    about = "Crawls a GitHub repository's markdown files and reports dead links"
)]
pub struct Cli {
    /// GitHub repository URL (e.g. https://github.com/user/repo).
    /// Prompted for interactively when omitted.
    pub repo_url: Option<String>,

    /// GitHub API token for authenticated (higher rate limit) access
    #[arg(long)]
    pub token: Option<String>,

    /// File the dead-link report is written to
    #[arg(long, default_value = DEFAULT_REPORT_FILE)]
    pub output: PathBuf,
}
