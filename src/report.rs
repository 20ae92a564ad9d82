// src/report.rs
// =============================================================================
// Writes the dead-link report file.
//
// Format is one line per occurrence, two spaces before "Page:":
//   Link: <url>  Page: <filePath>
// The file is truncated fresh on every run, so a clean run leaves an empty
// report rather than a stale one.
// =============================================================================

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::crawl::LinkOccurrence;

pub const DEFAULT_REPORT_FILE: &str = "dead_links.txt";

pub fn write_dead_links(dead_links: &[LinkOccurrence], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for occurrence in dead_links {
        writeln!(out, "Link: {}  Page: {}", occurrence.url, occurrence.path)?;
    }
    out.flush()?;

    info!(path = %path.display(), count = dead_links.len(), "dead links written");
    Ok(())
}
