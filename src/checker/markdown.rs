// src/checker/markdown.rs
// =============================================================================
// Extracts HTTP/HTTPS links from markdown text.
//
// The scan is a plain regex over the raw text, not a markdown parse: it picks
// up bare URLs, URLs inside code fences, and the target of [text](url) alike.
// Matches are returned in order of first appearance with no deduplication.
//
// Known quirk, kept on purpose: trailing punctuation glued to a URL
// ("see http://a.com." -> "http://a.com.") is part of the match, because \S+
// runs to the next whitespace.
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Returns every `http://` or `https://` URL in `text`, in order, duplicates
/// included.
pub fn extract_links(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
