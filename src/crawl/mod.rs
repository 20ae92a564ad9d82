// src/crawl/mod.rs
// =============================================================================
// Repository traversal: the work-list walk that feeds files to the extractor
// and extracted URLs to the checker.
// =============================================================================

mod walk;

pub use walk::walk_repo;

/// One link as it appeared in one file. Duplicates across (or within) files
/// are kept; the final report preserves discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    pub path: String,
    pub url: String,
}
