//! Common types and constants for `NameFind`

use std::path::PathBuf;

/// Maximum descent below the search root (root itself is depth 0)
pub const MAX_DEPTH: usize = 5;

/// Prefix carried by every match line
///
/// Shells parse this prefix back out of rendered lines to recover the
/// path, so it is part of the output contract, not cosmetic.
pub const MATCH_PREFIX: &str = "Found: ";

/// A single search invocation
///
/// Both fields must be non-empty before the request is issued; validating
/// them is the shell's job, not the engine's.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Directory the traversal starts from
    pub root:    PathBuf,
    /// Literal substring compared against file names (case-sensitive)
    pub pattern: String,
}

/// Outcome of a completed search with traversal statistics
///
/// The statistics exist for shell status lines; only `matches` is part
/// of the result contract.
#[derive(Debug)]
pub struct SearchReport {
    /// Formatted match lines in traversal order
    pub matches:    Vec<String>,
    /// Number of regular files visited
    pub files_seen: usize,
    /// Number of directories discovered
    pub dirs_seen:  usize,
    /// Entries skipped as unreadable
    pub skipped:    usize,
}

const _: () = {
    assert!(MAX_DEPTH > 0);
    assert!(MATCH_PREFIX.len() == 7);
};
