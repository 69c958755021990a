//! Directory crawler implementation

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::MAX_DEPTH;

/// Directory crawler bounded to `MAX_DEPTH` levels below the root
///
/// Per-entry read failures are absorbed: an unreadable file or
/// subdirectory is counted and skipped, never surfaced as an error.
#[derive(Debug)]
pub struct Crawler {
    /// Queue of directories to process with their depths
    queue:      Vec<(PathBuf, usize)>,
    /// Number of regular files returned
    file_count: usize,
    /// Total number of directories discovered
    dir_count:  usize,
    /// Entries skipped because they could not be read
    skipped:    usize,
}

impl Crawler {
    /// Create a new crawler starting at the given path
    ///
    /// # Errors
    /// Returns [`Error::InvalidRoot`] if the path does not exist, is not
    /// a directory, or cannot be read. This is the only failure a crawl
    /// can produce; everything after a successful start is best-effort.
    pub fn new(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(Error::invalid_root(&format!(
                "Directory not found: {}",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(Error::invalid_root(&format!("Not a directory: {}", root.display())));
        }
        // Probe readability now so an unreadable root fails the whole
        // search instead of silently producing zero results.
        fs::read_dir(root).map_err(|e| {
            Error::invalid_root(&format!("Cannot read {}: {e}", root.display()))
        })?;

        Ok(Self {
            queue:      vec![(root.to_path_buf(), 0)],
            file_count: 0,
            dir_count:  1,
            skipped:    0,
        })
    }

    /// Get the current progress of the crawl
    ///
    /// Returns a tuple of:
    /// - Number of files returned so far
    /// - Number of directories discovered
    /// - Number of entries skipped as unreadable
    #[must_use = "Progress information should be used for monitoring"]
    pub const fn progress(&self) -> (usize, usize, usize) {
        (self.file_count, self.dir_count, self.skipped)
    }

    /// Process the next directory in the queue
    ///
    /// Returns the regular files directly inside it, in the order the
    /// filesystem yields them. Subdirectories are queued for later
    /// processing unless their entries would lie beyond `MAX_DEPTH`.
    /// Returns `None` once the queue is exhausted.
    pub fn process_next(&mut self) -> Option<Vec<PathBuf>> {
        loop {
            let (dir, depth) = self.queue.pop()?;

            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(_) => {
                    // Directory vanished or became unreadable mid-crawl
                    self.skipped += 1;
                    continue;
                },
            };

            let mut files = Vec::new();

            for entry in entries {
                let Ok(entry) = entry else {
                    self.skipped += 1;
                    continue;
                };
                let Ok(file_type) = entry.file_type() else {
                    self.skipped += 1;
                    continue;
                };

                if file_type.is_dir() {
                    self.dir_count += 1;
                    // A directory at MAX_DEPTH is seen but not descended
                    // into; its entries would exceed the bound.
                    if depth + 1 < MAX_DEPTH {
                        self.queue.push((entry.path(), depth + 1));
                    }
                } else {
                    self.file_count += 1;
                    files.push(entry.path());
                }
            }

            return Some(files);
        }
    }
}
