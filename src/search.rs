//! Search engine implementation

use std::path::Path;

use crate::crawler::Crawler;
use crate::error::Result;
use crate::types::{MATCH_PREFIX, SearchReport, SearchRequest};

impl SearchRequest {
    /// Run the request and collect matches plus traversal statistics
    ///
    /// # Errors
    /// Returns [`crate::error::Error::InvalidRoot`] if the traversal
    /// cannot start. Entries that become unreadable mid-walk are
    /// skipped silently and only show up in the skip counter.
    pub fn run(&self) -> Result<SearchReport> {
        let mut crawler = Crawler::new(&self.root)?;
        let mut matches = Vec::new();

        while let Some(files) = crawler.process_next() {
            for file in files {
                if file_name_contains(&file, &self.pattern) {
                    matches.push(format_match(&file));
                }
            }
        }

        let (files_seen, dirs_seen, skipped) = crawler.progress();
        Ok(SearchReport { matches, files_seen, dirs_seen, skipped })
    }
}

/// Search a directory tree for files whose name contains `pattern`
///
/// Walks at most [`crate::types::MAX_DEPTH`] levels below `root` and
/// returns one formatted line per matching regular file, in traversal
/// order. The order follows the filesystem's directory-entry order and
/// is not stable across platforms. An empty vector means no matches and
/// is a success, not a failure.
///
/// The pattern is compared against the file-name component only, as a
/// case-sensitive literal substring. Directory names are never matched.
///
/// # Errors
/// Returns [`crate::error::Error::InvalidRoot`] if the traversal cannot
/// start.
pub fn search(root: &Path, pattern: &str) -> Result<Vec<String>> {
    let request =
        SearchRequest { root: root.to_path_buf(), pattern: pattern.to_owned() };
    request.run().map(|report| report.matches)
}

/// Format a matched path as a renderable match line
#[must_use]
pub fn format_match(path: &Path) -> String {
    format!("{MATCH_PREFIX}{}", path.display())
}

/// Check whether the file-name component contains the pattern
fn file_name_contains(path: &Path, pattern: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(pattern))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::error::Error;
    use crate::types::MAX_DEPTH;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    /// Tree from the worked example: a/target.txt, b/other.txt, and
    /// target2.txt buried one level past the depth bound.
    fn example_tree() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir(root.join("b")).unwrap();
        touch(&root.join("a/target.txt"));
        touch(&root.join("b/other.txt"));

        let deep = root.join("a/c/d/e/f");
        fs::create_dir_all(&deep).unwrap();
        touch(&deep.join("target2.txt"));

        (temp_dir, root)
    }

    #[test]
    fn test_example_tree_pattern_match() {
        let (_guard, root) = example_tree();

        let results = search(&root, "target").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0], format!("Found: {}", root.join("a/target.txt").display()));
    }

    #[test]
    fn test_example_tree_no_match() {
        let (_guard, root) = example_tree();

        let results = search(&root, "zzz").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_match_count_within_depth() {
        let temp_dir = TempDir::new().unwrap();

        let mut dir = temp_dir.path().to_path_buf();
        for i in 0..=MAX_DEPTH {
            touch(&dir.join(format!("note_{i}.md")));
            touch(&dir.join("unrelated.rs"));
            dir = dir.join(format!("sub_{i}"));
            fs::create_dir(&dir).unwrap();
        }

        // One "note" file per visited level, none past the bound
        let results = search(temp_dir.path(), "note").unwrap();
        assert_eq!(results.len(), MAX_DEPTH);
    }

    #[test]
    fn test_every_line_has_prefix_and_live_path() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("report.txt"));
        touch(&temp_dir.path().join("report_final.txt"));

        let results = search(temp_dir.path(), "report").unwrap();
        assert_eq!(results.len(), 2);
        for line in &results {
            let path = line.strip_prefix("Found: ").expect("line must carry the prefix");
            assert!(Path::new(path).exists());
        }
    }

    #[test]
    fn test_directories_are_never_matched() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("target_dir")).unwrap();
        touch(&temp_dir.path().join("target_dir/inner.txt"));

        let results = search(temp_dir.path(), "target").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_root_is_a_failure() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nowhere");

        match search(&missing, "anything") {
            Err(Error::InvalidRoot(_)) => (),
            other => panic!("Expected InvalidRoot error, got {other:?}"),
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("target.txt"));

        assert!(search(temp_dir.path(), "Target").unwrap().is_empty());
        assert_eq!(search(temp_dir.path(), "target").unwrap().len(), 1);
    }

    #[test]
    fn test_substring_matches_anywhere_in_name() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("my_target_v2.txt"));

        let results = search(temp_dir.path(), "target").unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_pattern_does_not_match_directory_components() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("target")).unwrap();
        touch(&temp_dir.path().join("target/plain.txt"));

        // "target" only appears in the parent directory, not the file name
        let results = search(temp_dir.path(), "target").unwrap();
        assert!(results.is_empty());
    }
}
