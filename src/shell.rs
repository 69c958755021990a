//! Shell-side helpers shared by any front end
//!
//! The engine renders matches as lines with a fixed `Found: ` prefix.
//! A shell displays those lines and, on user interaction, parses one
//! back into a path and hands it to a [`FileOpener`]. Keeping the
//! opener behind a trait keeps OS integration out of the core and lets
//! tests substitute a recording fake.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::types::MATCH_PREFIX;

/// Message rendered when a search succeeds with zero matches
pub const NO_MATCHES_MESSAGE: &str = "No files found matching the search criteria.";

/// Host capability to open a file with its default application
pub trait FileOpener {
    /// Ask the host to open `path` with the associated application
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the path no longer exists or the host
    /// refuses; a vanished file must surface an error, never fail
    /// silently.
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opener backed by the platform's default-application launcher
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::open(&format!("No such file: {}", path.display())));
        }

        let status = launcher(path)
            .status()
            .map_err(|e| Error::open(&format!("Failed to start opener: {e}")))?;
        if !status.success() {
            return Err(Error::open(&format!(
                "Opener failed for {}: {status}",
                path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn launcher(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(windows)]
fn launcher(path: &Path) -> Command {
    // Empty first argument is the window title slot of `start`
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launcher(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Extract the path from a rendered match line
///
/// Accepts only lines carrying the exact `Found: ` prefix; everything
/// else is rejected so arbitrary display text can never be mistaken
/// for a path.
#[must_use]
pub fn parse_match_line(line: &str) -> Option<&Path> {
    let rest = line.strip_prefix(MATCH_PREFIX)?.trim();
    if rest.is_empty() {
        return None;
    }
    Some(Path::new(rest))
}

/// Render a completed search for display
///
/// Zero matches is a legitimate outcome and renders as an explanatory
/// message, not an error.
#[must_use]
pub fn render_results(lines: &[String]) -> String {
    if lines.is_empty() {
        NO_MATCHES_MESSAGE.to_owned()
    } else {
        lines.join("\n")
    }
}

/// Parse a match line and open the referenced file
///
/// # Errors
/// Returns [`Error::Input`] for a line without the match prefix, or
/// whatever the opener reports for the parsed path.
pub fn open_match_line(line: &str, opener: &impl FileOpener) -> Result<()> {
    let path = parse_match_line(line)
        .ok_or_else(|| Error::input(&format!("Not a match line: {line}")))?;
    opener.open(path)
}
