#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
//! `NameFind` - Simple file search tool that finds files by name.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_cargo::style::CLAP_STYLING;
use namefind::error::{Error, Result};
use namefind::shell::{self, SystemOpener};
use namefind::types::{MAX_DEPTH, SearchRequest};

/// CLI arguments for `NameFind`
#[derive(Parser, Debug)]
#[command(author, version, about, styles = CLAP_STYLING)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Search a directory for files by name
    Search {
        /// Substring to look for in file names (case-sensitive)
        pattern: String,
        /// Directory to search in
        #[arg(default_value = ".")]
        dir:     PathBuf,
    },
    /// Open a found file with its default application
    Open {
        /// A match line exactly as printed by `search`
        line: String,
    },
}

/// Run a search and render its outcome
fn search_files(pattern: String, dir: PathBuf) -> Result<()> {
    println!("Searching for: {pattern} in {}", dir.display());

    let request = SearchRequest { root: dir, pattern };
    let report = request.run()?;

    println!();
    println!("{}", shell::render_results(&report.matches));

    if report.matches.is_empty() {
        println!("Tips:");
        println!("  - Matching is case-sensitive; check the pattern's casing");
        println!("  - Only the first {MAX_DEPTH} directory levels below the root are searched");
    } else {
        println!(
            "\n{} matches across {} directories ({} files seen, {} entries skipped)",
            report.matches.len(),
            report.dirs_seen,
            report.files_seen,
            report.skipped
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Search { pattern, dir } => {
            if pattern.is_empty() {
                Err(Error::input("Please enter a valid file name."))
            } else {
                search_files(pattern, dir)
            }
        },
        Command::Open { line } => shell::open_match_line(&line, &SystemOpener),
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}
