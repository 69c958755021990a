//! `NameFind` - Simple file search tool that finds files by name.

#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]

pub mod crawler;
pub mod error;
pub mod search;
pub mod shell;
pub mod types;
