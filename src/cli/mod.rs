//! # Command-Line Interface
//!
//! Parses arguments, resolves the commit range, runs detection and writes
//! the results.
//!
//! ## Outputs
//!
//! | Channel | Content |
//! |---------|---------|
//! | `$GITHUB_OUTPUT` | `solutions=<json>` and `paths=<json>` lines |
//! | stdout (`text`) | Resolved range and an indented solutions dump |
//! | stdout (`json`) | One object with base, head, solutions and paths |
//! | stderr | Logs (`--verbose` or `RUST_LOG`) |
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute detection.

mod app;
mod detect;
mod output;

pub use app::{run, Cli};
pub use detect::{detect, DetectOptions};
pub use output::{Output, OutputFormat};
