//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Parsing never fails: malformed log lines are absorbed by the parser,
//! so the only library errors are on the input side.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the metrics log
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}
