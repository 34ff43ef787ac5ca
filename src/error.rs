//! Error types for the I/O around README generation.
//!
//! Rendering itself cannot fail; these cover reading answers, writing the document, and the
//! interactive session.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting answers or writing the README.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The terminal session failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// An answers file could not be decoded or encoded.
    #[error("invalid answers file {}: {source}", .path.display())]
    Answers {
        /// Answers file being processed.
        path: PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },

    /// The user left the wizard before finishing.
    #[error("cancelled before the README was generated")]
    Cancelled,
}

/// Result alias for fallible README operations.
pub type Result<T> = std::result::Result<T, Error>;
