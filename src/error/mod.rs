//! Error types and Result aliases for Dirscout.
//!
//! This module defines the error hierarchy used throughout the crate.
//! All public fallible operations return `Result<T, Error>` or `Result<T>`.
//!
//! Recoverable filesystem conditions (permission denied on a subtree,
//! symlink cycles, the cache capacity cutoff) never appear here: they are
//! handled at the point of occurrence by skipping and continuing.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using Dirscout's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Dirscout operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid caller-supplied argument, rejected before any traversal.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed glob pattern.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Target path does not exist.
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not-found error for the given path.
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
