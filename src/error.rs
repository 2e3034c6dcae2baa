//! Error types for literate-rs operations.
//!
//! This module provides the error hierarchy using `thiserror`. The core
//! transforms (filtering, parsing, rendering) never fail; every variant here
//! originates at the filesystem, subprocess or CLI boundary.

use thiserror::Error;

/// Result type alias for literate-rs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// External notebook execution errors.
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors (missing output directory, unusable name).
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Notebook serialization errors.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// Errors raised by the external notebook executor.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The executor program could not be started.
    #[error("failed to start {program}: {reason}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Reason for failure.
        reason: String,
    },

    /// The executor ran but reported failure.
    #[error("{program} exited with {status}")]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Exit status as reported by the OS.
        status: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
