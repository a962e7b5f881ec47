//! Error types and handling infrastructure for gesture-reader.
//!
//! The gesture core itself cannot fail: classification is total over finite
//! displacements and unknown events are absorbed. Every variant here comes from
//! the edges of the program, i.e. reading configuration, spawning `libinput` or
//! `xdotool`, parsing `debug-events` lines and writing signals out.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gesture-reader operations.
#[derive(Error, Debug)]
pub enum GestureError {
    /// Generic I/O failure on an input or output stream
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A helper process (libinput, xdotool) could not be started
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for `GestureConfig`
    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration values are inconsistent
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A recognised `debug-events` line carried a payload we could not read
    #[error("Cannot parse input line `{line}`: {message}")]
    Parse { line: String, message: String },

    /// An output sink stopped accepting signals
    #[error("Output sink `{sink}` is closed")]
    SinkClosed { sink: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for gesture-reader operations.
pub type Result<T> = std::result::Result<T, GestureError>;

impl GestureError {
    /// Create an Io error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a Config error with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a Parse error for the offending line
    pub fn parse(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether the run loop may skip this error and keep reading input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for GestureError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::BrokenPipe => Self::Io {
                message: "Output stream closed".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::Io {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::Io {
                message: "I/O operation failed".to_string(),
                source: err,
            },
        }
    }
}
