//! Unified error types for anfconv.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for conversion operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad, missing or unknown command-line parameters.
    #[error("Usage error: {0}")]
    Usage(String),

    /// File extension outside the accepted set.
    #[error("Format {0} is not supported")]
    UnsupportedFormat(String),

    /// Structural violation of a format's grammar.
    #[error("File format .{format} not correct on line {line}: {message}")]
    Format {
        format: &'static str,
        line: usize,
        message: String,
    },

    /// A monomial the target format cannot encode.
    #[error("Monomial {monomial} has degree {degree}, the .{format} writer supports at most {max}")]
    UnsupportedDegree {
        format: &'static str,
        monomial: String,
        degree: usize,
        max: usize,
    },

    /// Input path does not exist.
    #[error("File {} not found", .0.display())]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Builds a [`Error::Format`] for the given format extension and 1-based line.
    pub fn format(format: &'static str, line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            format,
            line,
            message: message.into(),
        }
    }

    /// Whether the error should be followed by the usage text.
    #[must_use]
    pub fn wants_help(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::UnsupportedFormat(_))
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
