use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading the postal code table or writing the answer.
#[derive(Debug, Error)]
pub enum PostinumeroError {
    /// The data file is missing or unreadable
    #[error("Failed to read postal code file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row was rejected by a `fail` strictness option
    #[error("Malformed row at line {line}: {row}")]
    MalformedRow { line: usize, row: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Failed to write a diagnostic table
    #[error("Failed to write output: {0}")]
    Output(#[from] csv::Error),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl PostinumeroError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PostinumeroError>;
