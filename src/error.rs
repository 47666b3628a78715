//! Error types for catalogue loading and quoting

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Ways a catalogue header can fail the fixed three-column schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("expected {expected} columns, but found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("missing required column \"{0}\"")]
    MissingColumn(&'static str),

    #[error("column \"{0}\" appears more than once")]
    DuplicateColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(
        "requested amount {amount} is invalid: must be between {min} and {max} \
         inclusive, in increments of {increment}"
    )]
    InvalidAmount {
        amount: u32,
        min: u32,
        max: u32,
        increment: u32,
    },

    #[error("file \"{}\" not found", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("malformed lender catalogue: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("lender catalogue does not contain data")]
    EmptyCatalogue,

    #[error("row {row}: invalid {column} value \"{value}\"")]
    InvalidField {
        row: u64,
        column: &'static str,
        value: String,
    },

    #[error("failed to read lender catalogue: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read config \"{}\": {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("decimal overflow while computing quote")]
    Overflow,
}
