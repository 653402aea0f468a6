//! Store errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the flat-file store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Defaults file could not be read
    #[error("Failed to read defaults file {path}: {source}")]
    ReadDefaults {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Defaults file could not be written back
    #[error("Failed to write defaults file {path}: {source}")]
    WriteDefaults {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A defaults line is present but not parseable
    #[error("Malformed defaults file: line {line} ({field}) is not a valid value: {value:?}")]
    MalformedDefaults {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// The defaults file ended before all eight values were read
    #[error("Defaults file is truncated: missing line {line} ({field})")]
    TruncatedDefaults { line: usize, field: &'static str },

    /// Register append failed
    #[error("Failed to append to policy register {path}: {source}")]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Register record could not be encoded
    #[error("Failed to encode register record: {0}")]
    Encode(#[from] serde_json::Error),
}
