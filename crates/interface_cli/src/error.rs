//! Console interface errors

use core_kernel::CoreError;
use domain_quote::QuoteError;
use infra_store::StoreError;
use thiserror::Error;

/// Errors that end a console session
///
/// Per-field validation failures never surface here - they are handled by
/// re-prompting. These are the unrecoverable cases: lost console I/O and
/// store failures.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
