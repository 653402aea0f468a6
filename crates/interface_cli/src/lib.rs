//! Console interface for the quoting system
//!
//! This crate owns everything between the operator and the domain:
//! - the closed enumeration of input validation rules
//! - the blocking prompt/retry console, generic over its streams
//! - interactive collection of customer, claim, and payment data
//! - receipt rendering
//! - the per-run session loop and the `quotedesk` binary

pub mod collect;
pub mod error;
pub mod prompt;
pub mod receipt;
pub mod rules;
pub mod session;

pub use error::CliError;
pub use prompt::Console;
pub use receipt::Receipt;
pub use rules::Rule;
pub use session::QuoteSession;
