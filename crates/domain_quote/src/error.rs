//! Quoting domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the quoting domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Invalid province code
    #[error("Invalid province code: {0}")]
    InvalidProvince(String),

    /// Invalid postal code format
    #[error("Invalid postal code: {0}")]
    InvalidPostalCode(String),

    /// Invalid phone number format
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Invalid payment method selection
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the core kernel
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl QuoteError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        QuoteError::Validation(message.into())
    }
}
