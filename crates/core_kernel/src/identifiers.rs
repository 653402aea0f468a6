//! Strongly-typed identifiers for domain entities
//!
//! Policy and claim numbers are small sequential integers rather than
//! opaque UUIDs; newtype wrappers keep them from being mixed with vehicle
//! counts or other plain numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A policy number from the monotonically increasing policy sequence
///
/// The sequence is seeded from the defaults file at startup and advanced
/// exactly once per completed policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyNumber(u32);

impl PolicyNumber {
    /// Creates a policy number from its integer value
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the next policy number in the sequence
    pub fn succ(&self) -> PolicyNumber {
        PolicyNumber(self.0 + 1)
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PolicyNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(PolicyNumber)
            .map_err(|_| CoreError::validation(format!("Invalid policy number: {s}")))
    }
}

/// A customer-supplied claim number
///
/// Claim numbers are strictly positive and unique within one policy's
/// claim ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimNumber(u32);

impl ClaimNumber {
    /// Creates a claim number, rejecting zero
    pub fn new(value: u32) -> Result<Self, CoreError> {
        if value == 0 {
            return Err(CoreError::validation("Claim number must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying integer value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClaimNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClaimNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // All-digit check keeps signs and whitespace out ("+5" parses as u32)
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::validation(format!("Invalid claim number: {s}")));
        }
        let value: u32 = s
            .parse()
            .map_err(|_| CoreError::validation(format!("Invalid claim number: {s}")))?;
        ClaimNumber::new(value)
    }
}
