//! Customer records and the value objects they are built from
//!
//! Provinces, postal codes, and phone numbers are validated newtypes:
//! once a `CustomerRecord` exists, its fields are known-good and the record
//! is immutable for the rest of the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::coverage::CoverageSelections;
use crate::error::QuoteError;

/// Canadian provinces and territories, by two-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    AB,
    BC,
    MB,
    NB,
    NL,
    NS,
    NT,
    NU,
    ON,
    PE,
    QC,
    SK,
    YT,
}

impl Province {
    /// Returns the two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Province::AB => "AB",
            Province::BC => "BC",
            Province::MB => "MB",
            Province::NB => "NB",
            Province::NL => "NL",
            Province::NS => "NS",
            Province::NT => "NT",
            Province::NU => "NU",
            Province::ON => "ON",
            Province::PE => "PE",
            Province::QC => "QC",
            Province::SK => "SK",
            Province::YT => "YT",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Province {
    type Err = QuoteError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AB" => Ok(Province::AB),
            "BC" => Ok(Province::BC),
            "MB" => Ok(Province::MB),
            "NB" => Ok(Province::NB),
            "NL" => Ok(Province::NL),
            "NS" => Ok(Province::NS),
            "NT" => Ok(Province::NT),
            "NU" => Ok(Province::NU),
            "ON" => Ok(Province::ON),
            "PE" => Ok(Province::PE),
            "QC" => Ok(Province::QC),
            "SK" => Ok(Province::SK),
            "YT" => Ok(Province::YT),
            _ => Err(QuoteError::InvalidProvince(s.to_string())),
        }
    }
}

/// A Canadian postal code, stored uppercase without spaces
///
/// Format: six characters alternating letter/digit starting with a letter
/// (positions 0, 2, 4 alphabetic; 1, 3, 5 numeric).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parses and normalizes a postal code
    pub fn parse(input: &str) -> Result<Self, QuoteError> {
        let chars: Vec<char> = input.chars().collect();
        let well_formed = chars.len() == 6
            && chars.iter().enumerate().all(|(i, c)| {
                if i % 2 == 0 {
                    c.is_ascii_alphabetic()
                } else {
                    c.is_ascii_digit()
                }
            });
        if !well_formed {
            return Err(QuoteError::InvalidPostalCode(input.to_string()));
        }
        Ok(Self(input.to_ascii_uppercase()))
    }

    /// Returns the normalized code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses a phone number: exactly ten ASCII digits
    pub fn parse(input: &str) -> Result<Self, QuoteError> {
        if input.len() != 10 || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(QuoteError::InvalidPhoneNumber(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// Returns the digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The customer and vehicle-coverage data collected once per policy
///
/// Immutable after collection; vehicle count is at least one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// First name, title-cased
    pub first_name: String,
    /// Last name, title-cased
    pub last_name: String,
    /// Street address, word-capitalized
    pub street_address: String,
    /// City, title-cased
    pub city: String,
    /// Province code
    pub province: Province,
    /// Postal code
    pub postal_code: PostalCode,
    /// Phone number
    pub phone_number: PhoneNumber,
    /// Number of vehicles being insured (>= 1)
    pub vehicle_count: u32,
    /// Optional coverage selections
    pub coverages: CoverageSelections,
}

impl CustomerRecord {
    /// Returns "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns "City, PR, A1B2C3" as shown on receipts
    pub fn city_line(&self) -> String {
        format!("{}, {}, {}", self.city, self.province, self.postal_code)
    }
}
