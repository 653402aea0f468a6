//! Input validation rules
//!
//! A closed enumeration of the checks applied to raw console input. Each
//! variant is a predicate selected by exhaustive match, so there is no
//! unknown-rule failure path. Rules that mirror a domain value object
//! (phone, postal code, province, date) delegate to its parser, keeping a
//! single source of truth for each format.

use std::str::FromStr;

use rust_decimal::Decimal;

use core_kernel::parse_iso_date;
use domain_quote::{PhoneNumber, PostalCode, Province};

/// A validation rule for one line of console input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any non-blank input
    NotBlank,
    /// Letters, hyphens, apostrophes, periods, and spaces only
    Name,
    /// Exactly ten ASCII digits
    PhoneNumber,
    /// Six characters alternating letter/digit starting with a letter
    PostalCode,
    /// A real calendar date in YYYY-MM-DD form
    Date,
    /// A two-letter province or territory code
    Province,
    /// Y or N, case-insensitive
    YesNo,
    /// An all-digit integer strictly greater than zero
    PositiveInteger,
    /// A decimal number strictly greater than zero
    PositiveFloat,
}

impl Rule {
    /// Returns whether `input` satisfies this rule
    ///
    /// Blank input fails every rule.
    pub fn accepts(&self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        match self {
            Rule::NotBlank => true,
            Rule::Name => input
                .chars()
                .all(|c| c.is_ascii_alphabetic() || matches!(c, '-' | '\'' | '.' | ' ')),
            Rule::PhoneNumber => PhoneNumber::parse(input).is_ok(),
            Rule::PostalCode => PostalCode::parse(input).is_ok(),
            Rule::Date => parse_iso_date(input).is_ok(),
            Rule::Province => Province::from_str(input).is_ok(),
            Rule::YesNo => {
                let upper = input.to_ascii_uppercase();
                upper == "Y" || upper == "N"
            }
            Rule::PositiveInteger => {
                input.chars().all(|c| c.is_ascii_digit())
                    && input.parse::<u32>().map(|n| n > 0).unwrap_or(false)
            }
            Rule::PositiveFloat => Decimal::from_str(input)
                .map(|d| d > Decimal::ZERO)
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fails_every_rule() {
        let rules = [
            Rule::NotBlank,
            Rule::Name,
            Rule::PhoneNumber,
            Rule::PostalCode,
            Rule::Date,
            Rule::Province,
            Rule::YesNo,
            Rule::PositiveInteger,
            Rule::PositiveFloat,
        ];
        for rule in rules {
            assert!(!rule.accepts(""), "{rule:?} accepted empty input");
            assert!(!rule.accepts("   "), "{rule:?} accepted whitespace");
        }
    }

    #[test]
    fn test_name_characters() {
        assert!(Rule::Name.accepts("Mary Jane"));
        assert!(Rule::Name.accepts("O'Brien-Smith Jr."));
        assert!(!Rule::Name.accepts("R2D2"));
        assert!(!Rule::Name.accepts("name!"));
    }

    #[test]
    fn test_positive_integer() {
        assert!(Rule::PositiveInteger.accepts("3"));
        assert!(Rule::PositiveInteger.accepts("007"));
        assert!(!Rule::PositiveInteger.accepts("0"));
        assert!(!Rule::PositiveInteger.accepts("-3"));
        assert!(!Rule::PositiveInteger.accepts("3.5"));
        assert!(!Rule::PositiveInteger.accepts("three"));
    }

    #[test]
    fn test_positive_float() {
        assert!(Rule::PositiveFloat.accepts("850.25"));
        assert!(Rule::PositiveFloat.accepts("0.01"));
        assert!(!Rule::PositiveFloat.accepts("0"));
        assert!(!Rule::PositiveFloat.accepts("-12.50"));
        assert!(!Rule::PositiveFloat.accepts("12.5x"));
    }
}
