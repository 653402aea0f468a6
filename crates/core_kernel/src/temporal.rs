//! Calendar helpers for quoting
//!
//! Claim dates and invoice dates are plain calendar dates in ISO
//! year-month-day order; the only derived date is the first payment date,
//! which falls on the first of the month after the invoice date.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// Date format used for all user-facing input and output
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Parses a calendar date in strict `YYYY-MM-DD` form
///
/// Impossible calendar dates (month 13, February 30) are rejected along
/// with any other format.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(input.to_string()))
}

/// Returns today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the first day of the month after `date`
///
/// Used as the first payment date on receipts.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // Day 1 of a real year/month pair always exists
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(date)
}
