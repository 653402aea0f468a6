//! Core Kernel - Foundational types for the quoting system
//!
//! This crate provides the building blocks used across the quoting crates:
//! - Money and Rate types with precise decimal arithmetic
//! - Calendar helpers for claim dates and payment dates
//! - Sequential policy and claim identifiers

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{ClaimNumber, PolicyNumber};
pub use money::{Money, MoneyError, Rate};
pub use temporal::{first_of_next_month, parse_iso_date, today, TemporalError, ISO_DATE_FORMAT};
