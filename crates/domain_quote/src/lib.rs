//! Quoting domain - the pure logic behind a policy quote
//!
//! This crate contains the value objects and calculations for quoting:
//! - Customer records with validated provinces, postal codes, and phones
//! - Optional coverage selections
//! - Premium, tax, and total-cost calculation from a configured rate table
//! - The per-policy claim ledger with last-write-wins upserts
//! - Payment methods and installment plans
//!
//! Everything here is deterministic and side-effect free; console I/O lives
//! in `interface_cli` and file I/O in `infra_store`.

pub mod claims;
pub mod coverage;
pub mod customer;
pub mod error;
pub mod payment;
pub mod premium;

pub use claims::{ClaimLedger, ClaimRecord, UpsertOutcome};
pub use coverage::{Coverage, CoverageSelections};
pub use customer::{CustomerRecord, PhoneNumber, PostalCode, Province};
pub use error::QuoteError;
pub use payment::{PaymentMethod, PaymentPlan};
pub use premium::{CostSummary, PremiumBreakdown, RateTable, NUM_INSTALLMENTS};
