//! Append-only policy register
//!
//! One self-describing JSON record per line, appended after each completed
//! policy. The record carries a schema version so the format can evolve
//! without breaking existing files. There is no read-back or indexing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PolicyNumber};
use domain_quote::{ClaimLedger, CostSummary, CustomerRecord, PaymentPlan, PremiumBreakdown};

use crate::error::StoreError;

/// Version written into every register line
pub const REGISTER_SCHEMA_VERSION: u32 = 1;

/// Everything persisted for one completed policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRecord {
    /// Record format version
    pub schema_version: u32,
    /// Assigned policy number
    pub policy_number: PolicyNumber,
    /// Invoice date
    pub issued_on: NaiveDate,
    /// Customer, vehicle count, and coverage selections as collected
    pub customer: CustomerRecord,
    /// Prior claims recorded during the session
    pub claims: ClaimLedger,
    /// Itemized premium
    pub premium: PremiumBreakdown,
    /// HST charged on the total premium
    pub hst: Money,
    /// Total premium plus HST
    pub total_cost: Money,
    /// Selected payment plan
    pub payment: PaymentPlan,
}

impl RegisterRecord {
    /// Stamps a record with the current schema version
    pub fn new(
        policy_number: PolicyNumber,
        issued_on: NaiveDate,
        customer: CustomerRecord,
        claims: ClaimLedger,
        premium: PremiumBreakdown,
        costs: CostSummary,
        payment: PaymentPlan,
    ) -> Self {
        Self {
            schema_version: REGISTER_SCHEMA_VERSION,
            policy_number,
            issued_on,
            customer,
            claims,
            premium,
            hst: costs.hst,
            total_cost: costs.total_cost,
            payment,
        }
    }
}

/// Appender for the policy register file
#[derive(Debug, Clone)]
pub struct PolicyRegister {
    path: PathBuf,
}

impl PolicyRegister {
    /// Creates a register over `path`; the file is created on first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the register path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a single JSON line
    pub fn append(&self, record: &RegisterRecord) -> Result<(), StoreError> {
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Append {
                path: self.path.clone(),
                source,
            })?;
        writeln!(file, "{line}").map_err(|source| StoreError::Append {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(
            policy_number = %record.policy_number,
            path = %self.path.display(),
            "Policy record appended to register"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{ClaimNumber, Rate};
    use domain_quote::{
        CostSummary, CoverageSelections, PaymentMethod, PaymentPlan, PhoneNumber, PostalCode,
        PremiumBreakdown, Province, RateTable,
    };
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn sample_record(policy: u32) -> RegisterRecord {
        let rates = RateTable {
            basic_premium: Money::new(dec!(500)),
            additional_car_discount: Rate::new(dec!(0.25)),
            extended_liability_per_car: Money::new(dec!(50)),
            glass_coverage_per_car: Money::new(dec!(30)),
            loaner_car_per_car: Money::new(dec!(20)),
            hst_rate: Rate::new(dec!(0.13)),
            monthly_processing_fee: Money::new(dec!(5)),
        };
        let customer = CustomerRecord {
            first_name: "Gord".to_string(),
            last_name: "Parsons".to_string(),
            street_address: "4 Duckworth St".to_string(),
            city: "St. John's".to_string(),
            province: Province::NL,
            postal_code: PostalCode::parse("A1C5X4").unwrap(),
            phone_number: PhoneNumber::parse("7095550144").unwrap(),
            vehicle_count: 2,
            coverages: CoverageSelections::all(),
        };
        let premium =
            PremiumBreakdown::calculate(&rates, customer.vehicle_count, &customer.coverages)
                .unwrap();
        let summary = CostSummary::assess(premium.total_premium, rates.hst_rate);
        let payment = PaymentPlan::build(
            PaymentMethod::DownPayment,
            summary.total_cost,
            Some(Money::new(dec!(100))),
            &rates,
        )
        .unwrap();
        let mut claims = ClaimLedger::new();
        claims.upsert(
            ClaimNumber::new(12).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            Money::new(dec!(850)),
        );

        RegisterRecord::new(
            PolicyNumber::new(policy),
            NaiveDate::from_ymd_opt(2024, 3, 19).unwrap(),
            customer,
            claims,
            premium,
            summary,
            payment,
        )
    }

    #[test]
    fn test_append_writes_one_json_line_per_policy() {
        let dir = tempdir().unwrap();
        let register = PolicyRegister::new(dir.path().join("register.jsonl"));

        register.append(&sample_record(1944)).unwrap();
        register.append(&sample_record(1945)).unwrap();

        let content = std::fs::read_to_string(register.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: RegisterRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.schema_version, REGISTER_SCHEMA_VERSION);
        assert_eq!(first.policy_number.value(), 1944);
        // Actual customer location values are persisted
        assert_eq!(first.customer.city, "St. John's");
        assert_eq!(first.customer.province, Province::NL);
        assert_eq!(first.customer.postal_code.as_str(), "A1C5X4");
    }

    #[test]
    fn test_append_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fresh.jsonl");
        assert!(!path.exists());

        PolicyRegister::new(&path).append(&sample_record(1)).unwrap();
        assert!(path.exists());
    }
}
