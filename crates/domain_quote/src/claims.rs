//! Prior-claim records and the per-policy claim ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimNumber, Money};

/// A single prior claim against the customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Claim number, unique within the ledger
    pub number: ClaimNumber,
    /// Date of the claim
    pub date: NaiveDate,
    /// Claim amount
    pub amount: Money,
}

/// Outcome of a ledger upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new claim record was appended
    Inserted,
    /// An existing claim's amount was replaced
    AmountReplaced,
}

/// The claims collected for one policy session
///
/// Keyed by claim number with insertion order preserved. Re-entering an
/// existing number replaces only that claim's amount - the original date is
/// kept and the ledger does not grow (last-write-wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimLedger {
    records: Vec<ClaimRecord>,
}

impl ClaimLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a claim, or replaces the amount of an existing one
    pub fn upsert(&mut self, number: ClaimNumber, date: NaiveDate, amount: Money) -> UpsertOutcome {
        if let Some(existing) = self.records.iter_mut().find(|c| c.number == number) {
            existing.amount = amount;
            return UpsertOutcome::AmountReplaced;
        }
        self.records.push(ClaimRecord {
            number,
            date,
            amount,
        });
        UpsertOutcome::Inserted
    }

    /// Looks up a claim by number
    pub fn get(&self, number: ClaimNumber) -> Option<&ClaimRecord> {
        self.records.iter().find(|c| c.number == number)
    }

    /// Returns the records in insertion order
    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    /// Number of distinct claims
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no claims were recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn number(n: u32) -> ClaimNumber {
        ClaimNumber::new(n).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_then_lookup() {
        let mut ledger = ClaimLedger::new();
        let outcome = ledger.upsert(number(12), date(2023, 6, 1), Money::new(dec!(850)));
        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(
            ledger.get(number(12)).unwrap().amount.amount(),
            dec!(850)
        );
    }

    #[test]
    fn test_duplicate_replaces_amount_keeps_date() {
        let mut ledger = ClaimLedger::new();
        ledger.upsert(number(12), date(2023, 6, 1), Money::new(dec!(850)));
        let outcome = ledger.upsert(number(12), date(2024, 1, 15), Money::new(dec!(900)));

        assert_eq!(outcome, UpsertOutcome::AmountReplaced);
        assert_eq!(ledger.len(), 1);
        let claim = ledger.get(number(12)).unwrap();
        assert_eq!(claim.amount.amount(), dec!(900));
        assert_eq!(claim.date, date(2023, 6, 1));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ledger = ClaimLedger::new();
        ledger.upsert(number(9), date(2022, 2, 2), Money::new(dec!(100)));
        ledger.upsert(number(3), date(2023, 3, 3), Money::new(dec!(200)));
        ledger.upsert(number(9), date(2024, 4, 4), Money::new(dec!(150)));

        let numbers: Vec<u32> = ledger.records().iter().map(|c| c.number.value()).collect();
        assert_eq!(numbers, vec![9, 3]);
    }
}
