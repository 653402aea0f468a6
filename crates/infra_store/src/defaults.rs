//! Startup defaults - the policy seed and rate table
//!
//! The defaults file holds eight newline-separated scalars in fixed order:
//! next policy number, basic premium, additional-car discount fraction,
//! extended-liability per-car rate, glass per-car rate, loaner per-car rate,
//! HST rate, monthly processing fee. A missing or malformed file is fatal
//! at startup. After each completed policy the file is rewritten with the
//! advanced policy number so the sequence survives across runs.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use core_kernel::{Money, PolicyNumber, Rate};
use domain_quote::RateTable;

use crate::error::StoreError;

/// Field order of the defaults file, for error reporting
const FIELDS: [&str; 8] = [
    "next policy number",
    "basic premium",
    "additional car discount",
    "extended liability per car",
    "glass coverage per car",
    "loaner car per car",
    "HST rate",
    "monthly processing fee",
];

/// The values read from the defaults file at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupDefaults {
    /// Seed of the policy sequence
    pub next_policy_number: PolicyNumber,
    /// Rate constants used for every quote this run
    pub rates: RateTable,
}

impl StartupDefaults {
    /// Loads the eight defaults values from `path`
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` naming the offending line when the file is
    /// missing, truncated, or carries an unparseable value.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::ReadDefaults {
            path: path.to_path_buf(),
            source,
        })?;
        let lines: Vec<&str> = content.lines().collect();

        let next_policy_number = parse_line::<u32>(line(&lines, 0)?, 0).map(PolicyNumber::new)?;
        let basic_premium = parse_line::<Decimal>(line(&lines, 1)?, 1).map(Money::new)?;
        let additional_car_discount = parse_line::<Decimal>(line(&lines, 2)?, 2).map(Rate::new)?;
        let extended_liability_per_car = parse_line::<Decimal>(line(&lines, 3)?, 3).map(Money::new)?;
        let glass_coverage_per_car = parse_line::<Decimal>(line(&lines, 4)?, 4).map(Money::new)?;
        let loaner_car_per_car = parse_line::<Decimal>(line(&lines, 5)?, 5).map(Money::new)?;
        let hst_rate = parse_line::<Decimal>(line(&lines, 6)?, 6).map(Rate::new)?;
        let monthly_processing_fee = parse_line::<Decimal>(line(&lines, 7)?, 7).map(Money::new)?;

        let defaults = Self {
            next_policy_number,
            rates: RateTable {
                basic_premium,
                additional_car_discount,
                extended_liability_per_car,
                glass_coverage_per_car,
                loaner_car_per_car,
                hst_rate,
                monthly_processing_fee,
            },
        };
        tracing::info!(
            path = %path.display(),
            next_policy_number = %defaults.next_policy_number,
            "Loaded startup defaults"
        );
        Ok(defaults)
    }

    /// Rewrites `path` with the current values, persisting the policy seed
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let rates = &self.rates;
        let content = format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n",
            self.next_policy_number,
            rates.basic_premium.amount(),
            rates.additional_car_discount.as_decimal(),
            rates.extended_liability_per_car.amount(),
            rates.glass_coverage_per_car.amount(),
            rates.loaner_car_per_car.amount(),
            rates.hst_rate.as_decimal(),
            rates.monthly_processing_fee.amount(),
        );
        fs::write(path, content).map_err(|source| StoreError::WriteDefaults {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            next_policy_number = %self.next_policy_number,
            "Saved startup defaults"
        );
        Ok(())
    }
}

/// Returns the defaults line at `index`, or a truncation error naming it
fn line<'a>(lines: &[&'a str], index: usize) -> Result<&'a str, StoreError> {
    lines.get(index).copied().ok_or(StoreError::TruncatedDefaults {
        line: index + 1,
        field: FIELDS[index],
    })
}

/// Parses one defaults line, reporting the 1-based line number on failure
fn parse_line<T: FromStr>(raw: &str, index: usize) -> Result<T, StoreError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| StoreError::MalformedDefaults {
            line: index + 1,
            field: FIELDS[index],
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REFERENCE_DEFAULTS: &str = "1944\n869.00\n0.25\n130.00\n86.00\n58.00\n0.15\n39.99\n";

    fn write_defaults(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_reference_defaults() {
        let file = write_defaults(REFERENCE_DEFAULTS);
        let defaults = StartupDefaults::load(file.path()).unwrap();

        assert_eq!(defaults.next_policy_number.value(), 1944);
        assert_eq!(defaults.rates.basic_premium.amount(), dec!(869.00));
        assert_eq!(
            defaults.rates.additional_car_discount.as_decimal(),
            dec!(0.25)
        );
        assert_eq!(defaults.rates.hst_rate.as_decimal(), dec!(0.15));
        assert_eq!(
            defaults.rates.monthly_processing_fee.amount(),
            dec!(39.99)
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = StartupDefaults::load(Path::new("/nonexistent/defaults.dat"));
        assert!(matches!(result, Err(StoreError::ReadDefaults { .. })));
    }

    #[test]
    fn test_truncated_file_names_missing_line() {
        let file = write_defaults("1944\n869.00\n");
        match StartupDefaults::load(file.path()) {
            Err(StoreError::TruncatedDefaults { line: 3, field }) => {
                assert_eq!(field, "additional car discount");
            }
            other => panic!("expected TruncatedDefaults, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_value_names_line() {
        let file = write_defaults("1944\nnot-a-number\n0.25\n130\n86\n58\n0.15\n39.99\n");
        match StartupDefaults::load(file.path()) {
            Err(StoreError::MalformedDefaults { line: 2, field, value }) => {
                assert_eq!(field, "basic premium");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected MalformedDefaults, got {other:?}"),
        }
    }

    #[test]
    fn test_save_round_trips() {
        let file = write_defaults(REFERENCE_DEFAULTS);
        let mut defaults = StartupDefaults::load(file.path()).unwrap();
        defaults.next_policy_number = defaults.next_policy_number.succ();

        defaults.save(file.path()).unwrap();
        let reloaded = StartupDefaults::load(file.path()).unwrap();

        assert_eq!(reloaded, defaults);
        assert_eq!(reloaded.next_policy_number.value(), 1945);
    }
}
