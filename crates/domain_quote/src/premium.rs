//! Premium, tax, and total-cost calculation
//!
//! All calculations are pure functions of the rate table and the collected
//! data. Nothing here rounds: presentation rounding happens at the receipt,
//! and the register stores full-precision values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::coverage::{Coverage, CoverageSelections};
use crate::error::QuoteError;

/// Number of installments a non-full payment plan is spread across
pub const NUM_INSTALLMENTS: u32 = 8;

/// Rate constants loaded once at startup and passed explicitly
///
/// Mirrors the defaults file: basic premium, additional-car discount, three
/// per-car coverage rates, HST rate, and the monthly processing fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Premium for the first car
    pub basic_premium: Money,
    /// Discount fraction applied to each car after the first
    pub additional_car_discount: Rate,
    /// Extra liability coverage, per car
    pub extended_liability_per_car: Money,
    /// Glass coverage, per car
    pub glass_coverage_per_car: Money,
    /// Loaner car coverage, per car
    pub loaner_car_per_car: Money,
    /// Harmonized sales tax rate
    pub hst_rate: Rate,
    /// Fee added to every monthly installment
    pub monthly_processing_fee: Money,
}

impl RateTable {
    /// Returns the per-car rate for a coverage
    pub fn per_car_rate(&self, coverage: Coverage) -> Money {
        match coverage {
            Coverage::ExtendedLiability => self.extended_liability_per_car,
            Coverage::GlassCoverage => self.glass_coverage_per_car,
            Coverage::LoanerCar => self.loaner_car_per_car,
        }
    }
}

/// The itemized premium for one policy
///
/// Derived once from the rate table and the customer's selections; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// First car at the full rate, each additional car discounted
    pub base_premium: Money,
    /// Extra liability add-on (zero when not selected)
    pub extended_liability_cost: Money,
    /// Glass coverage add-on (zero when not selected)
    pub glass_coverage_cost: Money,
    /// Loaner car add-on (zero when not selected)
    pub loaner_car_cost: Money,
    /// Base premium plus all selected add-ons
    pub total_premium: Money,
}

impl PremiumBreakdown {
    /// Calculates the premium for `vehicle_count` cars with the given selections
    ///
    /// The first car is charged the basic premium in full; each additional
    /// car is charged the basic premium reduced by the additional-car
    /// discount. Each selected coverage adds its per-car rate times the
    /// vehicle count; the three coverages are independent.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `vehicle_count` is zero.
    pub fn calculate(
        rates: &RateTable,
        vehicle_count: u32,
        selections: &CoverageSelections,
    ) -> Result<Self, QuoteError> {
        if vehicle_count == 0 {
            return Err(QuoteError::validation(
                "At least one vehicle must be insured",
            ));
        }

        let additional_cars = Decimal::from(vehicle_count - 1);
        let discounted_factor = rates.additional_car_discount.complement().as_decimal();
        let base_premium =
            rates.basic_premium + rates.basic_premium.multiply(discounted_factor * additional_cars);

        let addon = |coverage: Coverage| -> Money {
            if selections.is_selected(coverage) {
                rates
                    .per_car_rate(coverage)
                    .multiply(Decimal::from(vehicle_count))
            } else {
                Money::zero()
            }
        };

        let extended_liability_cost = addon(Coverage::ExtendedLiability);
        let glass_coverage_cost = addon(Coverage::GlassCoverage);
        let loaner_car_cost = addon(Coverage::LoanerCar);

        let total_premium =
            base_premium + extended_liability_cost + glass_coverage_cost + loaner_car_cost;

        Ok(Self {
            base_premium,
            extended_liability_cost,
            glass_coverage_cost,
            loaner_car_cost,
            total_premium,
        })
    }

    /// Returns the add-on cost line for a coverage
    pub fn addon_cost(&self, coverage: Coverage) -> Money {
        match coverage {
            Coverage::ExtendedLiability => self.extended_liability_cost,
            Coverage::GlassCoverage => self.glass_coverage_cost,
            Coverage::LoanerCar => self.loaner_car_cost,
        }
    }
}

/// Tax and total cost derived from a total premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    /// HST charged on the total premium
    pub hst: Money,
    /// Total premium plus HST
    pub total_cost: Money,
}

impl CostSummary {
    /// Applies the HST rate to a total premium
    pub fn assess(total_premium: Money, hst_rate: Rate) -> Self {
        let hst = hst_rate.apply(&total_premium);
        Self {
            hst,
            total_cost: total_premium + hst,
        }
    }
}
