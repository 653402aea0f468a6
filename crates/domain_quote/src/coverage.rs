//! Optional vehicle coverages
//!
//! Three independent add-on coverages can be attached to a policy; each is
//! priced at a configured per-car rate times the vehicle count.

use serde::{Deserialize, Serialize};

/// The optional coverages a policy can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
    /// Extra liability coverage
    ExtendedLiability,
    /// Glass coverage
    GlassCoverage,
    /// Loaner car coverage
    LoanerCar,
}

impl Coverage {
    /// All coverages, in receipt order
    pub const ALL: [Coverage; 3] = [
        Coverage::ExtendedLiability,
        Coverage::GlassCoverage,
        Coverage::LoanerCar,
    ];

    /// Human-readable label used on receipts
    pub fn label(&self) -> &'static str {
        match self {
            Coverage::ExtendedLiability => "Extra Liability",
            Coverage::GlassCoverage => "Glass Coverage",
            Coverage::LoanerCar => "Loaner Car",
        }
    }
}

/// Which optional coverages the customer selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSelections {
    pub extended_liability: bool,
    pub glass_coverage: bool,
    pub loaner_car: bool,
}

impl CoverageSelections {
    /// No optional coverages
    pub fn none() -> Self {
        Self::default()
    }

    /// All three optional coverages
    pub fn all() -> Self {
        Self {
            extended_liability: true,
            glass_coverage: true,
            loaner_car: true,
        }
    }

    /// Returns whether the given coverage was selected
    pub fn is_selected(&self, coverage: Coverage) -> bool {
        match coverage {
            Coverage::ExtendedLiability => self.extended_liability,
            Coverage::GlassCoverage => self.glass_coverage,
            Coverage::LoanerCar => self.loaner_car,
        }
    }
}
