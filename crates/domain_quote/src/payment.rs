//! Payment methods and installment plans

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::QuoteError;
use crate::premium::{RateTable, NUM_INSTALLMENTS};

/// How the customer pays for the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Entire cost paid up front
    Full,
    /// Cost spread across monthly installments
    Monthly,
    /// Down payment up front, remainder across monthly installments
    DownPayment,
}

impl PaymentMethod {
    /// Parses the single-letter console choice: F, M, or D (case-insensitive)
    pub fn from_choice(input: &str) -> Result<Self, QuoteError> {
        match input.trim().to_ascii_uppercase().as_str() {
            "F" => Ok(PaymentMethod::Full),
            "M" => Ok(PaymentMethod::Monthly),
            "D" => Ok(PaymentMethod::DownPayment),
            _ => Err(QuoteError::InvalidPaymentMethod(input.to_string())),
        }
    }

    /// Label used on receipts and in the register
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Full => "Full",
            PaymentMethod::Monthly => "Monthly",
            PaymentMethod::DownPayment => "Down Pay",
        }
    }
}

/// The payment plan for one policy
///
/// Down payment and installment are mutually present or absent by method:
/// Full carries neither, Monthly carries only an installment, DownPayment
/// carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlan {
    /// Selected method
    pub method: PaymentMethod,
    /// Up-front amount reducing the financed balance
    pub down_payment: Option<Money>,
    /// Amount due each month, including the processing fee
    pub monthly_installment: Option<Money>,
}

impl PaymentPlan {
    /// Builds the plan for a method, total cost, and optional down payment
    ///
    /// Installments are `(total_cost - down_payment) / 8` plus the monthly
    /// processing fee; a full payment produces no installment.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative down payment, or when a
    /// down payment is supplied with a method other than DownPayment.
    pub fn build(
        method: PaymentMethod,
        total_cost: Money,
        down_payment: Option<Money>,
        rates: &RateTable,
    ) -> Result<Self, QuoteError> {
        match (method, down_payment) {
            (PaymentMethod::Full, None) => Ok(Self {
                method,
                down_payment: None,
                monthly_installment: None,
            }),
            (PaymentMethod::Monthly, None) => Ok(Self {
                method,
                down_payment: None,
                monthly_installment: Some(Self::installment(total_cost, rates)),
            }),
            (PaymentMethod::DownPayment, Some(down)) => {
                if down.is_negative() {
                    return Err(QuoteError::validation(
                        "Down payment cannot be negative",
                    ));
                }
                let balance = total_cost - down;
                Ok(Self {
                    method,
                    down_payment: Some(down),
                    monthly_installment: Some(Self::installment(balance, rates)),
                })
            }
            (PaymentMethod::DownPayment, None) => Err(QuoteError::validation(
                "Down payment method requires a down payment amount",
            )),
            (_, Some(_)) => Err(QuoteError::validation(
                "Down payment only applies to the down payment method",
            )),
        }
    }

    fn installment(balance: Money, rates: &RateTable) -> Money {
        // NUM_INSTALLMENTS is a nonzero constant
        balance
            .divide(Decimal::from(NUM_INSTALLMENTS))
            .unwrap_or(Money::zero())
            + rates.monthly_processing_fee
    }
}
