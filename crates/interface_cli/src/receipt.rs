//! Receipt rendering
//!
//! Pure formatting: the computed results and collected data become a
//! fixed-width text block. Nothing here recalculates; display rounding to
//! cents happens through the Money Display impl.

use chrono::NaiveDate;

use core_kernel::{Money, PolicyNumber, ISO_DATE_FORMAT};
use domain_quote::{
    ClaimLedger, CostSummary, Coverage, CustomerRecord, PaymentPlan, PremiumBreakdown,
};

const WIDTH: usize = 62;

/// Everything a receipt shows, computed before rendering
#[derive(Debug)]
pub struct Receipt<'a> {
    pub policy_number: PolicyNumber,
    pub invoice_date: NaiveDate,
    pub first_payment_date: NaiveDate,
    pub customer: &'a CustomerRecord,
    pub premium: &'a PremiumBreakdown,
    pub costs: &'a CostSummary,
    pub payment: &'a PaymentPlan,
    pub claims: &'a ClaimLedger,
}

impl Receipt<'_> {
    /// Renders the receipt as a text block
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(WIDTH);
        let thin_rule = "-".repeat(WIDTH);

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&center("AUTO INSURANCE POLICY RECEIPT"));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        field(&mut out, "Policy Number", &self.policy_number.to_string());
        field(&mut out, "Invoice Date", &date(self.invoice_date));
        field(&mut out, "First Payment Date", &date(self.first_payment_date));

        out.push_str(&thin_rule);
        out.push('\n');
        out.push_str("Customer\n");
        field(&mut out, "  Name", &self.customer.full_name());
        field(&mut out, "  Phone", self.customer.phone_number.as_str());
        field(&mut out, "  Street", &self.customer.street_address);
        field(&mut out, "  City", &self.customer.city_line());

        out.push_str(&thin_rule);
        out.push('\n');
        out.push_str("Premium\n");
        money_line(
            &mut out,
            &format!("  Number of Cars ({})", self.customer.vehicle_count),
            self.premium.base_premium,
        );
        for coverage in Coverage::ALL {
            let marker = if self.customer.coverages.is_selected(coverage) {
                'Y'
            } else {
                'N'
            };
            money_line(
                &mut out,
                &format!("  {} ({marker})", coverage.label()),
                self.premium.addon_cost(coverage),
            );
        }
        money_line(&mut out, "  Total Premium", self.premium.total_premium);
        money_line(&mut out, "  HST", self.costs.hst);
        money_line(&mut out, "  Total Cost", self.costs.total_cost);

        out.push_str(&thin_rule);
        out.push('\n');
        out.push_str("Payment\n");
        field(&mut out, "  Method", self.payment.method.label());
        if let Some(down) = self.payment.down_payment {
            money_line(&mut out, "  Down Payment", down);
        }
        if let Some(installment) = self.payment.monthly_installment {
            money_line(&mut out, "  Monthly Payment", installment);
        }

        out.push_str(&thin_rule);
        out.push('\n');
        out.push_str("Claims\n");
        if self.claims.is_empty() {
            out.push_str("  No prior claims on file\n");
        } else {
            out.push_str(&format!(
                "  {:<10} {:<12} {:>12}\n",
                "Claim #", "Date", "Amount"
            ));
            for claim in self.claims.records() {
                out.push_str(&format!(
                    "  {:<10} {:<12} {:>12}\n",
                    claim.number.to_string(),
                    date(claim.date),
                    claim.amount.to_string(),
                ));
            }
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&center("Thank you for your business"));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

fn date(value: NaiveDate) -> String {
    value.format(ISO_DATE_FORMAT).to_string()
}

fn center(text: &str) -> String {
    format!("{:^1$}", text, WIDTH)
}

fn field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{:<24}{}\n", format!("{label}:"), value));
}

fn money_line(out: &mut String, label: &str, amount: Money) {
    out.push_str(&format!("{:<28}{:>14}\n", label, amount.to_string()));
}
