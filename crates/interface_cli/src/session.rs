//! The quoting session loop
//!
//! One session handles any number of policies. Each policy runs the full
//! cycle - collect, calculate, print, persist - and advances the policy
//! sequence, writing the seed back to the defaults file so the sequence
//! survives across runs.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use core_kernel::{first_of_next_month, today};
use domain_quote::{CostSummary, PremiumBreakdown};
use infra_store::{PolicyRegister, RegisterRecord, StartupDefaults};

use crate::collect::{collect_claims, collect_customer, collect_payment};
use crate::error::CliError;
use crate::prompt::Console;
use crate::receipt::Receipt;
use crate::rules::Rule;

/// A running quoting session
pub struct QuoteSession {
    defaults: StartupDefaults,
    defaults_path: PathBuf,
    register: PolicyRegister,
}

impl QuoteSession {
    /// Creates a session from loaded defaults
    ///
    /// `defaults_path` is where the advanced policy seed is written back
    /// after each completed policy.
    pub fn new(
        defaults: StartupDefaults,
        defaults_path: impl Into<PathBuf>,
        register: PolicyRegister,
    ) -> Self {
        Self {
            defaults,
            defaults_path: defaults_path.into(),
            register,
        }
    }

    /// Runs policies until the operator declines to continue
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), CliError> {
        loop {
            self.process_policy(console)?;

            let again = console.prompt_validated(
                "Process another insurance policy? (Y/N): ",
                Rule::YesNo,
                "Please answer Y or N.",
                None,
            )?;
            if !again.eq_ignore_ascii_case("y") {
                break;
            }
        }
        console.say("Thank you for using the quoting desk.")?;
        Ok(())
    }

    /// Runs the full cycle for one policy
    fn process_policy<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), CliError> {
        let policy_number = self.defaults.next_policy_number;
        console.say(&format!("\nProcessing policy number {policy_number}\n"))?;

        let customer = collect_customer(console)?;
        let claims = collect_claims(console)?;

        let rates = &self.defaults.rates;
        let premium =
            PremiumBreakdown::calculate(rates, customer.vehicle_count, &customer.coverages)?;
        let costs = CostSummary::assess(premium.total_premium, rates.hst_rate);
        let payment = collect_payment(console, costs.total_cost, rates)?;

        let invoice_date = today();
        let receipt = Receipt {
            policy_number,
            invoice_date,
            first_payment_date: first_of_next_month(invoice_date),
            customer: &customer,
            premium: &premium,
            costs: &costs,
            payment: &payment,
            claims: &claims,
        };
        console.say(&receipt.render())?;

        let record = RegisterRecord::new(
            policy_number,
            invoice_date,
            customer,
            claims,
            premium,
            costs,
            payment,
        );
        self.register.append(&record)?;

        self.defaults.next_policy_number = policy_number.succ();
        self.defaults.save(&self.defaults_path)?;

        console.say(&format!(
            "Policy data for policy number {policy_number} has been saved.\n"
        ))?;
        tracing::info!(%policy_number, "Policy completed");
        Ok(())
    }
}
