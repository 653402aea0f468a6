//! Interactive data collection
//!
//! Each collector prompts through the validation rules until acceptable
//! values are obtained, then builds the corresponding domain value. Raw
//! inputs are normalized here (title-cased names, uppercased codes) so the
//! domain only ever sees presentable values.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use core_kernel::{parse_iso_date, ClaimNumber, CoreError, Money};
use domain_quote::{
    ClaimLedger, CoverageSelections, CustomerRecord, PaymentMethod, PaymentPlan, PhoneNumber,
    PostalCode, Province, RateTable, UpsertOutcome,
};

use crate::error::CliError;
use crate::prompt::Console;
use crate::rules::Rule;

/// Sentinel that ends claim collection
const CLAIMS_DONE: &str = "end";

/// Collects the customer record, vehicle count, and coverage selections
pub fn collect_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<CustomerRecord, CliError> {
    let first_name = title_case(&console.prompt_validated(
        "Enter the customer's first name: ",
        Rule::Name,
        "Invalid first name. Use letters, hyphens, apostrophes, periods, and spaces only.",
        None,
    )?);
    let last_name = title_case(&console.prompt_validated(
        "Enter the customer's last name: ",
        Rule::Name,
        "Invalid last name. Use letters, hyphens, apostrophes, periods, and spaces only.",
        None,
    )?);
    let street_address = capitalize_words(&console.prompt_validated(
        "Enter the customer's street address: ",
        Rule::NotBlank,
        "Invalid address. The address cannot be empty.",
        None,
    )?);
    let city = title_case(&console.prompt_validated(
        "Enter the customer's city: ",
        Rule::Name,
        "Invalid city name. Use letters, hyphens, apostrophes, periods, and spaces only.",
        None,
    )?);
    let province = Province::from_str(&console.prompt_validated(
        "Enter the customer's province (XX): ",
        Rule::Province,
        "Invalid province. Enter a valid two-letter abbreviation.",
        None,
    )?)?;
    let postal_code = PostalCode::parse(&console.prompt_validated(
        "Enter the postal code (X9X9X9): ",
        Rule::PostalCode,
        "Invalid postal code format.",
        None,
    )?)?;
    let phone_number = PhoneNumber::parse(&console.prompt_validated(
        "Enter the customer's phone number (9999999999): ",
        Rule::PhoneNumber,
        "Invalid phone number. Enter a 10-digit number.",
        None,
    )?)?;
    let vehicle_count: u32 = console
        .prompt_validated(
            "Enter the number of cars being insured: ",
            Rule::PositiveInteger,
            "Please enter a positive whole number.",
            None,
        )?
        .parse()
        .map_err(|_| CoreError::validation("Vehicle count out of range"))?;

    let extended_liability = collect_yes_no(console, "Add extra liability coverage? (Y/N): ")?;
    let glass_coverage = collect_yes_no(console, "Add glass coverage? (Y/N): ")?;
    let loaner_car = collect_yes_no(console, "Add loaner car coverage? (Y/N): ")?;

    Ok(CustomerRecord {
        first_name,
        last_name,
        street_address,
        city,
        province,
        postal_code,
        phone_number,
        vehicle_count,
        coverages: CoverageSelections {
            extended_liability,
            glass_coverage,
            loaner_car,
        },
    })
}

/// Prompts a Y/N question and returns true for yes
fn collect_yes_no<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<bool, CliError> {
    let answer = console.prompt_validated(
        prompt,
        Rule::YesNo,
        "Please answer Y or N.",
        None,
    )?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Collects prior claims until the sentinel is entered
///
/// The first prompt of each round accepts either a claim number or the
/// sentinel; a non-sentinel entry is re-validated as a positive integer
/// with the entered text as the pre-supplied candidate, so a valid number
/// is never asked for twice.
pub fn collect_claims<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<ClaimLedger, CliError> {
    let mut ledger = ClaimLedger::new();
    loop {
        let entry = console.read_line("Enter a claim number (or 'end' to finish): ")?;
        if entry.eq_ignore_ascii_case(CLAIMS_DONE) {
            break;
        }

        let number = ClaimNumber::from_str(&console.prompt_validated(
            "Enter a claim number: ",
            Rule::PositiveInteger,
            "Invalid claim number. Enter a positive whole number.",
            Some(&entry),
        )?)?;
        let date = parse_iso_date(&console.prompt_validated(
            "Enter the claim date (YYYY-MM-DD): ",
            Rule::Date,
            "Invalid date. Enter the date in YYYY-MM-DD format.",
            None,
        )?)
        .map_err(CoreError::from)?;
        let amount = Money::new(
            parse_decimal(&console.prompt_validated(
                "Enter the claim amount: $",
                Rule::PositiveFloat,
                "Invalid amount. Enter a positive number.",
                None,
            )?)?,
        );

        if ledger.upsert(number, date, amount) == UpsertOutcome::AmountReplaced {
            console.say(&format!(
                "Duplicate claim number {number}. The claim amount has been updated."
            ))?;
        }
    }
    Ok(ledger)
}

/// Collects the payment method and builds the payment plan
pub fn collect_payment<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    total_cost: Money,
    rates: &RateTable,
) -> Result<PaymentPlan, CliError> {
    let method = loop {
        let choice = console.read_line("Enter the payment method - Full (F), Monthly (M), Down Pay (D): ")?;
        match PaymentMethod::from_choice(&choice) {
            Ok(method) => break method,
            Err(_) => console.say("Invalid payment method. Enter 'F', 'M', or 'D'.")?,
        }
    };

    let down_payment = if method == PaymentMethod::DownPayment {
        Some(collect_down_payment(console)?)
    } else {
        None
    };

    Ok(PaymentPlan::build(method, total_cost, down_payment, rates)?)
}

/// Prompts for a non-negative down payment amount
fn collect_down_payment<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Money, CliError> {
    loop {
        let text = console.read_line("Enter the down payment amount: $")?;
        match Decimal::from_str(text.trim()) {
            Ok(amount) if amount >= Decimal::ZERO => return Ok(Money::new(amount)),
            Ok(_) => console.say("The down payment cannot be negative.")?,
            Err(_) => console.say("Invalid amount. Enter a numeric value.")?,
        }
    }
}

/// Parses a validated decimal input
fn parse_decimal(text: &str) -> Result<Decimal, CliError> {
    Ok(Decimal::from_str(text)
        .map_err(|_| CoreError::validation(format!("Invalid decimal amount: {text}")))?)
}

/// Title-cases a name: the first letter of each alphabetic run is
/// uppercased, the rest lowercased ("o'brien" becomes "O'Brien")
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Capitalizes each whitespace-separated word, collapsing runs of spaces
pub fn capitalize_words(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
