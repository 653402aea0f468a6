//! Validation Rule Tests
//!
//! Exercises every rule variant against accepting and rejecting inputs,
//! including the canonical postal-code and phone-number vectors.

use interface_cli::Rule;

#[test]
fn test_not_blank() {
    assert!(Rule::NotBlank.accepts("12 Water St"));
    assert!(!Rule::NotBlank.accepts(""));
    assert!(!Rule::NotBlank.accepts(" \t "));
}

#[test]
fn test_name_allows_punctuated_names() {
    assert!(Rule::Name.accepts("Mary"));
    assert!(Rule::Name.accepts("O'Brien-Smith Jr."));
    assert!(Rule::Name.accepts("st. john's"));
    assert!(!Rule::Name.accepts("Jane2"));
    assert!(!Rule::Name.accepts("Jane_Doe"));
}

#[test]
fn test_phone_number_vectors() {
    assert!(Rule::PhoneNumber.accepts("5551234567"));
    assert!(!Rule::PhoneNumber.accepts("555123456"));
    assert!(!Rule::PhoneNumber.accepts("555123456A"));
    assert!(!Rule::PhoneNumber.accepts("55512345678"));
    assert!(!Rule::PhoneNumber.accepts("555-123-4567"));
}

#[test]
fn test_postal_code_vectors() {
    assert!(Rule::PostalCode.accepts("A1B2C3"));
    assert!(Rule::PostalCode.accepts("a1b2c3"));
    assert!(!Rule::PostalCode.accepts("AB1C2D"));
    assert!(!Rule::PostalCode.accepts("A1B2C"));
    assert!(!Rule::PostalCode.accepts("A1B2C34"));
    assert!(!Rule::PostalCode.accepts("1A2B3C"));
}

#[test]
fn test_date_rejects_impossible_calendar_dates() {
    assert!(Rule::Date.accepts("2024-03-19"));
    assert!(Rule::Date.accepts("2024-02-29"));
    assert!(!Rule::Date.accepts("2024-13-01"));
    assert!(!Rule::Date.accepts("2023-02-29"));
    assert!(!Rule::Date.accepts("03-19-2024"));
}

#[test]
fn test_province_membership_case_insensitive() {
    for code in [
        "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
    ] {
        assert!(Rule::Province.accepts(code), "{code}");
        assert!(Rule::Province.accepts(&code.to_lowercase()), "{code}");
    }
    assert!(!Rule::Province.accepts("XX"));
    assert!(!Rule::Province.accepts("ONT"));
}

#[test]
fn test_yes_no() {
    assert!(Rule::YesNo.accepts("Y"));
    assert!(Rule::YesNo.accepts("n"));
    assert!(!Rule::YesNo.accepts("yes"));
    assert!(!Rule::YesNo.accepts("maybe"));
}

#[test]
fn test_positive_integer() {
    assert!(Rule::PositiveInteger.accepts("1"));
    assert!(Rule::PositiveInteger.accepts("42"));
    assert!(!Rule::PositiveInteger.accepts("0"));
    assert!(!Rule::PositiveInteger.accepts("-1"));
    assert!(!Rule::PositiveInteger.accepts("1.0"));
    assert!(!Rule::PositiveInteger.accepts("two"));
}

#[test]
fn test_positive_float_never_panics_on_garbage() {
    assert!(Rule::PositiveFloat.accepts("850.25"));
    assert!(Rule::PositiveFloat.accepts("7"));
    assert!(!Rule::PositiveFloat.accepts("0"));
    assert!(!Rule::PositiveFloat.accepts("0.00"));
    assert!(!Rule::PositiveFloat.accepts("-850.25"));
    assert!(!Rule::PositiveFloat.accepts("$850.25"));
    assert!(!Rule::PositiveFloat.accepts("NaN-ish garbage !!"));
}
