//! Currency and date formatting at the tier boundaries.

use roadwatch_common::Scalar;
use roadwatch_data::{format_currency, format_date};

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

#[test]
fn non_numeric_amount_is_not_available() {
    assert_eq!(format_currency("abc"), "N/A");
    assert_eq!(format_currency(""), "N/A");
    assert_eq!(format_currency(&f64::NAN), "N/A");
    assert_eq!(format_currency(&None::<Scalar>), "N/A");
}

#[test]
fn exactly_one_crore_uses_crore_suffix() {
    assert_eq!(format_currency(&10_000_000.0), "₹1.00 Cr");
}

#[test]
fn exactly_one_lakh_uses_lakh_suffix() {
    assert_eq!(format_currency(&100_000.0), "₹1.00 L");
}

#[test]
fn below_one_lakh_is_plain_grouped() {
    assert_eq!(format_currency(&99_999.0), "₹99,999");
    assert_eq!(format_currency(&500.0), "₹500");
}

#[test]
fn crore_and_lakh_round_to_two_decimals() {
    assert_eq!(format_currency(&45_678_900.0), "₹4.57 Cr");
    assert_eq!(format_currency(&2_550_000.0), "₹25.50 L");
    assert_eq!(format_currency(&9_999_999.0), "₹100.00 L");
}

#[test]
fn string_amounts_are_parsed() {
    assert_eq!(format_currency("25000000"), "₹2.50 Cr");
    assert_eq!(format_currency(&Scalar::Text("150000 INR".into())), "₹1.50 L");
    assert_eq!(format_currency(&Some(&Scalar::Number(1234.0))), "₹1,234");
}

#[test]
fn negative_amounts_stay_in_plain_tier() {
    assert_eq!(format_currency(&-2_500_000.0), "₹-25,00,000");
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn missing_or_empty_date_is_not_available() {
    assert_eq!(format_date(None), "N/A");
    assert_eq!(format_date(Some("")), "N/A");
    assert_eq!(format_date(Some("   ")), "N/A");
}

#[test]
fn iso_date_renders_long_form() {
    assert_eq!(format_date(Some("2024-01-15")), "15 January 2024");
    assert_eq!(format_date(Some("2023-09-01")), "1 September 2023");
}

#[test]
fn timestamps_render_their_date() {
    assert_eq!(format_date(Some("2024-03-05T10:30:00Z")), "5 March 2024");
    assert_eq!(format_date(Some("2024-03-05T10:30:00+05:30")), "5 March 2024");
    assert_eq!(format_date(Some("2024-12-31T23:59:59")), "31 December 2024");
}

#[test]
fn garbage_date_is_invalid() {
    assert_eq!(format_date(Some("next tuesday")), "Invalid Date");
}
