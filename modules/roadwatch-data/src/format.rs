//! Display formatting for tender figures: Indian currency units and long dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use roadwatch_common::Scalar;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const NOT_AVAILABLE: &str = "N/A";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

/// Anything that may carry a monetary amount.
pub trait AsAmount {
    fn as_amount(&self) -> Option<f64>;
}

impl AsAmount for f64 {
    fn as_amount(&self) -> Option<f64> {
        Some(*self).filter(|n| n.is_finite())
    }
}

impl AsAmount for str {
    fn as_amount(&self) -> Option<f64> {
        roadwatch_common::parse_leading_number(self).filter(|n| n.is_finite())
    }
}

impl AsAmount for String {
    fn as_amount(&self) -> Option<f64> {
        self.as_str().as_amount()
    }
}

impl AsAmount for Scalar {
    fn as_amount(&self) -> Option<f64> {
        self.as_number().filter(|n| n.is_finite())
    }
}

impl<T: AsAmount + ?Sized> AsAmount for &T {
    fn as_amount(&self) -> Option<f64> {
        (**self).as_amount()
    }
}

impl<T: AsAmount> AsAmount for Option<T> {
    fn as_amount(&self) -> Option<f64> {
        self.as_ref().and_then(AsAmount::as_amount)
    }
}

/// Render an amount in rupees: crores and lakhs with two decimals above those
/// thresholds, Indian digit grouping below. Non-numeric input gives "N/A".
pub fn format_currency<A: AsAmount + ?Sized>(amount: &A) -> String {
    let Some(n) = amount.as_amount() else {
        return NOT_AVAILABLE.to_string();
    };

    if n >= CRORE {
        format!("{CURRENCY_SYMBOL}{:.2} Cr", n / CRORE)
    } else if n >= LAKH {
        format!("{CURRENCY_SYMBOL}{:.2} L", n / LAKH)
    } else {
        format!("{CURRENCY_SYMBOL}{}", group_indian(n))
    }
}

/// en-IN number rendering: last three integer digits, then groups of two,
/// at most three fraction digits with trailing zeros dropped.
fn group_indian(n: f64) -> String {
    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 2);
    if int_part.len() > 3 {
        let (head, tail) = int_part.split_at(int_part.len() - 3);
        let offset = head.len() % 2;
        for (i, ch) in head.chars().enumerate() {
            if i > 0 && (i + 2 - offset) % 2 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(int_part);
    }

    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if n < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Render an ISO date as "15 January 2024". Empty or missing input gives "N/A".
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_date(value) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// The value as text, or "N/A" when it is missing or empty.
pub fn or_na<T: ToString + ?Sized>(value: Option<&T>) -> String {
    value
        .map(ToString::to_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// A scalar field as text, or "N/A" when it is missing or blank (empty, zero or NaN).
pub fn scalar_or_na(value: Option<&Scalar>) -> String {
    match value {
        Some(v) if !v.is_blank() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
