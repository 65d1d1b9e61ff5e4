//! pt-BR display formatters for OCR results.
//!
//! All formatters pass unrecognized input through unchanged; the page never
//! hides a value just because it failed to parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Shown in place of any field the API did not return.
pub const PLACEHOLDER: &str = "N/A";

/// Mask a bare 11-digit CPF as `000.000.000-00`.
pub fn format_cpf(cpf: &str) -> String {
    let digits_only = cpf.chars().all(|c| c.is_ascii_digit());
    if !digits_only || cpf.len() != 11 {
        return cpf.to_string();
    }
    format!("{}.{}.{}-{}", &cpf[0..3], &cpf[3..6], &cpf[6..9], &cpf[9..11])
}

/// Render an ISO date (with or without a time component) as `DD/MM/YYYY`.
pub fn format_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Render an amount as Brazilian currency: `R$ 1.234,56`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, frac)
}

/// Render a kWh reading the way the page shows it.
pub fn format_kwh(value: f64) -> String {
    format!("{} kWh", value)
}

/// Extract displayable text from a loosely-typed page entry.
///
/// Accepts a bare string, `{"text": ...}`, `{"content": ...}`, or anything
/// else (pretty-printed as JSON).
pub fn page_text(page: &Value) -> String {
    if let Some(s) = page.as_str() {
        return s.to_string();
    }
    if let Some(obj) = page.as_object() {
        if let Some(s) = obj.get("text").and_then(Value::as_str) {
            return s.to_string();
        }
        if let Some(s) = obj.get("content").and_then(Value::as_str) {
            return s.to_string();
        }
    }
    serde_json::to_string_pretty(page).unwrap_or_default()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Masking never loses or reorders digits.
        #[test]
        fn cpf_mask_preserves_digits(cpf in "[0-9]{11}") {
            let masked = format_cpf(&cpf);
            let digits: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits, cpf);
            prop_assert_eq!(masked.len(), 14);
        }

        /// Non-negative amounts always render with the currency prefix and
        /// two decimal places.
        #[test]
        fn currency_shape(amount in 0.0f64..1e12) {
            let s = format_currency(amount);
            prop_assert!(s.starts_with("R$ "));
            let decimals = s.rsplit(',').next().unwrap();
            prop_assert_eq!(decimals.len(), 2);
        }

        /// Valid ISO dates always come out as DD/MM/YYYY.
        #[test]
        fn date_shape(y in 1900u32..2100, m in 1u32..=12, d in 1u32..=28) {
            let raw = format!("{:04}-{:02}-{:02}", y, m, d);
            let formatted = format_date(&raw);
            prop_assert_eq!(formatted, format!("{:02}/{:02}/{:04}", d, m, y));
        }
    }
}
