//! Display formatting and numeric-string parsing
//!
//! All formatting is fixed to US conventions: `$` currency with comma
//! thousands separators, `%` with the fraction scaled by 100. Parsing
//! accepts the shapes found in the sales export (`"$1,200.50"`, quoted
//! values, accounting-style `"(1,200)"` negatives) and falls back to `0.0`
//! for anything non-numeric. This module is the single home for that
//! parsing; call sites must not re-implement it.

/// Format a currency value with thousands separators.
///
/// Rounds half-away-from-zero to `fraction_digits` and always renders
/// exactly that many fraction digits: `format_currency(1200.5, 0)` is
/// `"$1,201"` and `format_currency(1200.5, 2)` is `"$1,200.50"`.
#[must_use]
pub fn format_currency(value: f64, fraction_digits: u32) -> String {
    let scale = 10_f64.powi(fraction_digits as i32);
    let scaled = (value.abs() * scale).round() as i64;
    let whole = scaled / scale as i64;
    let fraction = scaled % scale as i64;

    // Values that round to zero drop the sign
    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };
    let grouped = group_thousands(whole);

    if fraction_digits == 0 {
        format!("{sign}${grouped}")
    } else {
        format!(
            "{sign}${grouped}.{fraction:0width$}",
            width = fraction_digits as usize
        )
    }
}

/// Format a plain count with thousands separators (no currency symbol)
#[must_use]
pub fn format_count(value: f64) -> String {
    let rounded = value.abs().round() as i64;
    let sign = if value < 0.0 && rounded != 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(rounded))
}

/// Format a fraction as a percentage: `0.1` at 1 digit is `"10.0%"`
#[must_use]
pub fn format_percentage(fraction: f64, fraction_digits: u32) -> String {
    format!(
        "{:.prec$}%",
        fraction * 100.0,
        prec = fraction_digits as usize
    )
}

/// Format a percentage change, prefixing `+` for non-negative values
#[must_use]
pub fn format_percentage_change(change: f64, fraction_digits: u32) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{}", format_percentage(change, fraction_digits))
}

/// Parse a numeric string from the sales export.
///
/// Strips currency symbols, commas, straight and curly quotes, and
/// whitespace; a parenthesized value is negative (accounting notation), so
/// `"($1,200)"` parses to `-1200.0`. Malformed input (`""`, `"N/A"`, `"-"`)
/// yields the fallback `0.0`.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let clean: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '"' | '\u{201c}' | '\u{201d}') && !c.is_whitespace())
        .collect();

    if let Some(inner) = clean.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        return -inner.parse::<f64>().unwrap_or(0.0);
    }
    clean.parse::<f64>().unwrap_or(0.0)
}

/// Average of a slice of values (empty slice averages to 0.0)
#[must_use]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        total(values) / values.len() as f64
    }
}

/// Sum of a slice of values
#[must_use]
pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    reversed.chars().rev().collect()
}
