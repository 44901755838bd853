//! Field-kind aware value formatting for the change table.
//!
//! Best-effort by contract: unparseable dates, non-numeric currency
//! amounts and the like fall back to their raw text instead of erroring.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use trail_types::FieldKind;

/// Cell text for a missing or null value.
pub const ABSENT: &str = "-";

/// Format one side of a field for the change table.
///
/// Missing keys and explicit nulls both render as [`ABSENT`]. Sensitive
/// values are masked before any kind-specific formatting applies.
pub fn format_value(value: Option<&Value>, kind: FieldKind, sensitive: bool) -> String {
    let Some(value) = value else {
        return ABSENT.to_string();
    };
    if value.is_null() {
        return ABSENT.to_string();
    }
    if sensitive {
        return mask_sensitive(&plain_text(value));
    }

    match kind {
        FieldKind::Currency => format_currency(value),
        FieldKind::Date => format_date(value),
        FieldKind::DateTime => format_date_time(value),
        FieldKind::Boolean => format_boolean(value),
        _ => plain_text(value),
    }
}

/// Mask a sensitive value, keeping the last four characters when the value
/// is long enough to stay recognizable.
pub fn mask_sensitive(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() <= 4 {
        return "******".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("******{tail}")
}

/// Bare text form: strings render without quotes, everything else as
/// compact JSON.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn format_currency(value: &Value) -> String {
    match value.as_f64() {
        Some(amount) => format!("{} so'm", group_thousands(amount)),
        None => plain_text(value),
    }
}

/// Two-decimal amount with thousands separators (`1,234,567.50`).
fn group_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let text = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

fn format_date(value: &Value) -> String {
    let raw = plain_text(value);
    match raw.parse::<NaiveDate>() {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw,
    }
}

fn format_date_time(value: &Value) -> String {
    let raw = plain_text(value);
    match raw.parse::<NaiveDateTime>() {
        Ok(at) => at.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => raw,
    }
}

fn format_boolean(value: &Value) -> String {
    match value {
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        other => plain_text(other),
    }
}
