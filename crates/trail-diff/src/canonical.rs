//! Canonical value serialization used for equality comparison.
//!
//! Two values compare equal when their canonical forms match: object keys
//! are written in sorted order, array order is preserved, and scalars
//! render as JSON literals. Key order in the source maps therefore never
//! affects a comparison, while array reordering does.

use serde_json::Value;

/// Render a value in its canonical serialized form.
pub fn canonical_form(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Returns `true` if two values have the same canonical form.
pub fn canonically_equal(a: &Value, b: &Value) -> bool {
    canonical_form(a) == canonical_form(b)
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(item, out);
            }
            out.push('}');
        }
    }
}

/// Write a JSON-escaped string. Escaping a `str` cannot fail; the fallback
/// keeps the engine total regardless.
fn write_string(s: &str, out: &mut String) {
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
    }
}
