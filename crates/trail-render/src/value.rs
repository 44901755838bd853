//! Typed rendering instructions for raw field values.

use std::fmt;

use serde_json::Value;

/// A rendering instruction for one raw value, consumed by a display layer.
///
/// Total over the JSON value union; containers collapse to their compact
/// serialized form. How a rendering is decorated (color, emphasis) is the
/// display layer's business, combined with the row's change type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueRendering {
    /// Explicit `null`, shown as a marker rather than text.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Numeric literal in its JSON form.
    Number(String),
    /// Text content, quoted when displayed.
    Text(String),
    /// Array or object, rendered as compact JSON.
    Compact(String),
}

/// Map a raw value to its rendering instruction.
pub fn render_value(value: &Value) -> ValueRendering {
    match value {
        Value::Null => ValueRendering::Null,
        Value::Bool(b) => ValueRendering::Bool(*b),
        Value::Number(n) => ValueRendering::Number(n.to_string()),
        Value::String(s) => ValueRendering::Text(s.clone()),
        container => ValueRendering::Compact(compact_text(container)),
    }
}

/// Compact serialized form of a container value.
fn compact_text(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}

impl fmt::Display for ValueRendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Number(n) => f.write_str(n),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Compact(s) => f.write_str(s),
        }
    }
}
