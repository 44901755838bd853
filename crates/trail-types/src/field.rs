use std::fmt;

use serde::{Deserialize, Serialize};

/// How a single field differs between the two snapshots of an entry.
///
/// Determined purely by presence on each side plus canonical equality;
/// `trail-diff` holds the classification rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    /// Absent in the old snapshot, present in the new one.
    Added,
    /// Present in the old snapshot, absent from the new one.
    Removed,
    /// Present in both snapshots with different values.
    Modified,
    /// Present in both snapshots with equal values.
    Unchanged,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Added => "ADDED",
            Self::Removed => "REMOVED",
            Self::Modified => "MODIFIED",
            Self::Unchanged => "UNCHANGED",
        };
        f.write_str(s)
    }
}

/// Display category of a field, driving how the rendering layer formats
/// its values.
///
/// Wire names match the audit service payload (`STRING`, `CURRENCY`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free-form text.
    #[default]
    #[serde(rename = "STRING")]
    Text,
    /// Plain numeric value.
    #[serde(rename = "NUMBER")]
    Number,
    /// Monetary amount.
    #[serde(rename = "CURRENCY")]
    Currency,
    /// Calendar date (ISO `yyyy-mm-dd` on the wire).
    #[serde(rename = "DATE")]
    Date,
    /// Date and time of day (ISO local datetime on the wire).
    #[serde(rename = "DATETIME")]
    DateTime,
    /// Boolean flag.
    #[serde(rename = "BOOLEAN")]
    Boolean,
    /// Closed set of named values.
    #[serde(rename = "ENUM")]
    Choice,
    /// Nested structure shown as compact JSON.
    #[serde(rename = "JSON")]
    Json,
}
