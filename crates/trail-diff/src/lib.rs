//! Diff engine for Trail audit entries.
//!
//! Computes the field-level difference between the before/after snapshots
//! of an audit-log entry, producing a structured comparison for the change
//! table and a line-level view of the serialized JSON.
//!
//! # Key Types
//!
//! - [`Comparison`] / [`FieldChange`] -- Field-level diff over the key union
//! - [`FieldSlot`] -- Three-state field presence (missing / null / value)
//! - [`JsonDiff`] / [`JsonLine`] -- Line-level view of the serialized snapshots
//!
//! Equality is canonical: object key order never affects a comparison,
//! array order does. The engine never fails and never mutates its inputs.

pub mod canonical;
pub mod comparison;
pub mod json_diff;
pub mod record_diff;

pub use canonical::{canonical_form, canonically_equal};
pub use comparison::{build_comparison, Comparison, FieldChange};
pub use json_diff::{diff_snapshot_json, JsonDiff, JsonLine};
pub use record_diff::{classify_field, compute_changed_keys, FieldSlot};
