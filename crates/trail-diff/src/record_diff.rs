//! Field-level diff over two optional snapshots.
//!
//! Presence is modeled with three states so that an explicit JSON `null`
//! stays distinct from a missing key: `{"note": null}` and `{}` disagree
//! on `note`.

use std::collections::BTreeSet;

use serde_json::Value;
use trail_types::{ChangeType, Snapshot};

use crate::canonical::canonical_form;

/// Presence of one field on one side of a comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldSlot<'a> {
    /// The key does not exist in the snapshot, or the snapshot is absent.
    Missing,
    /// The key exists with an explicit `null` value.
    Null,
    /// The key exists with a non-null value.
    Value(&'a Value),
}

impl<'a> FieldSlot<'a> {
    /// Look up a key in an optional snapshot.
    pub fn of(snapshot: Option<&'a Snapshot>, key: &str) -> Self {
        match snapshot.and_then(|s| s.get(key)) {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(value) => Self::Value(value),
        }
    }

    /// Returns `true` if the key exists on this side.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Canonical form of the slot value; `None` when the key is missing.
    fn form(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Null => Some("null".to_string()),
            Self::Value(value) => Some(canonical_form(value)),
        }
    }
}

/// Keys whose values differ between the two snapshots.
///
/// Returns the empty set when either side is absent: without both
/// snapshots there is nothing to compare, and CREATE/DELETE entries render
/// without highlighting instead. Keys present on only one side count as
/// changed.
pub fn compute_changed_keys(old: Option<&Snapshot>, new: Option<&Snapshot>) -> BTreeSet<String> {
    let (Some(old), Some(new)) = (old, new) else {
        return BTreeSet::new();
    };

    union_keys(Some(old), Some(new))
        .into_iter()
        .filter(|key| FieldSlot::of(Some(old), key).form() != FieldSlot::of(Some(new), key).form())
        .collect()
}

/// Classify how one field changed between the two snapshots.
///
/// Total over the presence/equality combinations; a key absent from both
/// sides is reported as [`ChangeType::Unchanged`].
pub fn classify_field(key: &str, old: Option<&Snapshot>, new: Option<&Snapshot>) -> ChangeType {
    let old_slot = FieldSlot::of(old, key);
    let new_slot = FieldSlot::of(new, key);

    match (old_slot.is_present(), new_slot.is_present()) {
        (false, false) => ChangeType::Unchanged,
        (false, true) => ChangeType::Added,
        (true, false) => ChangeType::Removed,
        (true, true) => {
            if old_slot.form() == new_slot.form() {
                ChangeType::Unchanged
            } else {
                ChangeType::Modified
            }
        }
    }
}

/// Union of the field names of both snapshots, in sorted order.
pub(crate) fn union_keys(old: Option<&Snapshot>, new: Option<&Snapshot>) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    if let Some(old) = old {
        keys.extend(old.keys().cloned());
    }
    if let Some(new) = new {
        keys.extend(new.keys().cloned());
    }
    keys
}
