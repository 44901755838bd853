//! Full comparison model for one audit entry.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trail_types::{ChangeAction, ChangeType, Snapshot};

use crate::record_diff::{classify_field, compute_changed_keys, union_keys};

/// One row in a comparison: a field present in either snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    /// Raw field key.
    pub field_name: String,
    /// How the field changed.
    pub change_type: ChangeType,
    /// Value on the old side; `None` when the key was missing there.
    #[serde(default)]
    pub old_value: Option<Value>,
    /// Value on the new side; `None` when the key is missing there.
    #[serde(default)]
    pub new_value: Option<Value>,
}

impl FieldChange {
    /// Returns `true` if this row represents an actual difference.
    pub fn is_changed(&self) -> bool {
        self.change_type != ChangeType::Unchanged
    }
}

/// The result of comparing the two snapshots of an audit entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// The recorded action.
    pub action: ChangeAction,
    /// Keys highlighted in the diff view; empty when either side is absent.
    pub changed_keys: BTreeSet<String>,
    /// One row per field in the union of both snapshots, unchanged included.
    pub fields: Vec<FieldChange>,
}

impl Comparison {
    /// Returns `true` if no field exists on either side.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of field rows.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Rows that represent an actual difference (the highlighted view).
    pub fn changed(&self) -> impl Iterator<Item = &FieldChange> {
        self.fields.iter().filter(|f| f.is_changed())
    }

    /// Number of added fields.
    pub fn additions(&self) -> usize {
        self.count(ChangeType::Added)
    }

    /// Number of removed fields.
    pub fn removals(&self) -> usize {
        self.count(ChangeType::Removed)
    }

    /// Number of modified fields.
    pub fn modifications(&self) -> usize {
        self.count(ChangeType::Modified)
    }

    fn count(&self, change_type: ChangeType) -> usize {
        self.fields
            .iter()
            .filter(|f| f.change_type == change_type)
            .count()
    }
}

/// Compare the two snapshots of an entry.
///
/// Emits one row per field in the union of both snapshots. An absent side
/// behaves as an empty record, so a CREATE classifies every field as added
/// and a DELETE classifies every field as removed. When both sides are
/// absent the comparison is empty.
pub fn build_comparison(
    action: ChangeAction,
    old: Option<&Snapshot>,
    new: Option<&Snapshot>,
) -> Comparison {
    let changed_keys = compute_changed_keys(old, new);
    let fields = union_keys(old, new)
        .into_iter()
        .map(|key| {
            let change_type = classify_field(&key, old, new);
            let old_value = old.and_then(|s| s.get(&key)).cloned();
            let new_value = new.and_then(|s| s.get(&key)).cloned();
            FieldChange {
                field_name: key,
                change_type,
                old_value,
                new_value,
            }
        })
        .collect();

    Comparison {
        action,
        changed_keys,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(pairs: &[(&str, Value)]) -> Snapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn update_with_single_changed_field() {
        let old = snapshot(&[("name", json!("A")), ("price", json!(100))]);
        let new = snapshot(&[("name", json!("A")), ("price", json!(120))]);

        let comparison = build_comparison(ChangeAction::Update, Some(&old), Some(&new));

        assert_eq!(comparison.changed_keys.len(), 1);
        assert!(comparison.changed_keys.contains("price"));
        assert_eq!(comparison.len(), 2);

        let price = comparison
            .fields
            .iter()
            .find(|f| f.field_name == "price")
            .unwrap();
        assert_eq!(price.change_type, ChangeType::Modified);
        assert_eq!(price.old_value, Some(json!(100)));
        assert_eq!(price.new_value, Some(json!(120)));

        let name = comparison
            .fields
            .iter()
            .find(|f| f.field_name == "name")
            .unwrap();
        assert_eq!(name.change_type, ChangeType::Unchanged);

        let highlighted: Vec<_> = comparison.changed().collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].field_name, "price");
    }

    #[test]
    fn create_classifies_every_field_as_added() {
        let new = snapshot(&[("name", json!("A")), ("price", json!(100))]);

        let comparison = build_comparison(ChangeAction::Create, None, Some(&new));

        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison.additions(), 2);
        assert!(comparison.fields.iter().all(|f| f.old_value.is_none()));
        // No highlighting without both sides.
        assert!(comparison.changed_keys.is_empty());
    }

    #[test]
    fn delete_classifies_every_field_as_removed() {
        let old = snapshot(&[("name", json!("A"))]);

        let comparison = build_comparison(ChangeAction::Delete, Some(&old), None);

        assert_eq!(comparison.len(), 1);
        assert_eq!(comparison.removals(), 1);
        assert_eq!(comparison.fields[0].field_name, "name");
        assert!(comparison.fields[0].new_value.is_none());
    }

    #[test]
    fn both_sides_absent_is_an_empty_comparison() {
        let comparison = build_comparison(ChangeAction::Update, None, None);
        assert!(comparison.is_empty());
        assert!(comparison.changed_keys.is_empty());
    }

    #[test]
    fn explicit_null_survives_as_a_value() {
        let old = snapshot(&[("note", Value::Null)]);
        let new = snapshot(&[("note", json!("hello"))]);

        let comparison = build_comparison(ChangeAction::Update, Some(&old), Some(&new));

        let note = &comparison.fields[0];
        assert_eq!(note.change_type, ChangeType::Modified);
        assert_eq!(note.old_value, Some(Value::Null));
        assert_eq!(note.new_value, Some(json!("hello")));
    }

    #[test]
    fn mixed_changes_are_counted() {
        let old = snapshot(&[
            ("keep", json!(true)),
            ("modify", json!("old")),
            ("remove", json!(42)),
        ]);
        let new = snapshot(&[
            ("keep", json!(true)),
            ("modify", json!("new")),
            ("added", json!([1, 2, 3])),
        ]);

        let comparison = build_comparison(ChangeAction::Update, Some(&old), Some(&new));
        assert_eq!(comparison.additions(), 1);
        assert_eq!(comparison.removals(), 1);
        assert_eq!(comparison.modifications(), 1);
        assert_eq!(comparison.len(), 4);
        assert_eq!(comparison.changed().count(), 3);
    }

    #[test]
    fn serializes_with_wire_names() {
        let new = snapshot(&[("name", json!("A"))]);
        let comparison = build_comparison(ChangeAction::Create, None, Some(&new));

        let text = serde_json::to_string(&comparison).unwrap();
        assert!(text.contains("\"changedKeys\""));
        assert!(text.contains("\"fieldName\":\"name\""));
        assert!(text.contains("\"changeType\":\"ADDED\""));
    }
}
