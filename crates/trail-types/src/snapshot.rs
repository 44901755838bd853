use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PayloadResult;

/// One side of an audit comparison: an entity's field values at a point in
/// time, keyed by field name.
///
/// Snapshots originate from an untyped audit log, so construction is
/// lenient: a payload that is not a JSON object is wrapped as a single
/// `value` field instead of being rejected (see [`Snapshot::coerce`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    fields: BTreeMap<String, Value>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from an arbitrary JSON payload.
    ///
    /// Objects become field maps directly. `null` becomes an empty
    /// snapshot. Any other payload is wrapped as `{"value": <payload>}`,
    /// matching how the audit service stores non-record values.
    pub fn coerce(payload: Value) -> Self {
        match payload {
            Value::Object(map) => Self {
                fields: map.into_iter().collect(),
            },
            Value::Null => Self::new(),
            other => {
                let mut fields = BTreeMap::new();
                fields.insert("value".to_string(), other);
                Self { fields }
            }
        }
    }

    /// Decode a snapshot from raw JSON text, coercing non-object payloads.
    pub fn from_json(raw: &str) -> PayloadResult<Self> {
        let payload: Value = serde_json::from_str(raw)?;
        Ok(Self::coerce(payload))
    }

    /// Value of a field, if the key is present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns `true` if the key is present (an explicit `null` counts).
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Insert a field value, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Iterate fields in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the snapshot has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        Ok(Self::coerce(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_object_keeps_fields() {
        let snapshot = Snapshot::coerce(json!({"name": "A", "price": 100}));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("name"), Some(&json!("A")));
        assert_eq!(snapshot.get("price"), Some(&json!(100)));
    }

    #[test]
    fn coerce_wraps_scalar_payload() {
        let snapshot = Snapshot::coerce(json!("just a note"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("value"), Some(&json!("just a note")));
    }

    #[test]
    fn coerce_wraps_array_payload() {
        let snapshot = Snapshot::coerce(json!([1, 2, 3]));
        assert_eq!(snapshot.get("value"), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn coerce_null_is_empty() {
        assert!(Snapshot::coerce(Value::Null).is_empty());
    }

    #[test]
    fn explicit_null_field_is_present() {
        let snapshot = Snapshot::coerce(json!({"note": null}));
        assert!(snapshot.contains_key("note"));
        assert_eq!(snapshot.get("note"), Some(&Value::Null));
    }

    #[test]
    fn from_json_rejects_invalid_text() {
        assert!(Snapshot::from_json("{not json").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();
        let text = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(snapshot, back);
    }
}
