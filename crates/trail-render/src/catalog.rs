//! Field metadata registry: labels, display kinds, and sensitivity.
//!
//! The audit log stores raw field names; the catalog maps them to human
//! labels and formatting kinds per entity type. Unregistered fields fall
//! back to a humanized label and a name-based sensitivity check, so the
//! pipeline keeps working for entities nobody has described yet.

use std::collections::BTreeMap;

use trail_types::FieldKind;

/// Display metadata for one field of one entity type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Human-readable label shown instead of the raw key.
    pub label: String,
    /// Display kind driving value formatting.
    pub kind: FieldKind,
    /// Whether values must be masked.
    pub sensitive: bool,
}

impl FieldSpec {
    /// Spec with the given label, `Text` kind, not sensitive.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Text,
            sensitive: false,
        }
    }

    /// Set the display kind.
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark values as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Registry of field specs keyed by entity type and field name.
#[derive(Clone, Debug, Default)]
pub struct FieldCatalog {
    entries: BTreeMap<String, BTreeMap<String, FieldSpec>>,
}

impl FieldCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the spec for a field of an entity type.
    pub fn register(
        &mut self,
        entity_type: impl Into<String>,
        field: impl Into<String>,
        spec: FieldSpec,
    ) -> &mut Self {
        self.entries
            .entry(entity_type.into())
            .or_default()
            .insert(field.into(), spec);
        self
    }

    /// Spec for a field: the registered one, or a derived fallback with a
    /// humanized label, the default kind, and sensitivity inferred from
    /// the field name.
    pub fn spec_for(&self, entity_type: &str, field: &str) -> FieldSpec {
        self.entries
            .get(entity_type)
            .and_then(|fields| fields.get(field))
            .cloned()
            .unwrap_or_else(|| FieldSpec {
                label: humanize(field),
                kind: FieldKind::default(),
                sensitive: looks_sensitive(field),
            })
    }

    /// Number of registered specs across all entity types.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turn a raw field name into a readable label: `purchasePrice` and
/// `purchase_price` both become `Purchase price`.
fn humanize(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if c == '_' || c == '-' {
            label.push(' ');
        } else if c.is_uppercase() && i > 0 {
            label.push(' ');
            label.push(c.to_ascii_lowercase());
        } else if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
    }
    label
}

fn looks_sensitive(field: &str) -> bool {
    let lower = field.to_lowercase();
    lower.contains("password")
        || lower.contains("secret")
        || lower.contains("token")
        || lower == "pin"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_spec_wins() {
        let mut catalog = FieldCatalog::new();
        catalog.register(
            "Product",
            "purchasePrice",
            FieldSpec::labeled("Purchase price").kind(FieldKind::Currency),
        );

        let spec = catalog.spec_for("Product", "purchasePrice");
        assert_eq!(spec.label, "Purchase price");
        assert_eq!(spec.kind, FieldKind::Currency);
        assert!(!spec.sensitive);
    }

    #[test]
    fn specs_are_scoped_per_entity_type() {
        let mut catalog = FieldCatalog::new();
        catalog.register("User", "name", FieldSpec::labeled("Login name"));

        assert_eq!(catalog.spec_for("User", "name").label, "Login name");
        assert_eq!(catalog.spec_for("Customer", "name").label, "Name");
    }

    #[test]
    fn fallback_humanizes_field_names() {
        let catalog = FieldCatalog::new();
        assert_eq!(catalog.spec_for("Product", "purchasePrice").label, "Purchase price");
        assert_eq!(catalog.spec_for("Product", "tread_depth").label, "Tread depth");
        assert_eq!(catalog.spec_for("Product", "name").label, "Name");
    }

    #[test]
    fn fallback_kind_is_text() {
        let catalog = FieldCatalog::new();
        assert_eq!(catalog.spec_for("Product", "anything").kind, FieldKind::Text);
    }

    #[test]
    fn sensitive_names_are_inferred() {
        let catalog = FieldCatalog::new();
        assert!(catalog.spec_for("User", "passwordHash").sensitive);
        assert!(catalog.spec_for("User", "apiToken").sensitive);
        assert!(catalog.spec_for("User", "pin").sensitive);
        // Substring matches must not overreach.
        assert!(!catalog.spec_for("Sale", "shippingAddress").sensitive);
    }

    #[test]
    fn explicit_registration_overrides_inference() {
        let mut catalog = FieldCatalog::new();
        catalog.register("User", "recoveryToken", FieldSpec::labeled("Recovery token"));
        assert!(!catalog.spec_for("User", "recoveryToken").sensitive);
    }
}
