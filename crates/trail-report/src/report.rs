//! Assembly of the display-ready detail model for one audit entry.
//!
//! Mirrors what the audit detail endpoint hands a client: the change
//! table (diff rows that actually changed, with catalog labels and
//! formatted values), the line-level JSON view, and parsed device info.

use serde::{Deserialize, Serialize};
use tracing::debug;

use trail_diff::{build_comparison, diff_snapshot_json, JsonDiff};
use trail_render::{format_value, FieldCatalog};
use trail_types::{AuditEntry, ChangeAction, ChangeType, FieldKind};

use crate::device::{parse_user_agent, DeviceInfo};

/// One row of the change table: a field that differs between the
/// snapshots, with its display metadata and formatted values.
///
/// Wire keys match the audit service DTO (`fieldLabel`, `fieldType`,
/// `oldValue`/`newValue` carrying the formatted text).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    /// Raw field key.
    pub field_name: String,
    /// Human label from the catalog.
    pub field_label: String,
    /// Display kind the values were formatted with.
    #[serde(rename = "fieldType")]
    pub kind: FieldKind,
    /// Whether the values were masked.
    pub sensitive: bool,
    /// How the field changed; never [`ChangeType::Unchanged`] here.
    pub change_type: ChangeType,
    /// Formatted old-side text (`-` when the side is absent).
    #[serde(rename = "oldValue")]
    pub old_text: String,
    /// Formatted new-side text (`-` when the side is absent).
    #[serde(rename = "newValue")]
    pub new_text: String,
}

/// The assembled detail model for one audit entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReport {
    /// Entity type the entry belongs to.
    pub entity_type: String,
    /// Database id of the entity, when known.
    #[serde(default)]
    pub entity_id: Option<u64>,
    /// The recorded action.
    pub action: ChangeAction,
    /// Operator who performed the action.
    #[serde(default)]
    pub username: Option<String>,
    /// Client address the action came from.
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Device and browser parsed from the recorded User-Agent.
    #[serde(rename = "deviceInfo")]
    pub device: DeviceInfo,
    /// Changed fields only, in sorted key order.
    pub changes: Vec<FieldReport>,
    /// Line-level view of both serialized snapshots.
    pub json_view: JsonDiff,
}

impl ChangeReport {
    /// Returns `true` if no field differs between the snapshots.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Assemble the detail model for an entry.
///
/// Runs the snapshot comparison, keeps the rows that represent an actual
/// difference, and formats each side per the catalog's field spec. The
/// full side-by-side JSON view and the parsed device info ride along.
/// Never fails: a malformed entry with both snapshots absent produces an
/// empty report.
pub fn build_report(entry: &AuditEntry, catalog: &FieldCatalog) -> ChangeReport {
    let comparison = build_comparison(
        entry.action.clone(),
        entry.old_value.as_ref(),
        entry.new_value.as_ref(),
    );

    let changes: Vec<FieldReport> = comparison
        .changed()
        .map(|field| {
            let spec = catalog.spec_for(&entry.entity_type, &field.field_name);
            let old_text = format_value(field.old_value.as_ref(), spec.kind, spec.sensitive);
            let new_text = format_value(field.new_value.as_ref(), spec.kind, spec.sensitive);
            FieldReport {
                field_name: field.field_name.clone(),
                field_label: spec.label,
                kind: spec.kind,
                sensitive: spec.sensitive,
                change_type: field.change_type,
                old_text,
                new_text,
            }
        })
        .collect();

    let json_view = diff_snapshot_json(entry.old_value.as_ref(), entry.new_value.as_ref());
    let device = parse_user_agent(entry.user_agent.as_deref());

    debug!(
        entity = %entry.entity_type,
        action = %entry.action,
        changes = changes.len(),
        "assembled change report"
    );

    ChangeReport {
        entity_type: entry.entity_type.clone(),
        entity_id: entry.entity_id,
        action: entry.action.clone(),
        username: entry.username.clone(),
        ip_address: entry.ip_address.clone(),
        device,
        changes,
        json_view,
    }
}
