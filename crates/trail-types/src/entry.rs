use serde::{Deserialize, Serialize};

use crate::action::ChangeAction;
use crate::error::PayloadResult;
use crate::snapshot::Snapshot;

/// One audit-log entry as delivered by the backend detail endpoint.
///
/// Wire keys are camelCase to match the audit service payload. Only the
/// action and the two snapshots participate in diffing; the remaining
/// fields are metadata carried through to the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Entity type the entry belongs to (`Product`, `Customer`, ...).
    pub entity_type: String,
    /// Database id of the entity, when known.
    #[serde(default)]
    pub entity_id: Option<u64>,
    /// The recorded action.
    pub action: ChangeAction,
    /// Entity state before the action; absent for CREATE.
    #[serde(default)]
    pub old_value: Option<Snapshot>,
    /// Entity state after the action; absent for DELETE.
    #[serde(default)]
    pub new_value: Option<Snapshot>,
    /// Operator who performed the action.
    #[serde(default)]
    pub username: Option<String>,
    /// Client address the action came from.
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Raw User-Agent header of the client.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl AuditEntry {
    /// Create a bare entry with no snapshots or metadata.
    pub fn new(entity_type: impl Into<String>, action: ChangeAction) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: None,
            action,
            old_value: None,
            new_value: None,
            username: None,
            ip_address: None,
            user_agent: None,
        }
    }

    /// Decode an entry from its JSON wire form.
    pub fn from_json(raw: &str) -> PayloadResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
