use std::fmt;

use serde::{Deserialize, Serialize};

/// The action recorded with an audit-log entry.
///
/// The audit service writes `CREATE`, `UPDATE`, or `DELETE`. Anything else
/// is kept verbatim in [`ChangeAction::Other`] so that entries written by a
/// newer backend still display instead of failing to decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeAction {
    /// The entity was created; the entry has no "before" snapshot.
    Create,
    /// The entity was updated in place.
    Update,
    /// The entity was deleted; the entry has no "after" snapshot.
    Delete,
    /// An action this build does not recognize, kept for display.
    Other(String),
}

impl ChangeAction {
    /// Parse the wire form of an action.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "CREATE" => Self::Create,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire form of this action.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ChangeAction {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ChangeAction> for String {
    fn from(action: ChangeAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
