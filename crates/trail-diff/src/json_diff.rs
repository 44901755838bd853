//! Line-level JSON comparison of the two snapshots.
//!
//! Backs the side-by-side "JSON view" of an audit entry: both snapshots
//! are pretty-printed and diffed line by line with the `similar` crate. An
//! absent side renders as empty text, so a CREATE shows every line as
//! added and a DELETE every line as removed.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use trail_types::Snapshot;

/// A single line in the JSON comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonLine {
    /// Present in both documents.
    Context(String),
    /// Present only in the new document.
    Added(String),
    /// Present only in the old document.
    Removed(String),
}

/// Line-by-line comparison of the pretty-printed snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDiff {
    /// Every line of both documents, in diff order.
    pub lines: Vec<JsonLine>,
}

impl JsonDiff {
    /// Returns `true` if the two documents are identical.
    pub fn is_unchanged(&self) -> bool {
        self.lines.iter().all(|l| matches!(l, JsonLine::Context(_)))
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, JsonLine::Added(_)))
            .count()
    }

    /// Number of removed lines.
    pub fn deletions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, JsonLine::Removed(_)))
            .count()
    }
}

/// Compare the pretty-printed JSON of two optional snapshots.
pub fn diff_snapshot_json(old: Option<&Snapshot>, new: Option<&Snapshot>) -> JsonDiff {
    let old_text = pretty_text(old);
    let new_text = pretty_text(new);

    let text_diff = TextDiff::from_lines(&old_text, &new_text);
    let lines = text_diff
        .iter_all_changes()
        .map(|change| {
            let text = change.value().trim_end_matches('\n').to_string();
            match change.tag() {
                ChangeTag::Equal => JsonLine::Context(text),
                ChangeTag::Insert => JsonLine::Added(text),
                ChangeTag::Delete => JsonLine::Removed(text),
            }
        })
        .collect();

    JsonDiff { lines }
}

/// Pretty-printed form of one side; absent sides render as empty text.
fn pretty_text(snapshot: Option<&Snapshot>) -> String {
    match snapshot {
        Some(s) => serde_json::to_string_pretty(s).unwrap_or_else(|_| String::new()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn snapshot(pairs: &[(&str, Value)]) -> Snapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn identical_snapshots_are_unchanged() {
        let state = snapshot(&[("name", json!("A")), ("price", json!(100))]);
        let diff = diff_snapshot_json(Some(&state), Some(&state));

        assert!(diff.is_unchanged());
        assert_eq!(diff.additions(), 0);
        assert_eq!(diff.deletions(), 0);
        assert!(!diff.lines.is_empty());
    }

    #[test]
    fn create_shows_only_added_lines() {
        let new = snapshot(&[("name", json!("A"))]);
        let diff = diff_snapshot_json(None, Some(&new));

        assert!(!diff.is_unchanged());
        assert_eq!(diff.deletions(), 0);
        assert!(diff.additions() >= 3); // braces plus one field line
    }

    #[test]
    fn delete_shows_only_removed_lines() {
        let old = snapshot(&[("name", json!("A"))]);
        let diff = diff_snapshot_json(Some(&old), None);

        assert_eq!(diff.additions(), 0);
        assert!(diff.deletions() >= 3);
    }

    #[test]
    fn modified_field_produces_paired_lines() {
        let old = snapshot(&[("name", json!("A")), ("price", json!(100))]);
        let new = snapshot(&[("name", json!("A")), ("price", json!(120))]);

        let diff = diff_snapshot_json(Some(&old), Some(&new));
        assert!(diff.additions() >= 1);
        assert!(diff.deletions() >= 1);
        assert!(diff
            .lines
            .iter()
            .any(|l| matches!(l, JsonLine::Context(_))));
    }

    #[test]
    fn both_sides_absent_is_empty() {
        let diff = diff_snapshot_json(None, None);
        assert!(diff.lines.is_empty());
        assert!(diff.is_unchanged());
    }
}
