//! Badge tones and cell emphasis for the comparison views.
//!
//! The change table marks each row with a status badge and decorates the
//! value cells: the old side of a removed field is struck through, the new
//! side of an added field is highlighted. The policy lives here so every
//! surface renders changes the same way.

use trail_types::{ChangeAction, ChangeType};

/// Visual weight of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
    Neutral,
}

/// Decoration applied to one value cell of a change row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// No decoration.
    Plain,
    /// Struck through: a value that went away.
    Strike,
    /// Highlighted: a value that arrived.
    Highlight,
}

/// Badge tone for an action.
pub fn action_tone(action: &ChangeAction) -> Tone {
    match action {
        ChangeAction::Create => Tone::Success,
        ChangeAction::Update => Tone::Info,
        ChangeAction::Delete => Tone::Error,
        ChangeAction::Other(_) => Tone::Neutral,
    }
}

/// Badge tone for a change type.
pub fn change_tone(change: ChangeType) -> Tone {
    match change {
        ChangeType::Added => Tone::Success,
        ChangeType::Modified => Tone::Warning,
        ChangeType::Removed => Tone::Error,
        ChangeType::Unchanged => Tone::Neutral,
    }
}

/// Emphasis for the old-value cell of a row.
pub fn old_side_emphasis(change: ChangeType) -> Emphasis {
    match change {
        ChangeType::Removed => Emphasis::Strike,
        _ => Emphasis::Plain,
    }
}

/// Emphasis for the new-value cell of a row.
pub fn new_side_emphasis(change: ChangeType) -> Emphasis {
    match change {
        ChangeType::Added => Emphasis::Highlight,
        _ => Emphasis::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tones() {
        assert_eq!(action_tone(&ChangeAction::Create), Tone::Success);
        assert_eq!(action_tone(&ChangeAction::Update), Tone::Info);
        assert_eq!(action_tone(&ChangeAction::Delete), Tone::Error);
        assert_eq!(
            action_tone(&ChangeAction::Other("ARCHIVE".into())),
            Tone::Neutral
        );
    }

    #[test]
    fn change_tones() {
        assert_eq!(change_tone(ChangeType::Added), Tone::Success);
        assert_eq!(change_tone(ChangeType::Modified), Tone::Warning);
        assert_eq!(change_tone(ChangeType::Removed), Tone::Error);
        assert_eq!(change_tone(ChangeType::Unchanged), Tone::Neutral);
    }

    #[test]
    fn removed_strikes_the_old_side_only() {
        assert_eq!(old_side_emphasis(ChangeType::Removed), Emphasis::Strike);
        assert_eq!(new_side_emphasis(ChangeType::Removed), Emphasis::Plain);
    }

    #[test]
    fn added_highlights_the_new_side_only() {
        assert_eq!(new_side_emphasis(ChangeType::Added), Emphasis::Highlight);
        assert_eq!(old_side_emphasis(ChangeType::Added), Emphasis::Plain);
    }
}
