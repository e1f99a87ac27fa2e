//! # Edit Change Detection
//!
//! Compares the record loaded into the edit form with what was submitted
//! and lists the fields that differ, for the success summary.

use crate::model::{UserDraft, UserField};
use serde::Serialize;

/// One field that differs between the original and the submitted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: UserField,
    pub from: String,
    pub to: String,
}

/// Lists the fields of `current` that differ from `original`.
///
/// Fields are compared exactly (no trimming) in the order first name, last
/// name, email, avatar. The avatar is also reported whenever
/// `selected_file_name` is non-empty, even if the resulting URL is
/// unchanged: picking a local file always counts as an avatar change.
pub fn detect_changes(
    original: &UserDraft,
    current: &UserDraft,
    selected_file_name: &str,
) -> Vec<FieldChange> {
    UserField::ALL
        .into_iter()
        .filter(|&field| {
            let differs = original.get(field) != current.get(field);
            match field {
                UserField::Avatar => differs || !selected_file_name.is_empty(),
                _ => differs,
            }
        })
        .map(|field| FieldChange {
            field,
            from: original.get(field).to_string(),
            to: current.get(field).to_string(),
        })
        .collect()
}

/// Renders one change as a user-facing line.
pub fn describe_change(change: &FieldChange, selected_file_name: &str) -> String {
    match change.field {
        UserField::Avatar if !selected_file_name.is_empty() => {
            format!("{}: Selected image: {}", change.field.label(), selected_file_name)
        }
        UserField::Avatar => format!("{}: Profile image URL updated", change.field.label()),
        field => format!(
            "{}: Changed from \"{}\" to \"{}\"",
            field.label(),
            change.from,
            change.to
        ),
    }
}

/// Renders the full success summary shown after an edit.
pub fn summarize(changes: &[FieldChange], selected_file_name: &str) -> Vec<String> {
    if changes.is_empty() {
        return vec!["No changes detected.".to_string()];
    }
    changes
        .iter()
        .map(|change| describe_change(change, selected_file_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserDraft {
        UserDraft::new("A", "B", "e").with_avatar("u")
    }

    #[test]
    fn test_identical_records_have_no_changes() {
        assert!(detect_changes(&record(), &record(), "").is_empty());
    }

    #[test]
    fn test_single_field_change() {
        let mut current = record();
        current.last_name = "C".to_string();
        let changes = detect_changes(&record(), &current, "");
        assert_eq!(
            changes,
            vec![FieldChange {
                field: UserField::LastName,
                from: "B".to_string(),
                to: "C".to_string(),
            }]
        );
    }

    #[test]
    fn test_selected_file_counts_as_avatar_change() {
        let changes = detect_changes(&record(), &record(), "photo.png");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, UserField::Avatar);
        assert_eq!(changes[0].from, changes[0].to);
    }

    #[test]
    fn test_changes_follow_field_order() {
        let current = UserDraft::new("X", "Y", "z").with_avatar("v");
        let fields: Vec<_> = detect_changes(&record(), &current, "")
            .into_iter()
            .map(|c| c.field)
            .collect();
        assert_eq!(fields, UserField::ALL.to_vec());
    }

    #[test]
    fn test_whitespace_difference_is_a_change() {
        let mut current = record();
        current.email = "e ".to_string();
        let changes = detect_changes(&record(), &current, "");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, UserField::Email);
    }

    #[test]
    fn test_summary_lines() {
        let mut current = record();
        current.first_name = "Ana".to_string();
        current.avatar = "w".to_string();

        let changes = detect_changes(&record(), &current, "");
        assert_eq!(
            summarize(&changes, ""),
            vec![
                "First name: Changed from \"A\" to \"Ana\"".to_string(),
                "Avatar: Profile image URL updated".to_string(),
            ]
        );

        let changes = detect_changes(&record(), &record(), "me.jpg");
        assert_eq!(
            summarize(&changes, "me.jpg"),
            vec!["Avatar: Selected image: me.jpg".to_string()]
        );

        assert_eq!(summarize(&[], ""), vec!["No changes detected.".to_string()]);
    }
}
