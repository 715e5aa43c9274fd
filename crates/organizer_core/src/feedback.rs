//! Transient user-facing notifications.
//!
//! # Responsibility
//! - Define the `{title, description, variant}` notification shape.
//! - Own the fixed messages shown after organizer actions.
//!
//! # Invariants
//! - Failures always use the destructive variant.
//! - Descriptions never include note, task, or event text.

use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};

const SUCCESS_TITLE: &str = "Success";
const ERROR_TITLE: &str = "Error";
const FILL_ALL_FIELDS: &str = "Please fill in all fields";
const ENTER_TASK_TITLE: &str = "Please enter a task title";

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A short message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    /// Builds a normal (non-destructive) notification.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Builds a destructive notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::new(SUCCESS_TITLE, description)
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// User action on an organizer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectDate,
    AddEvent,
    DeleteEvent,
    AddTask,
    ToggleTask,
    DeleteTask,
    AddNote,
    EditNote,
    MoveNote,
    DeleteNote,
}

impl Action {
    /// Stable name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelectDate => "select_date",
            Self::AddEvent => "add_event",
            Self::DeleteEvent => "delete_event",
            Self::AddTask => "add_task",
            Self::ToggleTask => "toggle_task",
            Self::DeleteTask => "delete_task",
            Self::AddNote => "add_note",
            Self::EditNote => "edit_note",
            Self::MoveNote => "move_note",
            Self::DeleteNote => "delete_note",
        }
    }

    /// Message shown when the action succeeds.
    ///
    /// Returns `None` for actions that do not announce themselves.
    pub fn succeeded(self) -> Option<Notification> {
        let description = match self {
            Self::AddEvent => "Event added successfully",
            Self::DeleteEvent => "Event deleted successfully",
            Self::AddTask => "Task added successfully",
            Self::DeleteTask => "Task deleted successfully",
            Self::AddNote => "Note added successfully",
            Self::EditNote => "Note updated successfully",
            Self::DeleteNote => "Note deleted successfully",
            Self::SelectDate | Self::ToggleTask | Self::MoveNote => return None,
        };
        Some(Notification::success(description))
    }

    /// Message shown when the action is rejected by validation.
    pub fn rejected(self, err: &ValidationError) -> Notification {
        let description = match (self, err) {
            (Self::AddTask, ValidationError::EmptyField(_)) => ENTER_TASK_TITLE.to_string(),
            (_, ValidationError::EmptyField(_) | ValidationError::MissingDate) => {
                FILL_ALL_FIELDS.to_string()
            }
            (_, other) => other.to_string(),
        };
        Notification::destructive(ERROR_TITLE, description)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, NotificationVariant};
    use crate::model::validation::ValidationError;

    #[test]
    fn success_messages_use_default_variant() {
        let notification = Action::EditNote.succeeded().expect("edit is announced");
        assert_eq!(notification.title, "Success");
        assert_eq!(notification.description, "Note updated successfully");
        assert_eq!(notification.variant, NotificationVariant::Default);
    }

    #[test]
    fn toggle_and_move_are_silent() {
        assert!(Action::ToggleTask.succeeded().is_none());
        assert!(Action::MoveNote.succeeded().is_none());
    }

    #[test]
    fn empty_task_title_gets_task_specific_message() {
        let notification = Action::AddTask.rejected(&ValidationError::EmptyField("title"));
        assert!(notification.is_destructive());
        assert_eq!(notification.description, "Please enter a task title");
    }

    #[test]
    fn missing_fields_share_fill_all_message() {
        let missing_date = Action::AddEvent.rejected(&ValidationError::MissingDate);
        let empty_content = Action::AddNote.rejected(&ValidationError::EmptyField("content"));
        assert_eq!(missing_date.description, "Please fill in all fields");
        assert_eq!(empty_content.description, "Please fill in all fields");
    }

    #[test]
    fn parse_failures_surface_their_own_message() {
        let err = ValidationError::InvalidStatus("archived".to_string());
        let notification = Action::MoveNote.rejected(&err);
        assert_eq!(notification.title, "Error");
        assert!(notification.description.contains("archived"));
    }

    #[test]
    fn serializes_variant_in_snake_case() {
        let value = serde_json::to_value(Action::DeleteTask.succeeded().unwrap()).unwrap();
        assert_eq!(value["variant"], "default");
        assert_eq!(value["description"], "Task deleted successfully");
    }
}
