//! Kanban note record and workflow status.
//!
//! # Responsibility
//! - Define the note shape rendered on the notes board.
//! - Define the three board columns and their text forms.
//!
//! # Invariants
//! - `status` is always one of `todo|doing|done`; new notes start at `todo`.
//! - `created_at` is set once at creation and survives edits and moves.
//! - Transitions are unrestricted: any status is reachable from any other.

use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for notes.
pub type NoteId = Uuid;

/// Workflow column for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    /// Not started yet.
    #[default]
    Todo,
    /// In progress.
    Doing,
    /// Finished.
    Done,
}

impl NoteStatus {
    /// Board columns in display order.
    pub const ALL: [NoteStatus; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Stable wire form, also used as drop-target identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Column heading shown on the board.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Doing => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl Display for NoteStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// One card on the notes board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub status: NoteStatus,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a `todo` note with a caller-provided ID and creation time.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            status: NoteStatus::Todo,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStatus;
    use crate::model::validation::ValidationError;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(" DOING ".parse::<NoteStatus>(), Ok(NoteStatus::Doing));
        assert_eq!("done".parse::<NoteStatus>(), Ok(NoteStatus::Done));
    }

    #[test]
    fn status_rejects_unknown_columns() {
        assert_eq!(
            "archived".parse::<NoteStatus>(),
            Err(ValidationError::InvalidStatus("archived".to_string()))
        );
    }

    #[test]
    fn columns_are_listed_in_board_order() {
        let names: Vec<_> = NoteStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["todo", "doing", "done"]);
        assert_eq!(NoteStatus::default(), NoteStatus::Todo);
    }
}
