//! Task list record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for tasks.
pub type TaskId = Uuid;

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Creates an open (not completed) task with a caller-provided ID.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Flips completion state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
