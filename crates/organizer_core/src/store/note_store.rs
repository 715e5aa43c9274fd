//! Notes board store.
//!
//! # Responsibility
//! - Own note cards and their workflow status.
//! - Serve per-column views for the board.
//!
//! # Invariants
//! - New notes enter the `todo` column.
//! - Edits replace title/content only; `status` and `created_at` survive.
//! - Editing a missing note is a silent no-op.

use crate::model::note::{Note, NoteId, NoteStatus};
use crate::model::validation::{require_text, ValidationError};
use crate::store::fresh_id;
use chrono::{DateTime, Utc};
use log::debug;

/// Owned collection of notes in insertion order.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `todo` note created now.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField` naming the first blank field
    ///   (`title` before `content`).
    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<&Note, ValidationError> {
        self.add_note_at(title, content, Utc::now())
    }

    /// Same as [`NoteStore::add_note`] with an explicit creation time.
    pub fn add_note_at(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<&Note, ValidationError> {
        let title = title.into();
        let content = content.into();
        validate_fields(&title, &content)?;

        let id = fresh_id(|candidate| self.get(candidate).is_some());
        self.notes
            .push(Note::with_id(id, title, content, created_at));
        debug!(
            "event=note_add module=notes status=ok id={} count={}",
            id,
            self.notes.len()
        );
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Replaces title and content of the note with `id`.
    ///
    /// Validation runs before lookup. Returns `Ok(false)` when no note matched.
    pub fn edit_note(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<bool, ValidationError> {
        let title = title.into();
        let content = content.into();
        validate_fields(&title, &content)?;

        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_edit module=notes status=noop id={id}");
            return Ok(false);
        };
        note.title = title;
        note.content = content;
        debug!("event=note_edit module=notes status=ok id={id}");
        Ok(true)
    }

    /// Moves the note with `id` into `status`. Returns whether a note matched.
    pub fn move_note(&mut self, id: NoteId, status: NoteStatus) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_move module=notes status=noop id={id}");
            return false;
        };
        let from = note.status;
        note.status = status;
        debug!("event=note_move module=notes status=ok id={id} from={from} to={status}");
        true
    }

    /// Lazily yields notes in `status` in insertion order.
    pub fn notes_by_status(&self, status: NoteStatus) -> impl Iterator<Item = &Note> + '_ {
        self.notes.iter().filter(move |note| note.status == status)
    }

    /// Removes the note with `id`. Returns whether an entry was removed.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        debug!(
            "event=note_delete module=notes status={} id={}",
            if removed { "ok" } else { "noop" },
            id
        );
        removed
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> + '_ {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

fn validate_fields(title: &str, content: &str) -> Result<(), ValidationError> {
    require_text("title", title)?;
    require_text("content", content)
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::model::note::NoteStatus;
    use crate::model::validation::ValidationError;

    #[test]
    fn add_reports_title_before_content() {
        let mut store = NoteStore::new();
        assert_eq!(
            store.add_note(" ", " ").unwrap_err(),
            ValidationError::EmptyField("title")
        );
        assert_eq!(
            store.add_note("t", "").unwrap_err(),
            ValidationError::EmptyField("content")
        );
        assert!(store.is_empty());
    }

    #[test]
    fn move_can_go_backwards() {
        let mut store = NoteStore::new();
        let id = store.add_note("a", "b").unwrap().id;

        assert!(store.move_note(id, NoteStatus::Done));
        assert!(store.move_note(id, NoteStatus::Todo));
        assert_eq!(store.get(id).unwrap().status, NoteStatus::Todo);
    }
}
