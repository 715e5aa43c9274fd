//! Calendar event store.
//!
//! # Invariants
//! - Events are never mutated after insertion.
//! - `events_on_date` compares calendar days only.

use crate::model::event::{Event, EventId};
use crate::model::time_slot::TimeSlot;
use crate::model::validation::{require_text, ValidationError};
use crate::store::fresh_id;
use chrono::NaiveDate;
use log::debug;

/// Owned collection of calendar events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates input and appends a new event.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField("title")` for a blank title.
    /// - `ValidationError::MissingDate` when no date is selected.
    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        date: Option<NaiveDate>,
        time: TimeSlot,
    ) -> Result<&Event, ValidationError> {
        let title = title.into();
        require_text("title", &title)?;
        let date = date.ok_or(ValidationError::MissingDate)?;

        let id = fresh_id(|candidate| self.get(candidate).is_some());
        self.events.push(Event::with_id(id, title, date, time));
        debug!(
            "event=event_add module=calendar status=ok id={} count={}",
            id,
            self.events.len()
        );
        Ok(&self.events[self.events.len() - 1])
    }

    /// Removes the event with `id`. Returns whether an entry was removed.
    pub fn remove_event(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;
        debug!(
            "event=event_remove module=calendar status={} id={}",
            if removed { "ok" } else { "noop" },
            id
        );
        removed
    }

    /// Lazily yields events on `date` in insertion order.
    pub fn events_on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |event| event.is_on(date))
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
