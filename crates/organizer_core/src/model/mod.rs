//! Domain model for calendar/task/note records and user settings.
//!
//! # Responsibility
//! - Define canonical record shapes owned by the in-memory stores.
//! - Own input validation shared by every create/edit path.
//!
//! # Invariants
//! - Every record is identified by a UUID that is never reused in its store.
//! - Records carry no cross-references between events, tasks, and notes.

pub mod event;
pub mod note;
pub mod settings;
pub mod task;
pub mod time_slot;
pub mod validation;
