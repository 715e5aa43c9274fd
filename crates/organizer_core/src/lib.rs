//! Core domain logic for the personal organizer.
//! This crate owns the records, validation rules, and in-memory stores
//! that every UI host drives.

pub mod feedback;
pub mod logging;
pub mod model;
pub mod store;

pub use feedback::{Action, Notification, NotificationVariant};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::event::{Event, EventId};
pub use model::note::{Note, NoteId, NoteStatus};
pub use model::settings::{Settings, Theme};
pub use model::task::{Task, TaskId};
pub use model::time_slot::{time_slots, TimeSlot, SLOTS_PER_DAY};
pub use model::validation::ValidationError;
pub use store::event_store::EventStore;
pub use store::note_store::NoteStore;
pub use store::task_store::TaskStore;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
