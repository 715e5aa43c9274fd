//! In-memory stores owning organizer collections.
//!
//! # Responsibility
//! - Hold each collection as a plain owned `Vec` in insertion order.
//! - Enforce validation before any mutation.
//!
//! # Invariants
//! - A store is mutated only through its own `&mut self` operations.
//! - Remove/toggle/move/edit on a missing id is a no-op, never an error.
//! - Generated ids are unique among a store's live entries.

pub mod event_store;
pub mod note_store;
pub mod task_store;

use uuid::Uuid;

/// Generates a v4 UUID not accepted by `taken`.
fn fresh_id(taken: impl Fn(Uuid) -> bool) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !taken(id) {
            return id;
        }
    }
}
