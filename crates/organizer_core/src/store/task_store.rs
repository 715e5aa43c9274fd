//! Task list store.

use crate::model::task::{Task, TaskId};
use crate::model::validation::{require_text, ValidationError};
use crate::store::fresh_id;
use log::debug;

/// Owned collection of tasks in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an open task.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField("title")` for a blank title.
    pub fn add_task(&mut self, title: impl Into<String>) -> Result<&Task, ValidationError> {
        let title = title.into();
        require_text("title", &title)?;

        let id = fresh_id(|candidate| self.get(candidate).is_some());
        self.tasks.push(Task::with_id(id, title));
        debug!(
            "event=task_add module=tasks status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flips completion of the task with `id`.
    ///
    /// Returns the new `completed` value, or `None` when no task matched.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let completed = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .map(Task::toggle);
        debug!(
            "event=task_toggle module=tasks status={} id={}",
            if completed.is_some() { "ok" } else { "noop" },
            id
        );
        completed
    }

    /// Removes the task with `id`. Returns whether an entry was removed.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        debug!(
            "event=task_remove module=tasks status={} id={}",
            if removed { "ok" } else { "noop" },
            id
        );
        removed
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use uuid::Uuid;

    #[test]
    fn toggle_on_missing_id_reports_none() {
        let mut store = TaskStore::new();
        store.add_task("write report").unwrap();
        assert_eq!(store.toggle_task(Uuid::new_v4()), None);
        assert!(store.iter().all(|task| !task.completed));
    }

    #[test]
    fn remove_only_drops_the_matching_task() {
        let mut store = TaskStore::new();
        let keep = store.add_task("keep").unwrap().id;
        let drop = store.add_task("drop").unwrap().id;

        assert!(store.remove_task(drop));
        assert!(!store.remove_task(drop));
        assert_eq!(store.len(), 1);
        assert!(store.get(keep).is_some());
    }
}
