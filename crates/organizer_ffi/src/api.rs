//! FFI session API for Flutter-facing organizer screens.
//!
//! # Responsibility
//! - Bind UI controls to organizer store operations.
//! - Turn every outcome into a response envelope with an optional notification.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A rejected action leaves every store unchanged.
//! - Unparseable ids behave like absent ids (no-op).

use chrono::{Local, NaiveDate, SecondsFormat};
use log::{info, warn};
use organizer_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    time_slots as time_slots_inner, Action, Event, EventStore, Note, NoteStatus, NoteStore,
    Notification, NotificationVariant, Settings, Task, TaskStore, Theme, TimeSlot,
    ValidationError,
};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Returns the 48 selectable `HH:MM` event times in chronological order.
#[flutter_rust_bridge::frb(sync)]
pub fn time_slots() -> Vec<String> {
    time_slots_inner().iter().map(TimeSlot::to_string).collect()
}

/// Notification payload rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub title: String,
    pub description: String,
    /// `default|destructive`.
    pub variant: String,
}

impl From<Notification> for NotificationView {
    fn from(value: Notification) -> Self {
        let variant = match value.variant {
            NotificationVariant::Default => "default",
            NotificationVariant::Destructive => "destructive",
        };
        Self {
            title: value.title,
            description: value.description,
            variant: variant.to_string(),
        }
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action was accepted.
    pub ok: bool,
    /// Id of the record the action targeted or created.
    pub id: Option<String>,
    /// Toast to show, if the action announces itself.
    pub notification: Option<NotificationView>,
}

impl ActionResponse {
    fn accepted(action: Action, id: Option<Uuid>) -> Self {
        Self {
            ok: true,
            id: id.map(|value| value.to_string()),
            notification: action.succeeded().map(NotificationView::from),
        }
    }

    fn rejected(action: Action, err: &ValidationError) -> Self {
        warn!(
            "event=ui_action module=ffi action={} status=rejected error_code={}",
            action.as_str(),
            error_code(err)
        );
        Self {
            ok: false,
            id: None,
            notification: Some(action.rejected(err).into()),
        }
    }

    fn quiet() -> Self {
        Self {
            ok: true,
            id: None,
            notification: None,
        }
    }
}

/// Calendar event row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
}

/// Task list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Note card on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Also used as the drag payload.
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: String,
    /// RFC 3339 UTC timestamp.
    pub created_at: String,
}

/// One board column with its cards in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    /// Drop-target identifier (`todo|doing|done`).
    pub status: String,
    pub label: String,
    pub notes: Vec<NoteItem>,
}

/// Preference panel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    /// `light|dark|system`.
    pub theme: String,
    pub dark_mode: bool,
    pub notifications_enabled: bool,
}

/// One user's organizer state: every store plus the calendar selection.
///
/// Hosts create one session per window and pass it explicitly.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Clone)]
pub struct OrganizerSession {
    events: EventStore,
    tasks: TaskStore,
    notes: NoteStore,
    settings: Settings,
    selected_date: Option<NaiveDate>,
}

impl Default for OrganizerSession {
    fn default() -> Self {
        Self {
            events: EventStore::new(),
            tasks: TaskStore::new(),
            notes: NoteStore::new(),
            settings: Settings::default(),
            selected_date: Some(Local::now().date_naive()),
        }
    }
}

impl OrganizerSession {
    /// Creates an empty session with today's date selected.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a calendar day (`YYYY-MM-DD`), or clears the selection.
    #[flutter_rust_bridge::frb(sync)]
    pub fn select_date(&mut self, date: Option<String>) -> ActionResponse {
        match date.as_deref().map(parse_date).transpose() {
            Ok(parsed) => {
                self.selected_date = parsed;
                ActionResponse::quiet()
            }
            Err(err) => ActionResponse::rejected(Action::SelectDate, &err),
        }
    }

    /// Currently selected day as `YYYY-MM-DD`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn selected_date(&self) -> Option<String> {
        self.selected_date
            .map(|date| date.format(DATE_FORMAT).to_string())
    }

    /// Adds an event on the selected day at `time` (`HH:MM`).
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_event(&mut self, title: String, time: String) -> ActionResponse {
        let date = self.selected_date;
        let result = TimeSlot::parse(&time)
            .and_then(|slot| self.events.add_event(title, date, slot).map(|e| e.id));
        finish(Action::AddEvent, result)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_event(&mut self, id: String) -> ActionResponse {
        let target = parse_id(&id);
        let removed = target.is_some_and(|id| self.events.remove_event(id));
        finish_noop_safe(Action::DeleteEvent, target, removed)
    }

    /// Events on the selected day, insertion order. Empty with no selection.
    #[flutter_rust_bridge::frb(sync)]
    pub fn events_for_selected_date(&self) -> Vec<EventItem> {
        match self.selected_date {
            Some(date) => self.events.events_on_date(date).map(event_item).collect(),
            None => Vec::new(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&mut self, title: String) -> ActionResponse {
        let result = self.tasks.add_task(title).map(|task| task.id);
        finish(Action::AddTask, result)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&mut self, id: String) -> ActionResponse {
        let target = parse_id(&id);
        let toggled = target.and_then(|id| self.tasks.toggle_task(id)).is_some();
        finish_noop_safe(Action::ToggleTask, target, toggled)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&mut self, id: String) -> ActionResponse {
        let target = parse_id(&id);
        let removed = target.is_some_and(|id| self.tasks.remove_task(id));
        finish_noop_safe(Action::DeleteTask, target, removed)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn list_tasks(&self) -> Vec<TaskItem> {
        self.tasks.iter().map(task_item).collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_note(&mut self, title: String, content: String) -> ActionResponse {
        let result = self.notes.add_note(title, content).map(|note| note.id);
        finish(Action::AddNote, result)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn edit_note(&mut self, id: String, title: String, content: String) -> ActionResponse {
        let target = parse_id(&id);
        // An unparseable id cannot match, so it takes the missing-note path.
        match self
            .notes
            .edit_note(target.unwrap_or_else(Uuid::nil), title, content)
        {
            Ok(hit) => finish_noop_safe(Action::EditNote, target, hit),
            Err(err) => ActionResponse::rejected(Action::EditNote, &err),
        }
    }

    /// Handles a drop: `payload` is the dragged note id, `status` the column.
    #[flutter_rust_bridge::frb(sync)]
    pub fn move_note(&mut self, payload: String, status: String) -> ActionResponse {
        let status = match status.parse::<NoteStatus>() {
            Ok(status) => status,
            Err(err) => return ActionResponse::rejected(Action::MoveNote, &err),
        };
        let target = parse_id(&payload);
        let moved = target.is_some_and(|id| self.notes.move_note(id, status));
        finish_noop_safe(Action::MoveNote, target, moved)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_note(&mut self, id: String) -> ActionResponse {
        let target = parse_id(&id);
        let removed = target.is_some_and(|id| self.notes.delete_note(id));
        finish_noop_safe(Action::DeleteNote, target, removed)
    }

    /// Full board: one column per status in display order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn board(&self) -> Vec<BoardColumn> {
        NoteStatus::ALL
            .iter()
            .map(|status| BoardColumn {
                status: status.as_str().to_string(),
                label: status.label().to_string(),
                notes: self.notes.notes_by_status(*status).map(note_item).collect(),
            })
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_dark_mode(&mut self, enabled: bool) -> SettingsView {
        self.settings.set_dark_mode(enabled);
        info!(
            "event=settings_change module=ffi key=theme value={}",
            theme_label(self.settings.theme)
        );
        self.settings()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_notifications(&mut self, enabled: bool) -> ActionResponse {
        let notification = self.settings.set_notifications_enabled(enabled);
        info!("event=settings_change module=ffi key=notifications value={enabled}");
        ActionResponse {
            ok: true,
            id: None,
            notification: Some(notification.into()),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn settings(&self) -> SettingsView {
        SettingsView {
            theme: theme_label(self.settings.theme).to_string(),
            dark_mode: self.settings.is_dark_mode(),
            notifications_enabled: self.settings.notifications_enabled,
        }
    }
}

fn finish(action: Action, result: Result<Uuid, ValidationError>) -> ActionResponse {
    match result {
        Ok(id) => {
            info!(
                "event=ui_action module=ffi action={} status=ok id={}",
                action.as_str(),
                id
            );
            ActionResponse::accepted(action, Some(id))
        }
        Err(err) => ActionResponse::rejected(action, &err),
    }
}

// Missing targets are not errors; the action is still acknowledged.
fn finish_noop_safe(action: Action, target: Option<Uuid>, hit: bool) -> ActionResponse {
    info!(
        "event=ui_action module=ffi action={} status={}",
        action.as_str(),
        if hit { "ok" } else { "noop" }
    );
    ActionResponse::accepted(action, target)
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

fn parse_id(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value.trim()).ok()
}

fn error_code(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::EmptyField(_) => "empty_field",
        ValidationError::MissingDate => "missing_date",
        ValidationError::InvalidTime(_) => "invalid_time",
        ValidationError::InvalidStatus(_) => "invalid_status",
        ValidationError::InvalidDate(_) => "invalid_date",
    }
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
        Theme::System => "system",
    }
}

fn event_item(event: &Event) -> EventItem {
    EventItem {
        id: event.id.to_string(),
        title: event.title.clone(),
        date: event.date.format(DATE_FORMAT).to_string(),
        time: event.time.to_string(),
    }
}

fn task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        title: task.title.clone(),
        completed: task.completed,
    }
}

fn note_item(note: &Note) -> NoteItem {
    NoteItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        content: note.content.clone(),
        status: note.status.as_str().to_string(),
        created_at: note.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
