use chrono::{NaiveDate, TimeZone, Utc};
use organizer_core::{Event, Note, NoteStatus, Settings, Task, Theme, TimeSlot};
use uuid::Uuid;

fn fixed_id() -> Uuid {
    Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap()
}

#[test]
fn event_serializes_date_and_time_as_text() {
    let event = Event::with_id(
        fixed_id(),
        "Dentist",
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        TimeSlot::parse("09:00").unwrap(),
    );

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], fixed_id().to_string());
    assert_eq!(json["date"], "2024-03-01");
    assert_eq!(json["time"], "09:00");

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn event_deserialize_rejects_off_grid_time() {
    let value = serde_json::json!({
        "id": fixed_id().to_string(),
        "title": "bad",
        "date": "2024-03-01",
        "time": "09:15"
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(err.to_string().contains("09:15"), "unexpected error: {err}");
}

#[test]
fn note_and_task_use_expected_field_names() {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let mut note = Note::with_id(fixed_id(), "Idea", "Write spec", created_at);
    note.status = NoteStatus::Doing;
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["status"], "doing");
    assert_eq!(json["created_at"], "2024-03-01T12:00:00Z");

    let task = Task::with_id(fixed_id(), "Buy milk");
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["completed"], false);
    assert_eq!(json["title"], "Buy milk");
}

#[test]
fn settings_serialize_theme_in_snake_case() {
    let mut settings = Settings::default();
    settings.set_theme(Theme::System);
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["theme"], "system");
    assert_eq!(json["notifications_enabled"], false);
}
