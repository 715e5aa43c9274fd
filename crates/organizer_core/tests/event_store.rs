use chrono::NaiveDate;
use organizer_core::{EventStore, TimeSlot, ValidationError};
use std::collections::HashSet;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn slot(raw: &str) -> TimeSlot {
    TimeSlot::parse(raw).unwrap()
}

#[test]
fn events_on_date_returns_same_day_entries_in_insertion_order() {
    let mut store = EventStore::new();
    let dentist = store
        .add_event("Dentist", Some(date(2024, 3, 1)), slot("09:00"))
        .unwrap()
        .id;
    let lunch = store
        .add_event("Lunch", Some(date(2024, 3, 1)), slot("12:30"))
        .unwrap()
        .id;

    let listed: Vec<_> = store
        .events_on_date(date(2024, 3, 1))
        .map(|event| (event.id, event.title.as_str()))
        .collect();
    assert_eq!(listed, vec![(dentist, "Dentist"), (lunch, "Lunch")]);
    assert_eq!(store.events_on_date(date(2024, 3, 2)).count(), 0);
}

#[test]
fn events_on_date_ignores_time_of_day() {
    let mut store = EventStore::new();
    store
        .add_event("Late", Some(date(2024, 3, 1)), slot("23:30"))
        .unwrap();
    store
        .add_event("Early", Some(date(2024, 3, 1)), slot("00:00"))
        .unwrap();
    store
        .add_event("Next day", Some(date(2024, 3, 2)), slot("00:00"))
        .unwrap();

    let titles: Vec<_> = store
        .events_on_date(date(2024, 3, 1))
        .map(|event| event.title.clone())
        .collect();
    assert_eq!(titles, vec!["Late".to_string(), "Early".to_string()]);
}

#[test]
fn add_event_rejects_blank_title_and_missing_date() {
    let mut store = EventStore::new();

    let err = store
        .add_event("   ", Some(date(2024, 3, 1)), slot("09:00"))
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyField("title"));

    let err = store.add_event("Dentist", None, slot("09:00")).unwrap_err();
    assert_eq!(err, ValidationError::MissingDate);

    assert!(store.is_empty());
}

#[test]
fn remove_event_on_missing_id_is_a_noop() {
    let mut store = EventStore::new();
    let id = store
        .add_event("Dentist", Some(date(2024, 3, 1)), slot("09:00"))
        .unwrap()
        .id;

    assert!(!store.remove_event(Uuid::new_v4()));
    assert_eq!(store.len(), 1);

    assert!(store.remove_event(id));
    assert!(!store.remove_event(id));
    assert!(store.is_empty());
}

#[test]
fn generated_ids_are_unique() {
    let mut store = EventStore::new();
    for idx in 0..200 {
        store
            .add_event(format!("event {idx}"), Some(date(2024, 1, 1)), slot("08:00"))
            .unwrap();
    }
    let ids: HashSet<_> = store.iter().map(|event| event.id).collect();
    assert_eq!(ids.len(), 200);
}
