//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `organizer_core` and `organizer_ffi` linkage without a UI host.
//! - Optionally bootstrap file logging from `ORGANIZER_LOG_DIR`.
//! - Run one scripted session so store wiring is visible end to end.

use log::info;
use organizer_core::{default_log_level, init_logging, LogLevel};
use organizer_ffi::api::{ActionResponse, OrganizerSession};

const LOG_DIR_ENV: &str = "ORGANIZER_LOG_DIR";
const LOG_LEVEL_ENV: &str = "ORGANIZER_LOG_LEVEL";

fn main() {
    println!("organizer_core ping={}", organizer_core::ping());
    println!("organizer_core version={}", organizer_core::core_version());

    if let Some(log_dir) = env_value(LOG_DIR_ENV) {
        let level = env_value(LOG_LEVEL_ENV)
            .and_then(|raw| LogLevel::parse(&raw).ok())
            .unwrap_or_else(default_log_level);
        match init_logging(level.as_str(), &log_dir) {
            Ok(()) => println!("logging level={level} dir={log_dir}"),
            Err(err) => eprintln!("logging disabled: {err}"),
        }
    }

    run_demo_session();
}

fn run_demo_session() {
    let mut session = OrganizerSession::new();
    info!("event=demo_start module=cli status=ok");

    report("add_event", &session.add_event("Dentist".into(), "09:00".into()));
    report("add_event", &session.add_event("Lunch".into(), "12:30".into()));
    for event in session.events_for_selected_date() {
        println!("  event {} {} {}", event.date, event.time, event.title);
    }

    let task = session.add_task("Buy milk".into());
    report("add_task", &task);
    if let Some(id) = task.id {
        report("toggle_task", &session.toggle_task(id));
    }
    report("add_task", &session.add_task(String::new()));

    let note = session.add_note("Idea".into(), "Write spec".into());
    report("add_note", &note);
    if let Some(id) = note.id {
        report("move_note", &session.move_note(id, "doing".into()));
    }
    for column in session.board() {
        println!("  column {} notes={}", column.label, column.notes.len());
    }

    report("set_notifications", &session.set_notifications(true));
    info!("event=demo_finish module=cli status=ok");
}

fn report(action: &str, response: &ActionResponse) {
    match &response.notification {
        Some(toast) => println!(
            "{action} ok={} [{}] {}: {}",
            response.ok, toast.variant, toast.title, toast.description
        ),
        None => println!("{action} ok={}", response.ok),
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
