use rtimeclock::core::TimeLog;
use rtimeclock::core::status::{available_actions, is_available};
use rtimeclock::errors::AppError;
use rtimeclock::models::{LogEntry, LogKind};
use rtimeclock::models::LogKind::*;

mod common;
use common::at;

#[test]
fn test_status_is_none_for_empty_log() {
    let log = TimeLog::new();
    assert!(log.is_empty());
    assert_eq!(log.current_status(), None);
}

#[test]
fn test_status_follows_tail_until_work_end() {
    let mut log = TimeLog::new();

    log.append(WorkStart, at(2025, 6, 10, 9, 0));
    assert_eq!(log.current_status(), Some(WorkStart));

    log.append(BreakStart, at(2025, 6, 10, 12, 0));
    assert_eq!(log.current_status(), Some(BreakStart));

    log.append(BreakEnd, at(2025, 6, 10, 13, 0));
    assert_eq!(log.current_status(), Some(BreakEnd));

    log.append(WorkEnd, at(2025, 6, 10, 17, 0));
    assert_eq!(log.current_status(), None);
    assert_eq!(log.len(), 4);
}

#[test]
fn test_work_end_without_open_day_is_a_noop() {
    let mut log = TimeLog::new();

    assert!(log.append(WorkEnd, at(2025, 6, 10, 9, 0)).is_none());
    assert_eq!(log.len(), 0);

    log.append(WorkStart, at(2025, 6, 10, 9, 0));
    log.append(WorkEnd, at(2025, 6, 10, 17, 0));
    assert!(log.append(WorkEnd, at(2025, 6, 10, 17, 5)).is_none());
    assert_eq!(log.len(), 2);
}

#[test]
fn test_any_other_sequence_is_accepted() {
    // The store only guards WorkEnd; the summary copes with the rest.
    let mut log = TimeLog::new();
    for (i, kind) in [WorkStart, WorkStart, BreakEnd, ClientEnd].iter().enumerate() {
        assert!(log.append(*kind, at(2025, 6, 10, 9, i as u32)).is_some());
    }
    assert_eq!(log.len(), 4);
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let mut log = TimeLog::new();
    let now = at(2025, 6, 10, 9, 0);

    // Same instant three times: ids must still differ.
    let a = log.append(WorkStart, now).unwrap();
    let b = log.append(BreakStart, now).unwrap();
    let c = log.append(BreakEnd, now).unwrap();
    let d = log.append(WorkEnd, at(2025, 6, 10, 17, 0)).unwrap();

    assert_eq!(a.id, now.timestamp_millis());
    assert!(a.id < b.id && b.id < c.id && c.id < d.id);
}

#[test]
fn test_entries_on_filters_by_local_day_in_order() {
    let mut log = TimeLog::new();
    log.append(WorkStart, at(2025, 6, 10, 9, 0));
    log.append(WorkEnd, at(2025, 6, 10, 17, 0));
    log.append(WorkStart, at(2025, 6, 11, 8, 0));
    log.append(BreakStart, at(2025, 6, 11, 12, 0));

    let day = log.entries_on(at(2025, 6, 11, 0, 0).date_naive());
    let kinds: Vec<LogKind> = day.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![WorkStart, BreakStart]);

    assert!(
        log.entries_on(at(2025, 6, 12, 0, 0).date_naive())
            .is_empty()
    );
}

#[test]
fn test_json_blob_rehydrates_kinds_and_instants() {
    let mut log = TimeLog::new();
    log.append(WorkStart, at(2025, 6, 10, 9, 0));
    log.append(ClientStart, at(2025, 6, 10, 10, 30));

    let json = log.to_json().unwrap();
    assert!(json.contains("\"type\":\"WorkStart\""));
    assert!(json.contains("\"timestamp\""));

    let (restored, dropped) = TimeLog::from_json(&json).unwrap();
    assert!(dropped.is_empty());
    assert_eq!(restored.entries(), log.entries());
    assert_eq!(restored.current_status(), Some(ClientStart));
}

#[test]
fn test_legacy_blob_with_labels_and_utc_timestamps_loads() {
    let blob = r#"[
        {"id": 1718010000000, "type": "Início de Jornada", "timestamp": "2024-06-10T09:00:00.000Z"},
        {"id": 1718020000000, "type": "Início de Intervalo", "timestamp": "2024-06-10T12:00:00.000Z"}
    ]"#;

    let (log, dropped) = TimeLog::from_json(blob).unwrap();

    assert!(dropped.is_empty());
    assert_eq!(log.len(), 2);
    assert_eq!(log.entries()[0].kind, WorkStart);
    assert_eq!(
        log.entries()[0].timestamp.timestamp_millis(),
        1_718_010_000_000
    );
    assert_eq!(log.current_status(), Some(BreakStart));
}

#[test]
fn test_bad_items_are_dropped_with_a_warning_each() {
    let blob = r#"[
        {"id": 1, "type": "WorkStart", "timestamp": "2025-06-10T09:00:00+00:00"},
        {"id": 2, "type": "Lunch", "timestamp": "2025-06-10T12:00:00+00:00"},
        {"id": 3, "type": "WorkEnd", "timestamp": "not a date"},
        {"id": 4, "type": "WorkEnd", "timestamp": "2025-06-10T17:00:00+00:00"}
    ]"#;

    let (log, dropped) = TimeLog::from_json(blob).unwrap();

    assert_eq!(log.len(), 2);
    assert_eq!(dropped.len(), 2);
    assert_eq!(log.current_status(), None);
}

#[test]
fn test_non_array_blob_is_corrupt() {
    assert!(matches!(
        TimeLog::from_json("{\"id\": 1}"),
        Err(AppError::CorruptLog(_))
    ));
    assert!(matches!(
        TimeLog::from_json("[{\"id\": 1,"),
        Err(AppError::CorruptLog(_))
    ));
}

#[test]
fn test_available_actions_mirror_the_clock_buttons() {
    assert_eq!(available_actions(None), vec![WorkStart]);

    for working in [WorkStart, BreakEnd, ClientEnd] {
        assert_eq!(
            available_actions(Some(working)),
            vec![BreakStart, ClientStart, WorkEnd]
        );
    }

    assert_eq!(available_actions(Some(BreakStart)), vec![BreakEnd]);
    assert_eq!(available_actions(Some(ClientStart)), vec![ClientEnd]);

    assert!(!is_available(Some(BreakStart), WorkEnd));
    assert!(!is_available(Some(WorkStart), WorkStart));
    assert!(is_available(None, WorkStart));
}

#[test]
fn test_log_kind_codes() {
    for kind in LogKind::ALL {
        assert_eq!(LogKind::from_code(kind.code()), Some(kind));
    }
    assert_eq!(LogKind::from_code("BREAK_START"), Some(BreakStart));
    assert_eq!(LogKind::from_code("lunch"), None);
}

#[test]
fn test_log_built_from_entries_continues_after_last_id() {
    let late = at(2026, 6, 10, 18, 0).timestamp_millis();
    let entries = vec![
        LogEntry::new(late, WorkStart, at(2026, 6, 10, 9, 0)),
        LogEntry::new(late + 1, BreakStart, at(2026, 6, 10, 12, 0)),
    ];
    let mut log = TimeLog::from_entries(entries);

    assert_eq!(log.current_status(), Some(BreakStart));

    let entry = log.append(BreakEnd, at(2026, 6, 10, 13, 0)).unwrap();
    assert_eq!(entry.id, late + 2);
    assert_eq!(log.len(), 3);
    assert_eq!(log.current_status(), Some(BreakEnd));
}
