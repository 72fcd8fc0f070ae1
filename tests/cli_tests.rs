use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rtc, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rtc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_punch_workday_flow() {
    let db_path = setup_test_db("cli_punch_flow");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--test", "punch", "work-start"])
        .assert()
        .success()
        .stdout(contains("Workday start"));

    rtc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Working"))
        .stdout(contains("break-start"));

    rtc()
        .args(["--db", &db_path, "--test", "punch", "break-start"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("On a break"));

    rtc()
        .args(["--db", &db_path, "--test", "punch", "break-end"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "--test", "punch", "work-end"])
        .assert()
        .success()
        .stdout(contains("Workday closed"));

    rtc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Off the clock"));

    rtc()
        .args(["--db", &db_path, "--test", "today"])
        .assert()
        .success()
        .stdout(contains("Worked"))
        .stdout(contains("Break end"))
        .stdout(contains("legal minimum"));
}

#[test]
fn test_work_end_without_start_is_refused() {
    let db_path = setup_test_db("cli_refused_end");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--test", "punch", "work-end"])
        .assert()
        .success()
        .stderr(contains("not available"));

    rtc()
        .args(["--db", &db_path, "--test", "today"])
        .assert()
        .success()
        .stdout(contains("No punches today"));
}

#[test]
fn test_work_end_refused_while_on_break() {
    let db_path = setup_test_db("cli_refused_break");
    init_db(&db_path);

    for kind in ["work-start", "break-start"] {
        rtc()
            .args(["--db", &db_path, "--test", "punch", kind])
            .assert()
            .success();
    }

    rtc()
        .args(["--db", &db_path, "--test", "punch", "work-end"])
        .assert()
        .success()
        .stderr(contains("Available: break-end"));
}

#[test]
fn test_unknown_punch_kind_fails() {
    let db_path = setup_test_db("cli_bad_kind");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--test", "punch", "lunch"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch type"));
}

#[test]
fn test_day_view_flags_odd_punch_count() {
    let db_path = setup_test_db("cli_day_odd");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--test", "punch", "work-start"])
        .assert()
        .success();

    let today = chrono::Local::now().date_naive().to_string();

    rtc()
        .args(["--db", &db_path, "--test", "day", &today])
        .assert()
        .success()
        .stdout(contains("Workday start"))
        .stderr(contains("Odd punch count"));

    rtc()
        .args(["--db", &db_path, "--test", "day", "1999-01-01"])
        .assert()
        .success()
        .stdout(contains("No punches for this date"));

    rtc()
        .args(["--db", &db_path, "--test", "day", "01/01/1999"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_calendar_renders_twelve_months() {
    let db_path = setup_test_db("cli_calendar");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--test", "calendar", "--year", "2024"])
        .assert()
        .success()
        .stdout(contains("January"))
        .stdout(contains("December"))
        .stdout(contains("Su Mo Tu We Th Fr Sa"))
        .stdout(contains("No punches recorded in 2024"));
}

#[test]
fn test_corrupt_stored_log_does_not_crash() {
    let db_path = setup_test_db("cli_corrupt");
    init_db(&db_path);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "INSERT INTO kv (key, value) VALUES ('timeLog', '{broken')",
        [],
    )
    .expect("seed corrupt log");
    drop(conn);

    rtc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Off the clock"))
        .stderr(contains("Failed to parse time log"));

    // the next punch overwrites the corrupt blob
    rtc()
        .args(["--db", &db_path, "--test", "punch", "work-start"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Working"))
        .stderr(contains("Failed").not());
}

#[test]
fn test_theme_toggle_is_persisted() {
    let db_path = setup_test_db("cli_theme");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--test", "theme"])
        .assert()
        .success()
        .stdout(contains("Current theme: light"));

    rtc()
        .args(["--db", &db_path, "--test", "theme", "toggle"])
        .assert()
        .success()
        .stdout(contains("Theme set to dark"));

    rtc()
        .args(["--db", &db_path, "--test", "theme"])
        .assert()
        .success()
        .stdout(contains("Current theme: dark"));

    rtc()
        .args(["--db", &db_path, "--test", "theme", "sepia"])
        .assert()
        .failure()
        .stderr(contains("Invalid theme"));
}

#[test]
fn test_vacation_request_is_submitted() {
    let db_path = setup_test_db("cli_request");
    init_db(&db_path);

    rtc()
        .args([
            "--db",
            &db_path,
            "--test",
            "request",
            "--kind",
            "vacation",
            "--start",
            "2999-07-01",
            "--end",
            "2999-07-15",
            "--reason",
            "Summer",
        ])
        .assert()
        .success()
        .stdout(contains("Your Vacation request was submitted"))
        .stdout(contains("Pending"))
        .stdout(contains("2999-07-15"));
}

#[test]
fn test_vacation_without_end_is_rejected() {
    let db_path = setup_test_db("cli_request_bad");
    init_db(&db_path);

    rtc()
        .args([
            "--db",
            &db_path,
            "--test",
            "request",
            "--kind",
            "vacation",
            "--start",
            "2999-07-01",
            "--reason",
            "Summer",
        ])
        .assert()
        .failure()
        .stderr(contains("end date"));
}

#[test]
fn test_adjustment_accepts_past_date_time() {
    let db_path = setup_test_db("cli_request_adjust");
    init_db(&db_path);

    rtc()
        .args([
            "--db",
            &db_path,
            "--test",
            "request",
            "--kind",
            "adjustment",
            "--start",
            "2020-03-02 13:00",
            "--reason",
            "Forgot the end of my break",
        ])
        .assert()
        .success()
        .stdout(contains("2020-03-02 13:00"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("cli_internal_log");
    init_db(&db_path);

    rtc()
        .args(["--db", &db_path, "--test", "punch", "work-start"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("punch"))
        .stdout(contains("work-start"));
}

#[test]
fn test_today_watch_stops_after_ticks() {
    let db_path = setup_test_db("cli_watch");
    init_db(&db_path);

    rtc()
        .args([
            "--db", &db_path, "--test", "today", "--watch", "--ticks", "2",
        ])
        .assert()
        .success()
        .stdout(contains("Workday summary"));
}

#[test]
fn test_relative_db_path_is_shared_by_init_and_punch() {
    let root = std::env::temp_dir().join("rtimeclock_relative_db");
    std::fs::remove_dir_all(&root).ok();
    let home = root.join("home");
    let work = root.join("work");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&work).unwrap();
    let work = std::fs::canonicalize(&work).unwrap();

    rtc()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--db", "clock.sqlite", "init"])
        .assert()
        .success();

    let db_file = work.join("clock.sqlite");
    assert!(db_file.exists());
    assert!(!home.join(".rtimeclock").join("clock.sqlite").exists());

    let conf = std::fs::read_to_string(home.join(".rtimeclock").join("rtimeclock.conf")).unwrap();
    assert!(conf.contains(db_file.to_string_lossy().as_ref()));

    rtc()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--db", "clock.sqlite", "punch", "work-start"])
        .assert()
        .success();

    // Without --db the configured path is the same file.
    rtc()
        .current_dir(&work)
        .env("HOME", &home)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Working"));
}

#[test]
fn test_request_says_it_is_not_kept() {
    let db_path = setup_test_db("cli_request_note");
    init_db(&db_path);

    rtc()
        .args([
            "--db",
            &db_path,
            "--test",
            "request",
            "--kind",
            "adjustment",
            "--start",
            "2020-03-02 13:00",
            "--reason",
            "Missed punch",
        ])
        .assert()
        .success()
        .stdout(contains("Requests are not saved"));

    rtc()
        .args(["request", "--help"])
        .assert()
        .success()
        .stdout(contains("not kept after the command ends"));
}
