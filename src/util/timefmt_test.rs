use super::*;
use time::macros::datetime;

#[test]
fn parses_naive_timestamp_with_microseconds() {
    let dt = parse_timestamp("2026-10-19T13:45:00.123456").unwrap();
    assert_eq!(dt, datetime!(2026-10-19 13:45:00.123456));
}

#[test]
fn parses_naive_timestamp_without_fraction() {
    let dt = parse_timestamp("2026-10-19T13:45:00").unwrap();
    assert_eq!(dt, datetime!(2026-10-19 13:45:00));
}

#[test]
fn parses_rfc3339_keeping_wall_clock() {
    let dt = parse_timestamp("2026-10-19T13:45:00+07:00").unwrap();
    assert_eq!(dt, datetime!(2026-10-19 13:45:00));
}

#[test]
fn rejects_garbage() {
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn formats_per_locale() {
    assert_eq!(format_timestamp("2026-10-19T13:45:07.5", Locale::Vi), "13:45:07 19/10/2026");
    assert_eq!(format_timestamp("2026-10-19T13:45:07", Locale::En), "10/19/2026, 13:45:07");
}

#[test]
fn unparsable_timestamp_is_shown_raw() {
    assert_eq!(format_timestamp("not-a-date", Locale::Vi), "not-a-date");
}

#[test]
fn task_stamp_format() {
    assert_eq!(task_stamp(datetime!(2026-01-02 03:04:05 UTC)), "2026-01-02 03:04:05");
}
