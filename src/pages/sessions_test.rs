use super::*;
use time::macros::datetime;

#[test]
fn revoke_summary_pluralizes() {
    assert_eq!(revoke_summary(0), "No other sessions were active.");
    assert_eq!(revoke_summary(1), "Signed out 1 other session.");
    assert_eq!(revoke_summary(4), "Signed out 4 other sessions.");
}

#[test]
fn format_timestamp_normalizes_to_utc() {
    assert_eq!(format_timestamp(datetime!(2026-03-09 23:05 -02:00)), "2026-03-10 01:05 UTC");
}

#[test]
fn format_timestamp_pads_fields() {
    assert_eq!(format_timestamp(datetime!(2026-01-02 03:04 UTC)), "2026-01-02 03:04 UTC");
}
