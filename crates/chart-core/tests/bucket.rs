// File: crates/chart-core/tests/bucket.rs
// Purpose: X-axis label formatting per bucket mode, and mode parsing.

use balance_chart_core::bucket::parse_timestamp;
use balance_chart_core::BucketMode;

#[test]
fn hourly_daily_monthly_labels() {
    let ts = "2024-03-05T14:00:00";
    assert_eq!(BucketMode::Hourly.format_label(ts), "14:00");
    assert_eq!(BucketMode::Daily.format_label(ts), "3/5");
    assert_eq!(BucketMode::Monthly.format_label("2024-03"), "2024-03");
}

#[test]
fn backend_timestamp_shapes_parse() {
    assert_eq!(BucketMode::Hourly.format_label("2024-03-05 00:00:00"), "0:00");
    assert_eq!(BucketMode::Hourly.format_label("2024-12-31 23:00"), "23:00");
    assert_eq!(BucketMode::Daily.format_label("2024-12-31"), "12/31");
    assert_eq!(BucketMode::Daily.format_label("2024-03-05T14:00:00.250"), "3/5");
    assert!(parse_timestamp(" 2024-03-05 ").is_some());
}

#[test]
fn unparseable_labels_pass_through() {
    assert_eq!(BucketMode::Hourly.format_label("yesterday"), "yesterday");
    assert_eq!(BucketMode::Daily.format_label("2024-13-40"), "2024-13-40");
}

#[test]
fn mode_from_str_and_display() {
    assert_eq!("Hourly".parse::<BucketMode>().unwrap(), BucketMode::Hourly);
    assert_eq!(" monthly".parse::<BucketMode>().unwrap(), BucketMode::Monthly);
    assert!("weekly".parse::<BucketMode>().is_err());
    assert_eq!(BucketMode::default(), BucketMode::Daily);
    assert_eq!(BucketMode::Monthly.to_string(), "monthly");
}

#[test]
fn offset_timestamps_keep_their_wall_clock() {
    assert_eq!(BucketMode::Hourly.format_label("2024-03-05T14:00:00Z"), "14:00");
    assert_eq!(BucketMode::Hourly.format_label("2024-03-05T09:30:00+08:00"), "9:00");
    assert_eq!(BucketMode::Daily.format_label("2024-03-05T23:00:00-05:00"), "3/5");
    assert_eq!(BucketMode::Daily.format_label("2024-03-05T14:00:00.5Z"), "3/5");
}
