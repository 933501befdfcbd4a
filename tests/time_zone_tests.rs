use chrono::{FixedOffset, TimeZone, Utc};
use sitedate::{format_date, FormattingOptions, MonthStyle, YearStyle};

#[test]
fn test_time_zone_shifts_date() {
    let date = Utc.with_ymd_and_hms(2024, 1, 5, 3, 0, 0).unwrap();
    let opts = FormattingOptions::new().time_zone("America/New_York");
    assert_eq!(format_date(&date, Some(&opts), Some("en-US")).unwrap(), "1/4/2024");

    let late = Utc.with_ymd_and_hms(2024, 1, 4, 20, 0, 0).unwrap();
    let tokyo = FormattingOptions::new().time_zone("Asia/Tokyo");
    assert_eq!(format_date(&late, Some(&tokyo), Some("en-US")).unwrap(), "1/5/2024");
}

#[test]
fn test_time_zone_only_renders_numeric_date() {
    let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    let opts = FormattingOptions::new().time_zone("UTC");
    assert_eq!(format_date(&date, Some(&opts), Some("en-US")).unwrap(), "1/5/2024");
}

#[test]
fn test_time_zone_with_fields() {
    let date = Utc.with_ymd_and_hms(2024, 2, 1, 2, 0, 0).unwrap();
    let opts = FormattingOptions::new()
        .month(MonthStyle::Long)
        .year(YearStyle::Numeric)
        .time_zone("America/Los_Angeles");
    assert_eq!(format_date(&date, Some(&opts), Some("en-US")).unwrap(), "January 2024");
}

#[test]
fn test_without_time_zone_uses_own_offset() {
    let plus_nine = FixedOffset::east_opt(9 * 3600).unwrap();
    let date = plus_nine.with_ymd_and_hms(2024, 1, 5, 1, 0, 0).unwrap();
    assert_eq!(format_date(&date, None, Some("en-US")).unwrap(), "1/5/2024");
    assert_eq!(
        format_date(&date.with_timezone(&Utc), None, Some("en-US")).unwrap(),
        "1/4/2024"
    );
}

#[test]
fn test_time_zone_name_ignores_case() {
    let date = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
    let utc = FormattingOptions::new().time_zone("utc");
    assert_eq!(format_date(&date, Some(&utc), Some("en-US")).unwrap(), "3/9/2024");

    let early = Utc.with_ymd_and_hms(2024, 1, 5, 3, 0, 0).unwrap();
    let new_york = FormattingOptions::new().time_zone("america/new_york");
    assert_eq!(format_date(&early, Some(&new_york), Some("en-US")).unwrap(), "1/4/2024");
}
