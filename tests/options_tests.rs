use chrono::{TimeZone, Utc};
use sitedate::{format_date, DayStyle, FormattingOptions, MonthStyle, YearStyle};

#[test]
fn test_default_options() {
    let opts = FormattingOptions::defaults();
    assert_eq!(opts.year, Some(YearStyle::Numeric));
    assert_eq!(opts.month, Some(MonthStyle::Numeric));
    assert_eq!(opts.day, Some(DayStyle::Numeric));
    assert_eq!(opts.time_zone, None);
}

#[test]
fn test_options_from_json() {
    let opts: FormattingOptions = serde_json::from_str(r#"{"year": "2-digit"}"#).unwrap();
    assert_eq!(opts, FormattingOptions::new().year(YearStyle::TwoDigit));

    let opts: FormattingOptions =
        serde_json::from_str(r#"{"month": "long", "day": "numeric", "timeZone": "Europe/Paris"}"#).unwrap();
    assert_eq!(opts.month, Some(MonthStyle::Long));
    assert_eq!(opts.time_zone.as_deref(), Some("Europe/Paris"));
}

#[test]
fn test_options_from_empty_json() {
    let opts: FormattingOptions = serde_json::from_str("{}").unwrap();
    assert!(opts.is_empty());

    let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    assert_eq!(format_date(&date, Some(&opts), Some("en-US")).unwrap(), "1/5/2024");
}

#[test]
fn test_options_json_rejects_unknown() {
    assert!(serde_json::from_str::<FormattingOptions>(r#"{"month": "tiny"}"#).is_err());
    assert!(serde_json::from_str::<FormattingOptions>(r#"{"hour": "numeric"}"#).is_err());
}

#[test]
fn test_options_serialize_skips_absent_fields() {
    let opts = FormattingOptions::new().day(DayStyle::TwoDigit).time_zone("UTC");
    assert_eq!(
        serde_json::to_string(&opts).unwrap(),
        r#"{"day":"2-digit","timeZone":"UTC"}"#
    );
}
