//! Formatting options and the default option set.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormattingError;

/// How the year is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearStyle {
    /// Full year, e.g. `2024`
    #[serde(rename = "numeric")]
    Numeric,
    /// Last two digits, e.g. `24`
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// How the month is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    /// Full month name, e.g. `January`
    #[serde(rename = "long")]
    Long,
    /// Abbreviated month name, e.g. `Jan`
    #[serde(rename = "short")]
    Short,
    /// Single letter, e.g. `J`
    #[serde(rename = "narrow")]
    Narrow,
}

/// How the day of the month is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

macro_rules! wire_names {
    ($ty:ident, $field:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the option value as written in an options record.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = FormattingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(FormattingError::InvalidOption {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

wire_names!(YearStyle, "year", {
    Numeric => "numeric",
    TwoDigit => "2-digit",
});

wire_names!(MonthStyle, "month", {
    Numeric => "numeric",
    TwoDigit => "2-digit",
    Long => "long",
    Short => "short",
    Narrow => "narrow",
});

wire_names!(DayStyle, "day", {
    Numeric => "numeric",
    TwoDigit => "2-digit",
});

/// Per-call formatting options.
///
/// An absent field is left to the formatter. An options record with no
/// fields at all is treated exactly like omitted options, see [`effective`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormattingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<YearStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<DayStyle>,
    /// IANA time zone identifier, e.g. `America/New_York`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl FormattingOptions {
    /// An empty options record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The option set used when the caller supplies none:
    /// numeric year, month and day.
    pub fn defaults() -> Self {
        FormattingOptions {
            year: Some(YearStyle::Numeric),
            month: Some(MonthStyle::Numeric),
            day: Some(DayStyle::Numeric),
            time_zone: None,
        }
    }

    /// Set the year style.
    pub fn year(mut self, style: YearStyle) -> Self {
        self.year = Some(style);
        self
    }

    /// Set the month style.
    pub fn month(mut self, style: MonthStyle) -> Self {
        self.month = Some(style);
        self
    }

    /// Set the day style.
    pub fn day(mut self, style: DayStyle) -> Self {
        self.day = Some(style);
        self
    }

    /// Render the date as seen in the IANA time zone `zone`.
    pub fn time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = Some(zone.into());
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none() && self.time_zone.is_none()
    }

    /// Returns true if at least one of year, month or day is set.
    pub fn has_date_fields(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }
}

/// Selects the options a call is rendered with.
///
/// Non-empty options are used as given and replace the defaults entirely.
/// They are never merged field by field, so `{ year: 2-digit }` stays a
/// year-only request. Omitted or empty options yield
/// [`FormattingOptions::defaults`].
pub fn effective(options: Option<&FormattingOptions>) -> Cow<'_, FormattingOptions> {
    match options {
        Some(opts) if !opts.is_empty() => Cow::Borrowed(opts),
        _ => Cow::Owned(FormattingOptions::defaults()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_styles() {
        assert_eq!("2-digit".parse::<YearStyle>(), Ok(YearStyle::TwoDigit));
        assert_eq!("narrow".parse::<MonthStyle>(), Ok(MonthStyle::Narrow));
        assert_eq!("numeric".parse::<DayStyle>(), Ok(DayStyle::Numeric));
    }

    #[test]
    fn test_parse_style_rejects_unknown() {
        let err = "long".parse::<DayStyle>().unwrap_err();
        assert_eq!(
            err,
            FormattingError::InvalidOption {
                field: "day",
                value: "long".to_string()
            }
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(MonthStyle::TwoDigit.to_string(), "2-digit");
        assert_eq!(YearStyle::Numeric.to_string(), "numeric");
    }

    #[test]
    fn test_effective_replaces_rather_than_merges() {
        let opts = FormattingOptions::new().year(YearStyle::TwoDigit);
        let chosen = effective(Some(&opts));
        assert_eq!(chosen.year, Some(YearStyle::TwoDigit));
        assert_eq!(chosen.month, None);
        assert_eq!(chosen.day, None);
    }

    #[test]
    fn test_effective_empty_is_omitted() {
        let empty = FormattingOptions::new();
        assert_eq!(*effective(Some(&empty)), FormattingOptions::defaults());
        assert_eq!(*effective(None), FormattingOptions::defaults());
    }

    #[test]
    fn test_time_zone_only_is_not_empty() {
        let opts = FormattingOptions::new().time_zone("UTC");
        assert!(!opts.is_empty());
        assert!(!opts.has_date_fields());
        assert_eq!(*effective(Some(&opts)), opts);
    }
}
