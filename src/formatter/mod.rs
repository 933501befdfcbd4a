//! Locale-aware date formatting.

mod date;

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, TimeZone};
use log::trace;

use crate::error::FormattingError;
use crate::locale;
use crate::options::{self, FormattingOptions};
use crate::site::{SiteConfig, DEFAULT_LOCALE};

use date::render;

/// Formats dates with a configured default locale.
///
/// The formatter holds no state besides the default locale tag and can be
/// shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    default_locale: String,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl DateFormatter {
    /// Create a formatter that uses `default_locale` when a call names none.
    pub fn new(default_locale: impl Into<String>) -> Self {
        DateFormatter {
            default_locale: default_locale.into(),
        }
    }

    /// Create a formatter using the site's configured locale.
    pub fn from_site(site: &SiteConfig) -> Self {
        Self::new(site.locale.clone())
    }

    /// The locale tag used when a call does not name one.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Format `date` as a string.
    ///
    /// Omitted or empty `options` mean numeric year, month and day. Non-empty
    /// options replace that default set entirely, so only the fields they
    /// name are rendered. `locale` falls back to the formatter's default.
    ///
    /// Without a `time_zone` option the date is rendered in its own offset.
    /// Time zone names match the IANA database without regard to case.
    ///
    /// A year and day requested without a month are joined in locale order
    /// (`5/2024` for `en-US`) rather than labelling the day.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidConfiguration`](crate::ErrorKind)
    /// error for a malformed locale tag or an unknown time zone.
    pub fn format<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        options: Option<&FormattingOptions>,
        locale: Option<&str>,
    ) -> Result<String, FormattingError> {
        let tag = locale.unwrap_or(self.default_locale.as_str());
        let locale = locale::resolve(tag)?;
        let opts = options::effective(options);

        let wall = wall_date(date, opts.time_zone.as_deref())?;

        // A record carrying only a time zone still renders a date.
        let fields = if opts.has_date_fields() {
            opts
        } else {
            Cow::Owned(FormattingOptions::defaults())
        };

        trace!("formatting {} with {:?} for {}", wall, fields, locale.tag);
        Ok(render(wall, &fields, locale))
    }
}

/// The calendar date of `date` as seen in `zone`, or in its own offset.
fn wall_date<Tz: TimeZone>(date: &DateTime<Tz>, zone: Option<&str>) -> Result<NaiveDate, FormattingError> {
    match zone {
        Some(name) => {
            let tz = chrono_tz::Tz::from_str_insensitive(name).map_err(|_| FormattingError::InvalidTimeZone {
                zone: name.to_string(),
            })?;
            Ok(date.with_timezone(&tz).date_naive())
        }
        None => Ok(date.date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_wall_date_own_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let date = tokyo.with_ymd_and_hms(2024, 1, 5, 1, 0, 0).unwrap();
        assert_eq!(wall_date(&date, None).unwrap(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_wall_date_in_zone() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 3, 0, 0).unwrap();
        assert_eq!(
            wall_date(&date, Some("America/Los_Angeles")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
        );
    }

    #[test]
    fn test_wall_date_unknown_zone() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(
            wall_date(&date, Some("Mars/Olympus_Mons")),
            Err(FormattingError::InvalidTimeZone {
                zone: "Mars/Olympus_Mons".to_string()
            })
        );
    }

    #[test]
    fn test_wall_date_zone_ignores_case() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 3, 0, 0).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        assert_eq!(wall_date(&date, Some("america/new_york")).unwrap(), expected);
        assert_eq!(
            wall_date(&date, Some("utc")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_default_uses_site_locale() {
        assert_eq!(DateFormatter::default().default_locale(), "en-US");
    }
}
