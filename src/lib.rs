//! sitedate - locale-aware dates and site metadata for a documentation site
//!
//! Dates are rendered with numeric year, month and day unless the caller
//! passes options of their own, in which case only the requested fields are
//! shown. The default locale comes from the site configuration.

pub mod error;
pub mod locale;
pub mod options;
pub mod site;

mod formatter;

use chrono::{DateTime, TimeZone};

pub use error::{ErrorKind, FormattingError, SiteConfigError};
pub use formatter::DateFormatter;
pub use locale::Locale;
pub use options::{DayStyle, FormattingOptions, MonthStyle, YearStyle};
pub use site::{SiteConfig, SocialLink, SocialLinks};

/// Format a date with the built-in site locale as the default.
///
/// See [`DateFormatter::format`] for how `options` and `locale` apply.
pub fn format_date<Tz: TimeZone>(
    date: &DateTime<Tz>,
    options: Option<&FormattingOptions>,
    locale: Option<&str>,
) -> Result<String, FormattingError> {
    DateFormatter::default().format(date, options, locale)
}
