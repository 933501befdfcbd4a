//! Date field rendering and composition

use chrono::{Datelike, NaiveDate};

use crate::locale::{FieldOrder, Locale, TextPatterns};
use crate::options::{DayStyle, FormattingOptions, MonthStyle, YearStyle};

/// Render the requested fields of `date` for `locale`.
///
/// Fields absent from `opts` do not appear in the output.
pub fn render(date: NaiveDate, opts: &FormattingOptions, locale: &Locale) -> String {
    let numeric_month = opts.month == Some(MonthStyle::Numeric);

    // A numeric field widens only when its partner is numeric too; an
    // explicit `2-digit` on one side leaves the other alone.
    let widen_day_month = locale.pad_day_month && numeric_month && opts.day == Some(DayStyle::Numeric);
    let widen_month = match (opts.year, opts.day) {
        (_, Some(_)) => widen_day_month,
        (Some(_), None) => numeric_month && locale.pad_month_with_year,
        (None, None) => false,
    };
    let standalone = opts.year.is_none() && opts.day.is_none();

    let year = opts.year.map(|style| format_year(style, date.year()));
    let month = opts
        .month
        .map(|style| format_month(style, date.month(), widen_month, standalone, locale));
    let day = opts.day.map(|style| format_day(style, date.day(), widen_day_month));

    match opts.month {
        Some(MonthStyle::Long) => {
            compose_text(year.as_deref(), month.as_deref(), day.as_deref(), &locale.long_text)
        }
        Some(MonthStyle::Short | MonthStyle::Narrow) => {
            compose_text(year.as_deref(), month.as_deref(), day.as_deref(), &locale.short_text)
        }
        _ => compose_numeric(year.as_deref(), month.as_deref(), day.as_deref(), locale),
    }
}

fn format_year(style: YearStyle, year: i32) -> String {
    match style {
        YearStyle::Numeric => year.to_string(),
        YearStyle::TwoDigit => format!("{:02}", year.rem_euclid(100)),
    }
}

fn format_month(style: MonthStyle, month: u32, widen: bool, standalone: bool, locale: &Locale) -> String {
    let index = (month - 1) as usize;
    match style {
        MonthStyle::Numeric if widen => format!("{:02}", month),
        MonthStyle::Numeric => month.to_string(),
        MonthStyle::TwoDigit => format!("{:02}", month),
        MonthStyle::Long => locale.month_names_full[index].to_string(),
        MonthStyle::Short if standalone => locale.month_names_short_standalone[index].to_string(),
        MonthStyle::Short => locale.month_names_short[index].to_string(),
        MonthStyle::Narrow => locale.month_names_narrow[index].to_string(),
    }
}

fn format_day(style: DayStyle, day: u32, widen: bool) -> String {
    match style {
        DayStyle::Numeric if widen => format!("{:02}", day),
        DayStyle::Numeric => day.to_string(),
        DayStyle::TwoDigit => format!("{:02}", day),
    }
}

/// Compose output for a month rendered as a name.
fn compose_text(year: Option<&str>, month: Option<&str>, day: Option<&str>, patterns: &TextPatterns) -> String {
    let month = month.unwrap_or_default();
    match (year, day) {
        (Some(y), Some(d)) => fill(patterns.year_month_day, y, month, d),
        (None, Some(d)) => fill(patterns.month_day, "", month, d),
        (Some(y), None) => fill(patterns.year_month, y, month, ""),
        (None, None) => month.to_string(),
    }
}

/// Compose output for numeric (or absent) months.
///
/// A year and day without a month are joined in locale order, e.g. `5/2024`.
fn compose_numeric(year: Option<&str>, month: Option<&str>, day: Option<&str>, locale: &Locale) -> String {
    match (year, month, day) {
        (Some(y), None, None) => return fill(locale.single.year, y, "", ""),
        (None, Some(m), None) => return fill(locale.single.month, "", m, ""),
        (None, None, Some(d)) => return fill(locale.single.day, "", "", d),
        (Some(y), Some(m), None) => return fill(locale.numeric_year_month, y, m, ""),
        _ => {}
    }

    let ordered = match locale.order {
        FieldOrder::MonthDayYear => [month, day, year],
        FieldOrder::DayMonthYear => [day, month, year],
        FieldOrder::YearMonthDay => [year, month, day],
    };
    let mut out = ordered
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(locale.numeric_separator);

    if year.is_none() {
        out.push_str(locale.numeric_suffix);
    }
    out
}

/// Substitute `{y}`, `{m}` and `{d}` in a locale pattern.
fn fill(pattern: &str, year: &str, month: &str, day: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + year.len() + month.len() + day.len());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let (value, skip) = if tail.starts_with("{y}") {
            (year, 3)
        } else if tail.starts_with("{m}") {
            (month, 3)
        } else if tail.starts_with("{d}") {
            (day, 3)
        } else {
            ("{", 1)
        };
        out.push_str(value);
        rest = &tail[skip..];
    }
    out.push_str(rest);
    out
}
