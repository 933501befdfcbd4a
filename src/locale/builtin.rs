//! Built-in locale data.

/// Order of the date fields in numeric and pattern-less output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// `1/5/2024`
    MonthDayYear,
    /// `05/01/2024`
    DayMonthYear,
    /// `2024/1/5`
    YearMonthDay,
}

/// Patterns used when the month is rendered as a name. Locales carry one
/// set for `long` months and one for `short` and `narrow` months.
///
/// `{y}`, `{m}` and `{d}` are replaced with the rendered year, month and day.
#[derive(Debug, Clone, Copy)]
pub struct TextPatterns {
    pub year_month_day: &'static str,
    pub month_day: &'static str,
    pub year_month: &'static str,
}

/// Patterns used when only one field is requested.
#[derive(Debug, Clone, Copy)]
pub struct SinglePatterns {
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
}

/// Locale settings for date formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    pub tag: &'static str,
    pub order: FieldOrder,
    pub numeric_separator: &'static str,
    /// Appended to numeric output that ends in a day or month (`5.1.`).
    pub numeric_suffix: &'static str,
    /// Numeric day and month widen to two digits when both are numeric.
    pub pad_day_month: bool,
    /// Pattern for a numeric month shown with a year and no day.
    pub numeric_year_month: &'static str,
    /// A numeric month shown with a year and no day widens to two digits.
    pub pad_month_with_year: bool,
    pub month_names_full: [&'static str; 12],
    pub month_names_short: [&'static str; 12],
    /// Short names used when the month is the only field.
    pub month_names_short_standalone: [&'static str; 12],
    pub month_names_narrow: [&'static str; 12],
    pub long_text: TextPatterns,
    pub short_text: TextPatterns,
    pub single: SinglePatterns,
}

const PLAIN_SINGLES: SinglePatterns = SinglePatterns {
    year: "{y}",
    month: "{m}",
    day: "{d}",
};

const LATIN_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

const ENGLISH_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const JAPANESE_MONTHS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

const FRENCH_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const SPANISH_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const ENGLISH_US_TEXT: TextPatterns = TextPatterns {
    year_month_day: "{m} {d}, {y}",
    month_day: "{m} {d}",
    year_month: "{m} {y}",
};

const DAY_FIRST_TEXT: TextPatterns = TextPatterns {
    year_month_day: "{d} {m} {y}",
    month_day: "{d} {m}",
    year_month: "{m} {y}",
};

const GERMAN_TEXT: TextPatterns = TextPatterns {
    year_month_day: "{d}. {m} {y}",
    month_day: "{d}. {m}",
    year_month: "{m} {y}",
};

const JAPANESE_TEXT: TextPatterns = TextPatterns {
    year_month_day: "{y}年{m}{d}日",
    month_day: "{m}{d}日",
    year_month: "{y}年{m}",
};

/// Every locale the formatter carries data for. The first entry for a
/// language is that language's primary locale.
pub static LOCALES: [Locale; 6] = [
    Locale {
        tag: "en-US",
        order: FieldOrder::MonthDayYear,
        numeric_separator: "/",
        numeric_suffix: "",
        pad_day_month: false,
        numeric_year_month: "{m}/{y}",
        pad_month_with_year: false,
        month_names_full: ENGLISH_FULL,
        month_names_short: ENGLISH_SHORT,
        month_names_short_standalone: ENGLISH_SHORT,
        month_names_narrow: LATIN_NARROW,
        long_text: ENGLISH_US_TEXT,
        short_text: ENGLISH_US_TEXT,
        single: PLAIN_SINGLES,
    },
    Locale {
        tag: "en-GB",
        order: FieldOrder::DayMonthYear,
        numeric_separator: "/",
        numeric_suffix: "",
        pad_day_month: true,
        numeric_year_month: "{m}/{y}",
        pad_month_with_year: true,
        month_names_full: ENGLISH_FULL,
        month_names_short: ENGLISH_SHORT,
        month_names_short_standalone: ENGLISH_SHORT,
        month_names_narrow: LATIN_NARROW,
        long_text: DAY_FIRST_TEXT,
        short_text: DAY_FIRST_TEXT,
        single: PLAIN_SINGLES,
    },
    Locale {
        tag: "de-DE",
        order: FieldOrder::DayMonthYear,
        numeric_separator: ".",
        numeric_suffix: ".",
        pad_day_month: false,
        numeric_year_month: "{m}/{y}",
        pad_month_with_year: false,
        month_names_full: [
            "Januar",
            "Februar",
            "März",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        month_names_short: [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
            "Dez.",
        ],
        month_names_short_standalone: [
            "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
        ],
        month_names_narrow: LATIN_NARROW,
        long_text: GERMAN_TEXT,
        short_text: GERMAN_TEXT,
        single: PLAIN_SINGLES,
    },
    Locale {
        tag: "fr-FR",
        order: FieldOrder::DayMonthYear,
        numeric_separator: "/",
        numeric_suffix: "",
        pad_day_month: true,
        numeric_year_month: "{m}/{y}",
        pad_month_with_year: true,
        month_names_full: [
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ],
        month_names_short: FRENCH_SHORT,
        month_names_short_standalone: FRENCH_SHORT,
        month_names_narrow: LATIN_NARROW,
        long_text: DAY_FIRST_TEXT,
        short_text: DAY_FIRST_TEXT,
        single: PLAIN_SINGLES,
    },
    Locale {
        tag: "es-ES",
        order: FieldOrder::DayMonthYear,
        numeric_separator: "/",
        numeric_suffix: "",
        pad_day_month: false,
        numeric_year_month: "{m}/{y}",
        pad_month_with_year: false,
        month_names_full: [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ],
        month_names_short: SPANISH_SHORT,
        month_names_short_standalone: SPANISH_SHORT,
        month_names_narrow: ["E", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
        // Only long month names take the `de` connector.
        long_text: TextPatterns {
            year_month_day: "{d} de {m} de {y}",
            month_day: "{d} de {m}",
            year_month: "{m} de {y}",
        },
        short_text: DAY_FIRST_TEXT,
        single: PLAIN_SINGLES,
    },
    Locale {
        tag: "ja-JP",
        order: FieldOrder::YearMonthDay,
        numeric_separator: "/",
        numeric_suffix: "",
        pad_day_month: false,
        numeric_year_month: "{y}/{m}",
        pad_month_with_year: false,
        month_names_full: JAPANESE_MONTHS,
        month_names_short: JAPANESE_MONTHS,
        month_names_short_standalone: JAPANESE_MONTHS,
        month_names_narrow: JAPANESE_MONTHS,
        long_text: JAPANESE_TEXT,
        short_text: JAPANESE_TEXT,
        single: SinglePatterns {
            year: "{y}年",
            month: "{m}月",
            day: "{d}日",
        },
    },
];

impl Locale {
    /// US English locale.
    pub fn en_us() -> &'static Locale {
        &LOCALES[0]
    }

    /// Language subtag of this locale, e.g. `en`.
    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }
}
