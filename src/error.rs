//! Error types for formatting and site configuration.

use thiserror::Error;

/// Broad classification of a [`FormattingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The locale, time zone, or an option value was rejected.
    InvalidConfiguration,
}

/// Errors that can occur when formatting a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormattingError {
    #[error("invalid locale identifier: '{tag}'")]
    InvalidLocale { tag: String },

    #[error("invalid time zone: '{zone}'")]
    InvalidTimeZone { zone: String },

    #[error("invalid value for option '{field}': '{value}'")]
    InvalidOption { field: &'static str, value: String },
}

impl FormattingError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormattingError::InvalidLocale { .. }
            | FormattingError::InvalidTimeZone { .. }
            | FormattingError::InvalidOption { .. } => ErrorKind::InvalidConfiguration,
        }
    }
}

/// Errors that can occur when loading the site configuration.
#[derive(Debug, Error)]
pub enum SiteConfigError {
    #[error("failed to read site config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}
