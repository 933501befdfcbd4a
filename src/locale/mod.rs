//! Locale identifiers and negotiation against the built-in locale data.
//!
//! A requested tag such as `en-us`, `de_AT` or `fr-Latn-FR-u-ca-gregory` is
//! parsed into its language and region subtags, then matched against
//! [`LOCALES`]:
//! - an exact language/region match wins
//! - otherwise the primary locale for the language is used
//! - otherwise the formatter falls back to `en-US`
//!
//! Only a malformed tag is an error.

mod builtin;

pub use builtin::{FieldOrder, Locale, SinglePatterns, TextPatterns, LOCALES};

use log::debug;

use crate::error::FormattingError;

/// The language and region parts of a BCP 47 style locale identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// Lowercase language subtag, e.g. `en`
    pub language: String,
    /// Uppercase region subtag, e.g. `US`
    pub region: Option<String>,
}

impl LanguageTag {
    /// Parse a locale identifier. Both `-` and `_` are accepted as separators.
    ///
    /// Script, variant and extension subtags are checked for shape and then
    /// ignored.
    pub fn parse(tag: &str) -> Result<Self, FormattingError> {
        let invalid = || FormattingError::InvalidLocale {
            tag: tag.to_string(),
        };

        let mut subtags = tag.split(['-', '_']);

        let language = subtags.next().ok_or_else(invalid)?;
        // Two or three letters, or a registered five to eight letter subtag.
        if !matches!(language.len(), 2..=3 | 5..=8) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut region = None;
        let mut seen_region_slot = false;
        for subtag in subtags {
            if subtag.is_empty() || subtag.len() > 8 || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            if seen_region_slot {
                continue;
            }
            match subtag.len() {
                // Script, e.g. `Latn`; the region may still follow.
                4 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {}
                2 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
                    region = Some(subtag.to_ascii_uppercase());
                    seen_region_slot = true;
                }
                3 if subtag.chars().all(|c| c.is_ascii_digit()) => {
                    region = Some(subtag.to_string());
                    seen_region_slot = true;
                }
                _ => seen_region_slot = true,
            }
        }

        Ok(LanguageTag {
            language: language.to_ascii_lowercase(),
            region,
        })
    }
}

/// Resolve a locale identifier to the closest built-in locale data.
pub fn resolve(tag: &str) -> Result<&'static Locale, FormattingError> {
    let parsed = LanguageTag::parse(tag)?;

    if let Some(region) = &parsed.region {
        let wanted = format!("{}-{}", parsed.language, region);
        if let Some(locale) = LOCALES.iter().find(|l| l.tag == wanted) {
            return Ok(locale);
        }
    }

    let negotiated = LOCALES
        .iter()
        .find(|l| l.language() == parsed.language)
        .unwrap_or_else(Locale::en_us);

    if !negotiated.tag.eq_ignore_ascii_case(tag) {
        debug!("locale '{}' negotiated to '{}'", tag, negotiated.tag);
    }
    Ok(negotiated)
}
