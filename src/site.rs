//! Site metadata and social links.
//!
//! The built-in record describes the documentation site. A TOML file can
//! override any of its keys; missing keys keep the built-in values.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SiteConfigError;

/// Locale used for dates when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Site-wide metadata consumed by page rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Canonical site URL
    pub href: String,
    pub author: String,
    /// Default locale for formatted dates. Not validated here.
    pub locale: String,
    pub social_links: SocialLinks,
}

/// A labelled outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        SocialLink {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The site's social links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub personal: SocialLink,
    pub email: SocialLink,
    pub github: SocialLink,
    pub linkedin: SocialLink,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: "johnston's docs".to_string(),
            description: "Technical docs by Johnston Liu".to_string(),
            href: "https://johnstonliu.me".to_string(),
            author: "Johnston Liu".to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            social_links: SocialLinks::default(),
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        SocialLinks {
            personal: SocialLink::new("johnstonliu.me", "https://johnstonliu.me"),
            email: SocialLink::new("email", "mailto:johnstonliu2004@gmail.com"),
            github: SocialLink::new("github", "https://github.com/johnstonliu"),
            linkedin: SocialLink::new("linkedin", "https://linkedin.com/in/johnston-liu"),
        }
    }
}

impl SocialLinks {
    /// Iterate over the links in display order, keyed by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SocialLink)> {
        [
            ("personal", &self.personal),
            ("email", &self.email),
            ("github", &self.github),
            ("linkedin", &self.linkedin),
        ]
        .into_iter()
    }
}

impl SiteConfig {
    /// Parse a site config from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, SiteConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a site config from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SiteConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("loaded site config from {} (locale {})", path.display(), config.locale);
        Ok(config)
    }
}
