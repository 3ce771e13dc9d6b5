//! The URL record written as one `<url>` element.

use crate::config::Language;

/// An equivalent page in another language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub language: Language,
    pub href: String,
}

/// A canonical URL with its lastmod and cross-language alternates.
///
/// Alternates are stored as pairs, so every language has exactly one href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub main_url: String,
    pub lastmod: String,
    pub alternates: Vec<Alternate>,
}

impl UrlRecord {
    /// A record without alternates.
    pub fn new(main_url: impl Into<String>, lastmod: &str) -> Self {
        Self {
            main_url: main_url.into(),
            lastmod: lastmod.to_string(),
            alternates: Vec::new(),
        }
    }

    pub fn with_alternate(mut self, language: Language, href: impl Into<String>) -> Self {
        self.alternates.push(Alternate {
            language,
            href: href.into(),
        });
        self
    }

    /// Language tags of the alternates, in order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.alternates.iter().map(|a| a.language)
    }

    /// Alternate URLs, parallel to [`UrlRecord::languages`].
    pub fn alternate_urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.alternates.iter().map(|a| a.href.as_str())
    }
}
