//! Site language configuration.
//!
//! Every language the site is published in has a URL prefix (used by the
//! single-page app routes, e.g. `en/?verb=...`) and a page suffix (used by the
//! static pages, e.g. `about_en.html`). The table is ordered: the order of its
//! entries is the order of `xhtml:link` alternates in every generated sitemap,
//! so regenerating with the same table yields identical bytes.

use crate::error::{Result, SitemapError};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Kk,
    Ru,
}

impl Language {
    /// The `hreflang` tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Kk => "kk",
            Language::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// URL components of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub language: Language,
    /// Path prefix of app routes, either empty or ending with `/`.
    pub prefix: String,
    /// Suffix of static page names.
    pub suffix: String,
}

impl LanguageEntry {
    pub fn new(language: Language, prefix: &str, suffix: &str) -> Self {
        Self {
            language,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

/// Ordered language table with a designated main language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTable {
    main: Language,
    main_index: usize,
    entries: Vec<LanguageEntry>,
}

impl LanguageTable {
    /// Build a table. Each language may appear once and the main language
    /// must have an entry.
    pub fn new(main: Language, entries: Vec<LanguageEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.language) {
                return Err(SitemapError::DuplicateLanguage(entry.language));
            }
        }

        let main_index = entries
            .iter()
            .position(|e| e.language == main)
            .ok_or(SitemapError::MissingMainLanguage(main))?;

        Ok(Self {
            main,
            main_index,
            entries,
        })
    }

    /// The production table with a different main language.
    pub fn with_main(main: Language) -> Self {
        let entries = default_entries();
        // Positions in `default_entries`.
        let main_index = match main {
            Language::En => 0,
            Language::Kk => 1,
            Language::Ru => 2,
        };
        Self {
            main,
            main_index,
            entries,
        }
    }

    pub fn main(&self) -> Language {
        self.main
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Entry of the main language.
    pub fn main_entry(&self) -> &LanguageEntry {
        &self.entries[self.main_index]
    }

    /// Entries of every non-main language, in table order.
    pub fn alternates(&self) -> impl Iterator<Item = &LanguageEntry> + '_ {
        self.entries.iter().filter(move |e| e.language != self.main)
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::with_main(Language::Ru)
    }
}

fn default_entries() -> Vec<LanguageEntry> {
    vec![
        LanguageEntry::new(Language::En, "en/", "en"),
        LanguageEntry::new(Language::Kk, "kk/", "kk"),
        LanguageEntry::new(Language::Ru, "", "ru"),
    ]
}
