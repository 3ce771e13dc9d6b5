//! Build-time sitemap generator for the multilingual verb conjugation site.
//!
//! Produces sitemap XML for verb pages, static pages, scraped snapshots and
//! dictionary word forms, with `hreflang` alternates between languages and a
//! sitemap index when the output spans several files.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod inputs;
pub mod sitemap;

pub use config::{Language, LanguageEntry, LanguageTable};
pub use error::{Result, SitemapError};
pub use generate::{generate, GenerateOptions, GenerateReport};
