//! Error type shared by every stage of sitemap generation.

use crate::config::Language;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a generation run.
#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("{path}:{line}: malformed verb row: {reason}")]
    MalformedVerbRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{source_name}:{line}: invalid dictionary entry: {source}")]
    DictionaryLine {
        source_name: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{source_name}:{line}: failed to read line: {source}")]
    ReadLine {
        source_name: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("main language '{0}' has no entry in the language table")]
    MissingMainLanguage(Language),

    #[error("language '{0}' appears more than once in the language table")]
    DuplicateLanguage(Language),

    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("batch size {0} is outside 1..={max}", max = crate::sitemap::MAX_BATCH_SIZE)]
    InvalidBatchSize(usize),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SitemapError>;
