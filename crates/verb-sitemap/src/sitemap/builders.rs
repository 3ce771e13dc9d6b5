//! Turn verbs, static pages and scraped snapshots into URL records.

use crate::config::{LanguageEntry, LanguageTable};
use crate::sitemap::escape;
use crate::sitemap::record::UrlRecord;

/// Static pages published once per language.
pub const STATIC_PAGES: &[&str] = &["about", "timeline"];

/// A verb from the verb list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbEntry {
    pub text: String,
    /// Verb carries the exceptional marker and needs `&exception=true`.
    pub fe: bool,
}

impl VerbEntry {
    pub fn new(text: &str, fe: bool) -> Self {
        Self {
            text: text.to_string(),
            fe,
        }
    }
}

fn verb_url(host: &str, entry: &LanguageEntry, query: &str) -> String {
    format!("{host}/{}?verb={query}", entry.prefix)
}

fn verb_record(host: &str, table: &LanguageTable, query: &str, lastmod: &str) -> UrlRecord {
    let mut record = UrlRecord::new(verb_url(host, table.main_entry(), query), lastmod);
    for entry in table.alternates() {
        record = record.with_alternate(entry.language, verb_url(host, entry, query));
    }
    record
}

/// One record per verb, with an alternate for every non-main language.
pub fn verb_urls(
    host: &str,
    table: &LanguageTable,
    verbs: &[VerbEntry],
    lastmod: &str,
) -> Vec<UrlRecord> {
    verbs
        .iter()
        .map(|verb| {
            let mut query = escape::query_value(&verb.text);
            if verb.fe {
                query.push_str("&exception=true");
            }
            verb_record(host, table, &query, lastmod)
        })
        .collect()
}

/// Records for the static pages, e.g. `about_ru.html` with `about_en.html`
/// and `about_kk.html` as alternates.
pub fn static_page_urls(host: &str, table: &LanguageTable, lastmod: &str) -> Vec<UrlRecord> {
    let page_url = |page: &str, entry: &LanguageEntry| format!("{host}/{page}_{}.html", entry.suffix);

    STATIC_PAGES
        .iter()
        .map(|page| {
            let mut record = UrlRecord::new(page_url(page, table.main_entry()), lastmod);
            for entry in table.alternates() {
                record = record.with_alternate(entry.language, page_url(page, entry));
            }
            record
        })
        .collect()
}

/// Pre-rendered snapshot URLs: `{base}/ssr/{file}`.
pub fn ssr_urls(base: &str, html_names: &[String], lastmod: &str) -> Vec<UrlRecord> {
    let base = base.trim_end_matches('/');
    html_names
        .iter()
        .map(|name| UrlRecord::new(format!("{base}/ssr/{}", escape::path_segment(name)), lastmod))
        .collect()
}

/// Recover the verb from a snapshot file name: `бару_керек.html` -> `бару керек`.
pub fn verb_from_file_name(name: &str) -> Option<String> {
    name.strip_suffix(".html").map(|stem| stem.replace('_', " "))
}

/// App URLs for verbs known only from snapshot file names.
pub fn scraped_verb_urls(
    host: &str,
    table: &LanguageTable,
    html_names: &[String],
    lastmod: &str,
) -> Vec<UrlRecord> {
    html_names
        .iter()
        .filter_map(|name| verb_from_file_name(name))
        .map(|verb| verb_record(host, table, &escape::query_value(&verb), lastmod))
        .collect()
}
