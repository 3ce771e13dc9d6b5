//! One generation run: build the primary URL set, write it, stream the
//! dictionary into batches and index the result.

use crate::config::LanguageTable;
use crate::error::{Result, SitemapError};
use crate::inputs;
use crate::sitemap::batcher::{sitemap_file_name, DictionaryBatcher};
use crate::sitemap::builders;
use crate::sitemap::index::{write_index, INDEX_FILE_NAME};
use crate::sitemap::record::UrlRecord;
use crate::sitemap::writer::write_sitemap;
use crate::sitemap::{DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

/// File written when the run has no dictionary stage.
pub const SINGLE_FILE_NAME: &str = "sitemap.xml";

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub host: String,
    pub lastmod: String,
    pub verbs: Option<PathBuf>,
    pub input_directory: Option<PathBuf>,
    pub include_ssr: bool,
    pub dictionary: Option<PathBuf>,
    pub gate_field: String,
    pub batch_size: usize,
    pub output_directory: PathBuf,
    pub languages: LanguageTable,
}

impl GenerateOptions {
    pub fn new(host: &str, lastmod: &str) -> Self {
        Self {
            host: host.to_string(),
            lastmod: lastmod.to_string(),
            verbs: None,
            input_directory: None,
            include_ssr: false,
            dictionary: None,
            gate_field: crate::sitemap::dictionary::DEFAULT_GATE_FIELD.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            output_directory: PathBuf::from("."),
            languages: LanguageTable::default(),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateReport {
    /// Sitemap file names in index order, primary first.
    pub sitemaps: Vec<String>,
    pub index: Option<String>,
    pub primary_urls: usize,
    pub dictionary_urls: usize,
}

/// Validate a host URL and drop any trailing `/`.
pub fn normalize_host(host: &str) -> Result<String> {
    url::Url::parse(host).map_err(|source| SitemapError::InvalidHost {
        host: host.to_string(),
        source,
    })?;
    Ok(host.trim_end_matches('/').to_string())
}

/// Drop records whose `main_url` appeared earlier.
fn dedup_by_main_url(records: Vec<UrlRecord>) -> Vec<UrlRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.main_url.clone()))
        .collect()
}

/// Build the verb, snapshot and static page records.
pub fn primary_urls(opts: &GenerateOptions, host: &str) -> Result<Vec<UrlRecord>> {
    let table = &opts.languages;
    let mut urls = Vec::new();

    match &opts.verbs {
        Some(path) => {
            let verbs = inputs::read_verb_list(path)?;
            info!("read {} verbs from {}", verbs.len(), path.display());
            urls.extend(builders::verb_urls(host, table, &verbs, &opts.lastmod));
        }
        None => info!("no verb list given, skipping verb pages"),
    }

    match &opts.input_directory {
        Some(dir) => {
            let names = inputs::collect_html_names(dir)?;
            info!("found {} scraped pages in {}", names.len(), dir.display());
            urls.extend(builders::scraped_verb_urls(host, table, &names, &opts.lastmod));
            if opts.include_ssr {
                let base = format!("{host}/{}", table.main_entry().prefix);
                urls.extend(builders::ssr_urls(&base, &names, &opts.lastmod));
            }
        }
        None => info!("no input directory given, skipping scraped pages"),
    }

    urls.extend(builders::static_page_urls(host, table, &opts.lastmod));
    Ok(dedup_by_main_url(urls))
}

/// Run the whole generation and write every file into the output directory.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateReport> {
    let host = normalize_host(&opts.host)?;
    if opts.batch_size == 0 || opts.batch_size > MAX_BATCH_SIZE {
        return Err(SitemapError::InvalidBatchSize(opts.batch_size));
    }

    let primary = primary_urls(opts, &host)?;
    let mut report = GenerateReport {
        primary_urls: primary.len(),
        ..Default::default()
    };

    let Some(dictionary) = &opts.dictionary else {
        write_sitemap(&primary, &opts.output_directory.join(SINGLE_FILE_NAME))?;
        report.sitemaps.push(SINGLE_FILE_NAME.to_string());
        return Ok(report);
    };

    let primary_name = sitemap_file_name(0);
    write_sitemap(&primary, &opts.output_directory.join(&primary_name))?;
    report.sitemaps.push(primary_name);

    let mut forms = inputs::open_dictionary(dictionary, &opts.gate_field)?;
    let mut batcher =
        DictionaryBatcher::new(&host, &opts.lastmod, &opts.output_directory, opts.batch_size);
    report.sitemaps.extend(batcher.run(&mut forms, 1)?);
    report.dictionary_urls = batcher.urls_written();

    if report.sitemaps.len() > 1 {
        write_index(
            &host,
            &opts.lastmod,
            &report.sitemaps,
            &opts.output_directory.join(INDEX_FILE_NAME),
        )?;
        report.index = Some(INDEX_FILE_NAME.to_string());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use std::path::Path;

    fn options(out: &Path) -> GenerateOptions {
        let mut opts = GenerateOptions::new("https://example.com/", "2024-03-15");
        opts.output_directory = out.to_path_buf();
        opts
    }

    #[test]
    fn test_single_file_mode() {
        let dir = tempfile::tempdir().unwrap();
        let verbs = dir.path().join("verbs.tsv");
        std::fs::write(&verbs, "жазу\t0\n").unwrap();

        let mut opts = options(dir.path());
        opts.verbs = Some(verbs);
        let report = generate(&opts).unwrap();

        assert_eq!(report.sitemaps, vec![SINGLE_FILE_NAME]);
        assert_eq!(report.index, None);
        assert_eq!(report.primary_urls, 3);

        let xml = std::fs::read_to_string(dir.path().join(SINGLE_FILE_NAME)).unwrap();
        assert!(xml.contains("<loc>https://example.com/?verb=%D0%B6%D0%B0%D0%B7%D1%83</loc>"));
        assert!(xml.contains("<loc>https://example.com/about_ru.html</loc>"));
        assert!(!dir.path().join(INDEX_FILE_NAME).exists());
    }

    #[test]
    fn test_dictionary_of_25000_forms() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("dict.jsonl");
        let mut lines = String::new();
        for i in 0..25_000 {
            writeln!(lines, r#"{{"ru": ["t"], "forms": [{{"form": "form{i}"}}]}}"#).unwrap();
        }
        // repeated forms and untranslated entries add nothing
        writeln!(lines, r#"{{"ru": ["t"], "forms": [{{"form": "form0"}}]}}"#).unwrap();
        writeln!(lines, r#"{{"forms": [{{"form": "untranslated"}}]}}"#).unwrap();
        std::fs::write(&dump, lines).unwrap();

        let mut opts = options(dir.path());
        opts.dictionary = Some(dump);
        let report = generate(&opts).unwrap();

        assert_eq!(
            report.sitemaps,
            vec!["sitemap0.xml", "sitemap1.xml", "sitemap2.xml", "sitemap3.xml"]
        );
        assert_eq!(report.dictionary_urls, 25_000);
        assert_eq!(report.index.as_deref(), Some(INDEX_FILE_NAME));

        let counts: Vec<usize> = ["sitemap1.xml", "sitemap2.xml", "sitemap3.xml"]
            .iter()
            .map(|n| {
                std::fs::read_to_string(dir.path().join(n))
                    .unwrap()
                    .matches("<url>")
                    .count()
            })
            .collect();
        assert_eq!(counts, vec![10_000, 10_000, 5_000]);

        let index = std::fs::read_to_string(dir.path().join(INDEX_FILE_NAME)).unwrap();
        assert_eq!(index.matches("<sitemap>").count(), 4);
        assert!(index.contains("<loc>https://example.com/sitemap0.xml</loc>"));
        assert!(index.contains("<loc>https://example.com/sitemap3.xml</loc>"));
    }

    #[test]
    fn test_empty_dictionary_needs_no_index() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("dict.jsonl");
        std::fs::write(&dump, "").unwrap();

        let mut opts = options(dir.path());
        opts.dictionary = Some(dump);
        let report = generate(&opts).unwrap();

        assert_eq!(report.sitemaps, vec!["sitemap0.xml"]);
        assert_eq!(report.index, None);
    }

    #[test]
    fn test_scraped_pages_dedup_against_verb_list() {
        let dir = tempfile::tempdir().unwrap();
        let scraped = dir.path().join("ssr");
        std::fs::create_dir(&scraped).unwrap();
        std::fs::write(scraped.join("жазу.html"), "").unwrap();
        std::fs::write(scraped.join("бару_керек.html"), "").unwrap();
        let verbs = dir.path().join("verbs.tsv");
        std::fs::write(&verbs, "жазу\t0\n").unwrap();

        let mut opts = options(dir.path());
        opts.verbs = Some(verbs);
        opts.input_directory = Some(scraped);
        opts.include_ssr = true;
        let urls = primary_urls(&opts, "https://example.com").unwrap();

        // жазу once, бару керек, two ssr pages, two static pages
        assert_eq!(urls.len(), 6);
        assert!(urls
            .iter()
            .any(|u| u.main_url == "https://example.com/ssr/%D0%B6%D0%B0%D0%B7%D1%83.html"));
    }

    #[test]
    fn test_invalid_settings() {
        let dir = tempfile::tempdir().unwrap();

        let mut opts = options(dir.path());
        opts.batch_size = 0;
        assert!(matches!(generate(&opts), Err(SitemapError::InvalidBatchSize(0))));

        let mut opts = options(dir.path());
        opts.host = "not a url".to_string();
        assert!(matches!(generate(&opts), Err(SitemapError::InvalidHost { .. })));
    }

    #[test]
    fn test_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir.path().join("missing"));
        assert!(matches!(generate(&opts), Err(SitemapError::Write { .. })));
    }
}
