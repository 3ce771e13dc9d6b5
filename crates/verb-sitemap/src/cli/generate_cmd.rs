//! `verb-sitemap`: generate the site's sitemaps.

use crate::cli::output::{self, Styled};
use crate::config::{Language, LanguageTable};
use crate::generate::{generate, GenerateOptions, GenerateReport};
use crate::sitemap::dictionary::DEFAULT_GATE_FIELD;
use crate::sitemap::DEFAULT_BATCH_SIZE;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Inputs and settings of a generation run.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Site root, e.g. https://kazakhverb.khairulin.com
    #[arg(long, env = "VERB_SITEMAP_HOST")]
    pub host: String,

    /// Tab-separated verb list (`verb<TAB>0|1`)
    #[arg(long)]
    pub verbs: Option<PathBuf>,

    /// Directory with scraped HTML snapshots
    #[arg(long, short = 'i')]
    pub input_directory: Option<PathBuf>,

    /// Also list pre-rendered `/ssr/` pages for the snapshots
    #[arg(long)]
    pub include_ssr: bool,

    /// JSON-lines dictionary dump with word forms
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Dictionary field that marks an entry as translated
    #[arg(long, default_value = DEFAULT_GATE_FIELD)]
    pub dictionary_gate_field: String,

    /// Date used as every URL's lastmod, e.g. 2024-01-14 (default: today)
    #[arg(long, env = "VERB_SITEMAP_LASTMOD")]
    pub lastmod: Option<String>,

    /// Language of the canonical URLs
    #[arg(long, value_enum, default_value_t = Language::Ru)]
    pub main_language: Language,

    /// Maximum URLs per dictionary sitemap
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Existing directory to write sitemaps into
    #[arg(long, short = 'o', env = "VERB_SITEMAP_OUTPUT", default_value = ".")]
    pub output_directory: PathBuf,
}

impl GenerateArgs {
    pub fn into_options(self) -> GenerateOptions {
        let lastmod = self
            .lastmod
            .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

        let mut opts = GenerateOptions::new(&self.host, &lastmod);
        opts.verbs = self.verbs;
        opts.input_directory = self.input_directory;
        opts.include_ssr = self.include_ssr;
        opts.dictionary = self.dictionary;
        opts.gate_field = self.dictionary_gate_field;
        opts.batch_size = self.batch_size;
        opts.output_directory = self.output_directory;
        opts.languages = LanguageTable::with_main(self.main_language);
        opts
    }
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let start = Instant::now();
    let opts = args.into_options();

    let report = generate(&opts).with_context(|| {
        format!(
            "sitemap generation into {} failed",
            opts.output_directory.display()
        )
    })?;

    if output::is_json() {
        print_report_json(&opts, &report, start.elapsed());
    } else if !output::is_quiet() {
        print_report(&opts, &report, start.elapsed());
    }

    Ok(())
}

fn print_report(opts: &GenerateOptions, report: &GenerateReport, elapsed: Duration) {
    let s = Styled::new();
    output::print_header(&s);

    for name in &report.sitemaps {
        output::print_check(s.ok_sym(), name, &opts.output_directory.join(name).display().to_string());
    }
    if let Some(index) = &report.index {
        output::print_check(s.ok_sym(), index, &s.dim("index"));
    }

    eprintln!();
    eprintln!(
        "  {} primary urls, {} dictionary urls in {:.1}s",
        s.green(&report.primary_urls.to_string()),
        s.green(&report.dictionary_urls.to_string()),
        elapsed.as_secs_f64()
    );
}

fn print_report_json(opts: &GenerateOptions, report: &GenerateReport, elapsed: Duration) {
    output::print_json(&serde_json::json!({
        "host": opts.host,
        "lastmod": opts.lastmod,
        "main_language": opts.languages.main(),
        "output_directory": opts.output_directory,
        "sitemaps": report.sitemaps,
        "index": report.index,
        "primary_urls": report.primary_urls,
        "dictionary_urls": report.dictionary_urls,
        "duration_ms": elapsed.as_millis() as u64,
    }));
}
