//! Split the dictionary stream into numbered sitemap files.

use crate::error::Result;
use crate::sitemap::dictionary::{next_dictionary_batch, SeenForms, WordForms};
use crate::sitemap::writer::write_sitemap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the `n`-th sitemap.
pub fn sitemap_file_name(n: usize) -> String {
    format!("sitemap{n}.xml")
}

/// Writes one sitemap per batch of dictionary URLs.
///
/// The batcher owns the seen-form set, so a form gets at most one URL across
/// all batches of the run.
pub struct DictionaryBatcher<'a> {
    host: &'a str,
    lastmod: &'a str,
    output_dir: PathBuf,
    batch_size: usize,
    seen: SeenForms,
    urls_written: usize,
}

impl<'a> DictionaryBatcher<'a> {
    pub fn new(host: &'a str, lastmod: &'a str, output_dir: &Path, batch_size: usize) -> Self {
        Self {
            host,
            lastmod,
            output_dir: output_dir.to_path_buf(),
            batch_size,
            seen: SeenForms::default(),
            urls_written: 0,
        }
    }

    /// Drain `forms`, writing `sitemap{first}.xml`, `sitemap{first+1}.xml`, ...
    ///
    /// Each batch is on disk before the next one is read. Returns the written
    /// file names in order.
    pub fn run<R: BufRead>(&mut self, forms: &mut WordForms<R>, first: usize) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut number = first;

        loop {
            let batch = next_dictionary_batch(
                forms,
                &mut self.seen,
                self.host,
                self.lastmod,
                self.batch_size,
            )?;
            if batch.is_empty() {
                break;
            }

            let name = sitemap_file_name(number);
            write_sitemap(&batch, &self.output_dir.join(&name))?;
            self.urls_written += batch.len();
            names.push(name);
            number += 1;
        }

        info!(
            "dictionary produced {} sitemaps with {} urls",
            names.len(),
            self.urls_written
        );
        Ok(names)
    }

    /// Number of dictionary URLs written so far.
    pub fn urls_written(&self) -> usize {
        self.urls_written
    }
}
