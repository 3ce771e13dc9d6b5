//! Dictionary word-form pages, read from a JSON-lines dump.
//!
//! Each line is one dictionary entry:
//!
//! ```json
//! {"ru": ["писать"], "forms": [{"form": "жазу"}, {"form": "жазамын"}]}
//! ```
//!
//! Entries whose gate field (translation availability) is missing or empty
//! are skipped, as are entries without a usable `forms` array. The dump can
//! be arbitrarily large, so it is consumed through a cursor one batch at a
//! time.

use crate::error::{Result, SitemapError};
use crate::sitemap::escape;
use crate::sitemap::record::UrlRecord;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashSet, VecDeque};
use std::io::BufRead;
use tracing::debug;

/// Default name of the field that marks an entry as translated.
pub const DEFAULT_GATE_FIELD: &str = "ru";

#[derive(Debug, Deserialize)]
struct FormEntry {
    form: String,
}

/// Word forms already given a URL during one run.
#[derive(Debug, Default)]
pub struct SeenForms {
    forms: HashSet<String>,
}

impl SeenForms {
    /// Mark a form as seen. Returns `false` if it was seen before.
    pub fn insert(&mut self, form: &str) -> bool {
        if self.forms.contains(form) {
            return false;
        }
        self.forms.insert(form.to_string())
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Cursor over the word forms of gated dictionary entries, in file order.
pub struct WordForms<R> {
    lines: std::io::Lines<R>,
    source_name: String,
    gate_field: String,
    line_no: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> WordForms<R> {
    pub fn new(reader: R, source_name: &str, gate_field: &str) -> Self {
        Self {
            lines: reader.lines(),
            source_name: source_name.to_string(),
            gate_field: gate_field.to_string(),
            line_no: 0,
            pending: VecDeque::new(),
        }
    }

    /// Parse one line, queueing its forms if the entry passes the gate.
    fn accept_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let entry: Value =
            serde_json::from_str(line).map_err(|source| SitemapError::DictionaryLine {
                source_name: self.source_name.clone(),
                line: self.line_no,
                source,
            })?;

        if !entry.get(&self.gate_field).is_some_and(is_filled) {
            debug!(line = self.line_no, "skipping entry without {}", self.gate_field);
            return Ok(());
        }

        let Some(forms) = entry.get("forms").cloned() else {
            debug!(line = self.line_no, "skipping entry without forms");
            return Ok(());
        };

        match serde_json::from_value::<Vec<FormEntry>>(forms) {
            Ok(forms) => {
                self.pending.extend(
                    forms
                        .into_iter()
                        .map(|f| f.form)
                        .filter(|form| !form.is_empty()),
                );
            }
            Err(e) => {
                debug!(line = self.line_no, "skipping entry with malformed forms: {e}");
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for WordForms<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(form) = self.pending.pop_front() {
                return Some(Ok(form));
            }

            let next = self.lines.next()?;
            self.line_no += 1;
            let line = match next {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(SitemapError::ReadLine {
                        source_name: self.source_name.clone(),
                        line: self.line_no,
                        source,
                    }))
                }
            };

            if let Err(e) = self.accept_line(&line) {
                return Some(Err(e));
            }
        }
    }
}

/// A gate value counts as present unless it is null, false or empty.
fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// URL of the dictionary page for one word form.
pub fn dictionary_url(host: &str, form: &str) -> String {
    format!("{host}/dict_ru.html?w={}", escape::query_value(form))
}

/// Pull up to `limit` records for forms not seen earlier in the run.
///
/// An empty result means the cursor is exhausted.
pub fn next_dictionary_batch<R: BufRead>(
    forms: &mut WordForms<R>,
    seen: &mut SeenForms,
    host: &str,
    lastmod: &str,
    limit: usize,
) -> Result<Vec<UrlRecord>> {
    let mut batch = Vec::new();
    while batch.len() < limit {
        let Some(form) = forms.next() else {
            break;
        };
        let form = form?;
        if !seen.insert(&form) {
            continue;
        }
        batch.push(UrlRecord::new(dictionary_url(host, &form), lastmod));
    }
    Ok(batch)
}
