//! Readers for the generator's input files.

use crate::error::{Result, SitemapError};
use crate::sitemap::builders::VerbEntry;
use crate::sitemap::dictionary::WordForms;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a tab-separated verb list: `verb<TAB>0|1` per line.
pub fn read_verb_list(path: &Path) -> Result<Vec<VerbEntry>> {
    let file = File::open(path).map_err(|source| SitemapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_verb_list(BufReader::new(file), path)
}

/// Parse verb list lines. Blank lines are skipped; any other malformed line
/// aborts with its line number.
pub fn parse_verb_list<R: BufRead>(reader: R, path: &Path) -> Result<Vec<VerbEntry>> {
    let mut verbs = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SitemapError::ReadLine {
            source_name: path.display().to_string(),
            line: i + 1,
            source,
        })?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let malformed = |reason: String| SitemapError::MalformedVerbRow {
            path: path.to_path_buf(),
            line: i + 1,
            reason,
        };

        let parts: Vec<&str> = line.split('\t').collect();
        let [verb, flag] = parts.as_slice() else {
            return Err(malformed(format!("expected 2 columns, got {}", parts.len())));
        };
        if verb.is_empty() {
            return Err(malformed("empty verb".to_string()));
        }
        let fe = match *flag {
            "0" => false,
            "1" => true,
            other => return Err(malformed(format!("flag must be 0 or 1, got '{other}'"))),
        };

        verbs.push(VerbEntry::new(verb, fe));
    }

    Ok(verbs)
}

/// Names of regular `.html` files in `dir`, sorted.
pub fn collect_html_names(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|source| SitemapError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".html") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Open a JSON-lines dictionary dump for streaming.
pub fn open_dictionary(path: &Path, gate_field: &str) -> Result<WordForms<BufReader<File>>> {
    let file = File::open(path).map_err(|source| SitemapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WordForms::new(
        BufReader::new(file),
        &path.display().to_string(),
        gate_field,
    ))
}
