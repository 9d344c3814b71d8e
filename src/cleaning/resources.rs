//! Language resources.
//!
//! A resource directory holds four UTF-8 files, one entry per line
//! (blank lines and lines starting with `#` are ignored):
//!
//! - `stopwords.txt`: English stopwords
//! - `words.txt`: English wordlist, case preserved
//! - `lemmas.txt`: noun lemma index
//! - `noun.exc`: irregular noun forms, `<form> <base> [<base>...]` per line
use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::info;

use super::Lemmatizer;
use crate::error::Error;

pub const STOPWORDS_FILE: &str = "stopwords.txt";
pub const WORDS_FILE: &str = "words.txt";
pub const LEMMAS_FILE: &str = "lemmas.txt";
pub const EXCEPTIONS_FILE: &str = "noun.exc";

#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub stopwords: HashSet<String>,
    pub words: HashSet<String>,
    pub lemmatizer: Lemmatizer,
}

impl Resources {
    /// Load resources from `dir`.
    ///
    /// # Errors
    /// [Error::Resource] if one of the files is missing or unreadable.
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        let stopwords: HashSet<String> = read_entries(&dir.join(STOPWORDS_FILE))?.collect();
        let words: HashSet<String> = read_entries(&dir.join(WORDS_FILE))?.collect();
        let lemmas: HashSet<String> = read_entries(&dir.join(LEMMAS_FILE))?.collect();
        let exceptions = parse_exceptions(read_entries(&dir.join(EXCEPTIONS_FILE))?);

        info!(
            "loaded resources from {:?}: {} stopwords, {} words, {} lemmas, {} exceptions",
            dir,
            stopwords.len(),
            words.len(),
            lemmas.len(),
            exceptions.len()
        );

        Ok(Self {
            stopwords,
            words,
            lemmatizer: Lemmatizer::new(lemmas, exceptions),
        })
    }

    /// Build resources from in-memory lists.
    /// `exceptions` are `(form, base)` pairs.
    pub fn from_parts(
        stopwords: &[&str],
        words: &[&str],
        lemmas: &[&str],
        exceptions: &[(&str, &str)],
    ) -> Self {
        let mut exception_map: HashMap<String, Vec<String>> = HashMap::new();
        for (form, base) in exceptions {
            exception_map
                .entry(form.to_string())
                .or_insert_with(Vec::new)
                .push(base.to_string());
        }
        Self {
            stopwords: stopwords.iter().map(|s| s.to_string()).collect(),
            words: words.iter().map(|s| s.to_string()).collect(),
            lemmatizer: Lemmatizer::new(lemmas.iter().map(|s| s.to_string()).collect(), exception_map),
        }
    }
}

/// Non-empty, non-comment trimmed lines of a file.
fn read_entries(path: &Path) -> Result<impl Iterator<Item = String>, Error> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();
    Ok(entries.into_iter())
}

fn parse_exceptions(lines: impl Iterator<Item = String>) -> HashMap<String, Vec<String>> {
    let mut exceptions = HashMap::new();
    for line in lines {
        let mut fields = line.split_whitespace();
        if let Some(form) = fields.next() {
            let bases: Vec<String> = fields.map(String::from).collect();
            if !bases.is_empty() {
                exceptions.insert(form.to_string(), bases);
            }
        }
    }
    exceptions
}
