//! Cleaning pipeline.
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use scraper::Html;

use super::{reencode_cp1252, Resources};
use crate::error::Error;

lazy_static! {
    /// Punctuation split off words before whitespace tokenization.
    static ref PUNCTUATION: Regex = Regex::new(r#"\.\.\.|--|[,;:!?()\[\]{}<>"“”]"#).unwrap();
    /// Clitics detached from the word they end, `don't` giving `do` + `n't`.
    static ref CONTRACTION: Regex = Regex::new(r"(?i)^(.+?)(n't|'s|'m|'d|'ll|'re|'ve)$").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref DIGITS: Regex = Regex::new(r"\d+").unwrap();
}

/// Shortest kept token, in characters.
const MIN_TOKEN_LENGTH: usize = 3;

/// Normalizes extracted text for topic modeling.
///
/// Stages run in this exact order, each working on the output of the previous one:
/// 1. markup stripping
/// 1. tokenization: punctuation split off, then whitespace split and contractions
///    detached (intra-word hyphens and slashes are kept)
/// 1. lowercasing
/// 1. removal of non-word characters, then of empty tokens
/// 1. stopword removal
/// 1. lemmatization
/// 1. digit removal, then removal of tokens shorter than 3 characters
/// 1. removal of tokens absent from the wordlist
/// 1. joining with single spaces and cp1252 round trip
#[derive(Debug, Clone)]
pub struct Cleaner {
    resources: Resources,
}

impl Cleaner {
    pub fn new(resources: Resources) -> Self {
        Self { resources }
    }

    /// Load resources from `dir`, see [Resources::from_dir].
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        Ok(Self::new(Resources::from_dir(dir)?))
    }

    pub fn clean(&self, raw: &str) -> String {
        let text = strip_markup(raw);

        let tokens: Vec<String> = tokenize(&text)
            .into_iter()
            .map(|token| token.to_lowercase())
            .map(|token| NON_WORD.replace_all(&token, "").into_owned())
            .filter(|token| !token.is_empty())
            .filter(|token| !self.resources.stopwords.contains(token))
            .map(|token| self.resources.lemmatizer.lemmatize(&token))
            .map(|token| DIGITS.replace_all(&token, "").into_owned())
            .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
            .filter(|token| self.resources.words.contains(token))
            .collect();

        reencode_cp1252(&tokens.join(" "))
    }
}

/// Splits `text` into words and punctuation tokens.
fn tokenize(text: &str) -> Vec<String> {
    let padded = PUNCTUATION.replace_all(text, " $0 ");
    let mut tokens = Vec::new();
    for word in padded.split_whitespace() {
        match CONTRACTION.captures(word) {
            Some(parts) => {
                let stem = parts.get(1).map_or("", |m| m.as_str());
                let clitic = parts.get(2).map_or("", |m| m.as_str());
                tokens.push(stem.to_string());
                tokens.push(clitic.to_string());
            }
            None => tokens.push(word.to_string()),
        }
    }
    tokens
}

/// Text content of `raw` parsed as an HTML fragment.
fn strip_markup(raw: &str) -> String {
    Html::parse_fragment(raw).root_element().text().collect()
}
