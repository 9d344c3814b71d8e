/*! Text cleaning

Turns raw extracted text into a space-separated list of lemmatized dictionary words.
Language resources (stopwords, wordlist, lemma index and exceptions) are loaded from plain text files,
see [Resources].
!*/
mod cleaner;
mod codepage;
mod lemmatizer;
mod resources;

pub use cleaner::Cleaner;
pub use codepage::reencode_cp1252;
pub use lemmatizer::Lemmatizer;
pub use resources::Resources;
