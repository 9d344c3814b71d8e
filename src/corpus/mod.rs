/*! Corpus building

Extracts every PDF of a folder and writes the result as JSON, either:
- as a single array of `{"File Name": ..., "Text": ...}` records ([build_full]),
- or as fractions of the corpus, each made of a text file and an index-aligned filename file ([build_splits]).

Files that fail extraction are logged and left out.
!*/
mod extraction;
mod pipeline;
mod record;
mod split;
mod writer;

pub use extraction::{build_full, extract_all, list_pdfs, Extraction};
pub use pipeline::{FullCorpus, Pipeline, SplitCorpus};
pub use record::Record;
pub use split::{
    build_splits, draw_subsets, percent, subset_size, write_subsets, Sampling, SplitConfig, Subset,
    SubsetSummary,
};
pub use writer::{subset_path, write_json};
