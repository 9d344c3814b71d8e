/*! Corpus fractions

For each fraction `f`, `floor(f × number of PDF files)` filenames are drawn without replacement
from the whole folder listing. Drawn files that failed extraction are dropped,
so a subset can be smaller than its nominal size, but its text and filename lists always stay aligned.

Subsets are either drawn independently from each other ([Sampling::Independent]),
or taken as growing prefixes of a single shuffle ([Sampling::Nested]).
!*/
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{extract_all, subset_path, write_json, Extraction};
use crate::cleaning::Cleaner;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Each fraction is drawn on its own, a smaller subset isn't necessarily included in a larger one.
    Independent,
    /// Each subset contains the smaller ones.
    Nested,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub fractions: Vec<f64>,
    pub sampling: Sampling,
}

impl SplitConfig {
    /// Ensure every fraction is within `[0, 1]` and has its own percentage,
    /// since the percentage names the output files.
    pub fn validate(&self) -> Result<(), Error> {
        let mut percents = HashSet::new();
        for &f in &self.fractions {
            if !(0.0..=1.0).contains(&f) {
                return Err(Error::Custom(format!(
                    "invalid fraction {}: must be within [0, 1]",
                    f
                )));
            }
            if !percents.insert(percent(f)) {
                return Err(Error::Custom(format!(
                    "fraction {} collides with another one at {}%",
                    f,
                    percent(f)
                )));
            }
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    /// 20%, 40%, 60%, 80% and 100%, drawn independently.
    fn default() -> Self {
        Self {
            fractions: vec![0.2, 0.4, 0.6, 0.8, 1.0],
            sampling: Sampling::Independent,
        }
    }
}

/// A corpus fraction: texts and their filenames, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    pub percent: u32,
    pub texts: Vec<String>,
    pub filenames: Vec<String>,
}

/// Where a [Subset] has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSummary {
    pub percent: u32,
    pub entries: usize,
    pub text_path: PathBuf,
    pub filename_path: PathBuf,
}

/// Number of files drawn for `fraction` of `total` files.
pub fn subset_size(fraction: f64, total: usize) -> usize {
    ((fraction * total as f64).floor() as usize).min(total)
}

/// `fraction` as a whole percentage, used in output filenames.
pub fn percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

/// Draw a [Subset] per configured fraction.
pub fn draw_subsets<R: Rng + ?Sized>(
    extraction: &Extraction,
    config: &SplitConfig,
    rng: &mut R,
) -> Vec<Subset> {
    let texts: HashMap<&str, &str> = extraction
        .records
        .iter()
        .map(|r| (r.file_name(), r.text()))
        .collect();

    let mut permutation: Vec<&String> = extraction.files.iter().collect();
    if config.sampling == Sampling::Nested {
        permutation.shuffle(rng);
    }

    let total = extraction.files.len();
    config
        .fractions
        .iter()
        .map(|&fraction| {
            let size = subset_size(fraction, total);
            let drawn: Vec<&String> = match config.sampling {
                Sampling::Independent => extraction.files.choose_multiple(&mut *rng, size).collect(),
                Sampling::Nested => permutation[..size].to_vec(),
            };

            let mut subset = Subset {
                percent: percent(fraction),
                texts: Vec::with_capacity(size),
                filenames: Vec::with_capacity(size),
            };
            for file_name in drawn {
                if let Some(text) = texts.get(file_name.as_str()) {
                    subset.texts.push(text.to_string());
                    subset.filenames.push(file_name.clone());
                }
            }
            subset
        })
        .collect()
}

/// Write each subset next to `text_base` and `filename_base`, see [subset_path].
pub fn write_subsets(
    subsets: &[Subset],
    text_base: &Path,
    filename_base: &Path,
) -> Result<Vec<SubsetSummary>, Error> {
    let mut summaries = Vec::with_capacity(subsets.len());
    for subset in subsets {
        let text_path = subset_path(text_base, subset.percent);
        let filename_path = subset_path(filename_base, subset.percent);
        write_json(&subset.texts, &text_path)?;
        write_json(&subset.filenames, &filename_path)?;
        info!(
            "[{}%] wrote {} entries to {:?} and {:?}",
            subset.percent,
            subset.texts.len(),
            text_path,
            filename_path
        );
        summaries.push(SubsetSummary {
            percent: subset.percent,
            entries: subset.texts.len(),
            text_path,
            filename_path,
        });
    }
    Ok(summaries)
}

/// Extract every PDF of `pdf_dir` once, then write a text file and a filename file per fraction.
pub fn build_splits<R: Rng + ?Sized>(
    pdf_dir: &Path,
    text_base: &Path,
    filename_base: &Path,
    config: &SplitConfig,
    cleaner: Option<&Cleaner>,
    rng: &mut R,
) -> Result<Vec<SubsetSummary>, Error> {
    config.validate()?;
    let extraction = extract_all(pdf_dir, cleaner)?;
    let subsets = draw_subsets(&extraction, config, rng);
    write_subsets(&subsets, text_base, filename_base)
}
