//! PDF folder extraction.
use std::path::Path;

use log::{error, info, warn};

use super::{write_json, Record};
use crate::cleaning::Cleaner;
use crate::error::Error;
use crate::pdf;

/// Result of extracting a whole folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Every PDF filename of the folder, sorted.
    pub files: Vec<String>,
    /// Successfully extracted documents, in `files` order.
    pub records: Vec<Record>,
}

impl Extraction {
    /// Text of `file_name`, [None] if it failed extraction or isn't part of the folder.
    pub fn text(&self, file_name: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.file_name() == file_name)
            .map(Record::text)
    }
}

/// Names of the `*.pdf` files of `dir`, sorted.
///
/// Unreadable entries are logged and ignored.
pub fn list_pdfs(dir: &Path) -> Result<Vec<String>, Error> {
    let mut files: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            entry.map_or_else(
                |e| {
                    error!("error reading PDF directory: {}", e);
                    None
                },
                Some,
            )
        })
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".pdf"))
        .collect();
    files.sort();
    Ok(files)
}

/// Extract every PDF of `dir`, skipping (and logging) those that can't be read.
pub fn extract_all(dir: &Path, cleaner: Option<&Cleaner>) -> Result<Extraction, Error> {
    let files = list_pdfs(dir)?;
    let nb_files = files.len();
    info!("processing {} PDF files from {:?}", nb_files, dir);

    let mut records = Vec::with_capacity(nb_files);
    for (idx, file_name) in files.iter().enumerate() {
        info!("processing PDFs {}/{}: {}", idx + 1, nb_files, file_name);
        match pdf::extract_with(&dir.join(file_name), cleaner) {
            Ok(text) => records.push(Record::new(file_name.clone(), text)),
            Err(e) => warn!("could not process {:?}: {:?}. Skipping...", file_name, e),
        }
    }

    info!("extracted {}/{} PDF files", records.len(), nb_files);
    Ok(Extraction { files, records })
}

/// Extract every PDF of `pdf_dir` and write all records to `dst`.
/// Returns the number of written records.
pub fn build_full(pdf_dir: &Path, dst: &Path, cleaner: Option<&Cleaner>) -> Result<usize, Error> {
    let extraction = extract_all(pdf_dir, cleaner)?;
    write_json(&extraction.records, dst)?;
    info!("wrote {} records to {:?}", extraction.records.len(), dst);
    Ok(extraction.records.len())
}
