//! PDF text extraction.
//!
//! Uses [`pdf_extract`] to pull the text of every page. `pdf_extract` can panic
//! on malformed input, so calls are wrapped in [`std::panic::catch_unwind`]
//! and turned into [`Error::CorruptPdf`].
//!
//! Extracted text is wrapped between [HEAD_SENTINEL] and [TAIL_SENTINEL]:
//! the topic modeling toolkit consuming the corpus drops the first and last token of each entry.
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::cleaning::Cleaner;
use crate::error::Error;

pub const HEAD_SENTINEL: &str = "First ";
pub const TAIL_SENTINEL: &str = "End";

/// Extract the text of each page, in order.
fn extract_pages(data: &[u8]) -> Result<Vec<String>, String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(format!("PDF extraction failed: {}", e)),
        Err(_) => Err("PDF extraction panicked (malformed document)".to_string()),
    }
}

/// Concatenate pages without separator and wrap them between sentinels.
pub fn assemble(pages: &[String]) -> String {
    wrap(&pages.concat())
}

fn wrap(body: &str) -> String {
    let mut text = String::with_capacity(HEAD_SENTINEL.len() + body.len() + TAIL_SENTINEL.len());
    text.push_str(HEAD_SENTINEL);
    text.push_str(body);
    text.push_str(TAIL_SENTINEL);
    text
}

/// Extract the raw text of the PDF at `path`.
///
/// # Errors
/// [Error::Io] if the file can't be read, [Error::CorruptPdf] if it can't be parsed.
pub fn extract(path: &Path) -> Result<String, Error> {
    extract_with(path, None)
}

/// Extract the text of the PDF at `path`, cleaning it with `cleaner` if provided.
///
/// Cleaning happens before sentinel wrapping, and a non-empty cleaned body is followed by a space
/// so that its last token stays apart from [TAIL_SENTINEL].
pub fn extract_with(path: &Path, cleaner: Option<&Cleaner>) -> Result<String, Error> {
    let data = std::fs::read(path)?;
    let pages = extract_pages(&data).map_err(|reason| Error::CorruptPdf {
        path: path.to_path_buf(),
        reason,
    })?;

    match cleaner {
        None => Ok(assemble(&pages)),
        Some(cleaner) => {
            let mut body = cleaner.clean(&pages.concat());
            if !body.is_empty() {
                body.push(' ');
            }
            Ok(wrap(&body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages() {
        assert_eq!(assemble(&[]), "First End");
    }

    #[test]
    fn pages_concatenated() {
        let pages = vec!["Intro\n".to_string(), String::new(), "Conclusion\n".to_string()];
        assert_eq!(assemble(&pages), "First Intro\nConclusion\nEnd");
    }

    #[test]
    fn sentinels_appear_once() {
        let pages = vec!["First End First End".to_string()];
        let text = assemble(&pages);
        assert!(text.starts_with(HEAD_SENTINEL));
        assert!(text.ends_with(TAIL_SENTINEL));
        assert_eq!(&text[HEAD_SENTINEL.len()..text.len() - TAIL_SENTINEL.len()], pages[0]);
    }

    #[test]
    fn malformed_data_returns_error() {
        assert!(extract_pages(b"not a pdf at all").is_err());
    }

    #[test]
    fn corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4\nthis is not a pdf body").unwrap();

        match extract(&path) {
            Err(Error::CorruptPdf { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected a corrupt pdf error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            extract(&dir.path().join("absent.pdf")),
            Err(Error::Io(_))
        ));
    }
}
