//! Listing page addresses and parsing.
use std::path::{Path, PathBuf};

use log::debug;
use reqwest::Url;
use scraper::{Html, Selector};

use super::DateKey;
use crate::error::Error;

const PDF_LINK_SELECTOR: &str = r#"a[title="Download PDF"]"#;

/// `<base>/<category>/<YYMM>`.
///
/// [Url::join] is not used since it would replace the last segment of a base without trailing slash.
pub fn listing_url(base: &Url, category: &str, date: DateKey) -> Result<Url, Error> {
    let url = format!(
        "{}/{}/{}",
        base.as_str().trim_end_matches('/'),
        category,
        date
    );
    Ok(Url::parse(&url)?)
}

/// Get the absolute addresses of every `Download PDF` anchor of a listing page.
///
/// Anchors without `href` are ignored, an `href` that can't be resolved against `site` is an error.
pub fn parse_pdf_links(html: &str, site: &Url) -> Result<Vec<Url>, Error> {
    let selector = Selector::parse(PDF_LINK_SELECTOR)
        .map_err(|e| Error::Html(format!("invalid selector {}: {:?}", PDF_LINK_SELECTOR, e)))?;
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    for anchor in document.select(&selector) {
        match anchor.value().attr("href") {
            Some(href) => links.push(site.join(href.trim())?),
            None => debug!("skipping PDF anchor without href"),
        }
    }
    Ok(links)
}

/// `<dst>/<last path segment of link>_<category>.pdf`.
///
/// Returns [None] for links with no usable last segment.
pub fn local_filename(dst: &Path, link: &Url, category: &str) -> Option<PathBuf> {
    let basename = link.path_segments()?.filter(|s| !s.is_empty()).last()?;
    Some(dst.join(format!("{}_{}.pdf", basename, category)))
}
