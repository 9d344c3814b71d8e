//! Category crawler.
use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use log::{debug, error, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::Url;

use super::{listing_url, local_filename, parse_pdf_links, DateKey, RetryPolicy, Transport};
use crate::error::Error;

const LISTING_BASE: &str = "https://export.arxiv.org/list";
const SITE: &str = "https://export.arxiv.org";

/// Crawl parameters.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Download destination, created if missing.
    pub dst: PathBuf,
    /// Maximum number of PDFs sampled from a listing page.
    pub per_category: usize,
    /// Listing page years (inclusive).
    pub years: RangeInclusive<u16>,
    pub retry: RetryPolicy,
    /// Listing pages live at `<listing_base>/<category>/<YYMM>`.
    pub listing_base: Url,
    /// PDF links are resolved against this address.
    pub site: Url,
}

impl FetchConfig {
    /// Default arXiv parameters: 10 PDFs per category, years 2016 to 2022.
    pub fn new(dst: PathBuf) -> Result<Self, Error> {
        Ok(Self {
            dst,
            per_category: 10,
            years: 2016..=2022,
            retry: RetryPolicy::default(),
            listing_base: Url::parse(LISTING_BASE)?,
            site: Url::parse(SITE)?,
        })
    }
}

/// What happened to a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// A listing page was fetched and its sampled links processed.
    Completed {
        /// Date of the successful listing page.
        date: DateKey,
        attempts: usize,
        /// Files written during this run, over all attempts.
        downloaded: Vec<PathBuf>,
        /// Sampled links whose file already existed on disk.
        skipped: usize,
    },
    /// The retry policy ran out before any listing attempt succeeded.
    Exhausted { attempts: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: String,
    pub outcome: CategoryOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub categories: Vec<CategoryReport>,
}

impl FetchReport {
    /// Total number of files written.
    pub fn downloaded(&self) -> usize {
        self.categories
            .iter()
            .map(|c| match &c.outcome {
                CategoryOutcome::Completed { downloaded, .. } => downloaded.len(),
                CategoryOutcome::Exhausted { .. } => 0,
            })
            .sum()
    }

    /// Categories that never got a listing page.
    pub fn exhausted(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().filter_map(|c| match c.outcome {
            CategoryOutcome::Exhausted { .. } => Some(c.category.as_str()),
            CategoryOutcome::Completed { .. } => None,
        })
    }
}

/// Per-category state, kept across attempts.
#[derive(Default)]
struct CategoryState {
    /// Files obtained during this run.
    seen: HashSet<PathBuf>,
    downloaded: Vec<PathBuf>,
    skipped: usize,
}

/// Crawls listing pages and saves sampled PDFs.
pub struct Fetcher<T, R> {
    transport: T,
    rng: R,
    config: FetchConfig,
}

impl<T: Transport, R: Rng> Fetcher<T, R> {
    pub fn new(transport: T, rng: R, config: FetchConfig) -> Self {
        Self {
            transport,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Crawl each category in order.
    ///
    /// # Errors
    /// Filesystem errors and an empty year range are returned. Listing failures
    /// are retried and reported as [CategoryOutcome::Exhausted] when the policy runs out.
    pub fn fetch(&mut self, categories: &[String]) -> Result<FetchReport, Error> {
        if self.config.years.is_empty() {
            return Err(Error::Custom(format!(
                "invalid year range: {} > {}",
                self.config.years.start(),
                self.config.years.end()
            )));
        }
        std::fs::create_dir_all(&self.config.dst)?;

        let mut report = FetchReport::default();
        for (idx, category) in categories.iter().enumerate() {
            info!("[{}] category {}/{}", category, idx + 1, categories.len());
            let outcome = self.fetch_category(category)?;
            match &outcome {
                CategoryOutcome::Completed {
                    date,
                    attempts,
                    downloaded,
                    skipped,
                } => info!(
                    "[{}] done with {} after {} attempt(s): {} downloaded, {} already present",
                    category,
                    date,
                    attempts,
                    downloaded.len(),
                    skipped
                ),
                CategoryOutcome::Exhausted { attempts } => error!(
                    "[{}] giving up after {} failed attempt(s)",
                    category, attempts
                ),
            }
            report.categories.push(CategoryReport {
                category: category.clone(),
                outcome,
            });
        }

        Ok(report)
    }

    fn fetch_category(&mut self, category: &str) -> Result<CategoryOutcome, Error> {
        let mut state = CategoryState::default();
        let mut attempts = 0;

        while self.config.retry.allows(attempts) {
            attempts += 1;
            let date = DateKey::random(&mut self.rng, &self.config.years);
            let url = listing_url(&self.config.listing_base, category, date)?;
            info!("[{}] {}", category, url);

            match self.attempt(category, &url, &mut state) {
                Ok(()) => {
                    return Ok(CategoryOutcome::Completed {
                        date,
                        attempts,
                        downloaded: state.downloaded,
                        skipped: state.skipped,
                    })
                }
                Err(e) if e.is_recoverable() => {
                    warn!(
                        "[{}] error while trying {}: {:?}. Trying again with a new date.",
                        category, url, e
                    );
                    if self.config.retry.allows(attempts) {
                        std::thread::sleep(self.config.retry.backoff());
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Ok(CategoryOutcome::Exhausted { attempts })
    }

    /// Fetch one listing page, then download a sample of its links.
    fn attempt(&mut self, category: &str, url: &Url, state: &mut CategoryState) -> Result<(), Error> {
        let body = self.transport.get(url)?;
        let html = String::from_utf8_lossy(&body);
        let links = parse_pdf_links(&html, &self.config.site)?;
        debug!("[{}] PDF links: {:#?}", category, links);

        let candidates: Vec<(Url, PathBuf)> = links
            .into_iter()
            .filter_map(|link| {
                local_filename(&self.config.dst, &link, category).map(|path| (link, path))
            })
            .filter(|(_, path)| !state.seen.contains(path))
            .collect();

        let sample: Vec<&(Url, PathBuf)> = candidates
            .choose_multiple(&mut self.rng, self.config.per_category)
            .collect();
        debug!(
            "[{}] sampled {}/{} links",
            category,
            sample.len(),
            candidates.len()
        );

        for (link, path) in sample {
            if path.exists() {
                info!("File {:?} already exists. Skipping download.", path);
                state.skipped += 1;
                continue;
            }
            let pdf = self.transport.get(link)?;
            std::fs::write(path, pdf)?;
            state.seen.insert(path.clone());
            state.downloaded.push(path.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Serves a listing page with `n` links for any listing URL, and PDFs for any other one.
    struct Listing {
        n: usize,
        requests: RefCell<Vec<String>>,
    }

    impl Transport for Listing {
        fn get(&self, url: &Url) -> Result<Vec<u8>, Error> {
            self.requests.borrow_mut().push(url.to_string());
            if url.path().starts_with("/list/") {
                let anchors: String = (0..self.n)
                    .map(|i| format!(r#"<a href="/pdf/2001.{:05}" title="Download PDF">pdf</a>"#, i))
                    .collect();
                Ok(format!("<html><body>{}</body></html>", anchors).into_bytes())
            } else {
                Ok(b"%PDF-1.4".to_vec())
            }
        }
    }

    fn config(dst: PathBuf) -> FetchConfig {
        let mut config = FetchConfig::new(dst).unwrap();
        config.retry = RetryPolicy::new(Some(5), Duration::ZERO);
        config
    }

    #[test]
    fn sample_is_capped() {
        let dst = tempfile::tempdir().unwrap();
        let transport = Listing {
            n: 30,
            requests: RefCell::new(Vec::new()),
        };
        let mut fetcher = Fetcher::new(
            &transport,
            StdRng::seed_from_u64(7),
            config(dst.path().to_path_buf()),
        );
        let report = fetcher.fetch(&["cs.LG".to_string()]).unwrap();
        assert_eq!(report.downloaded(), 10);
        assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 10);
        // one listing page, ten PDFs
        assert_eq!(transport.requests.borrow().len(), 11);
    }

    /// Serves a listing page that isn't valid UTF-8.
    struct Latin1Listing;

    impl Transport for Latin1Listing {
        fn get(&self, url: &Url) -> Result<Vec<u8>, Error> {
            if url.path().starts_with("/list/") {
                let mut page = b"<html><body><p>Caf\xe9</p>".to_vec();
                page.extend_from_slice(br#"<a href="/pdf/1712.00001" title="Download PDF">pdf</a>"#);
                page.extend_from_slice(b"</body></html>");
                Ok(page)
            } else {
                Ok(b"%PDF-1.4".to_vec())
            }
        }
    }

    #[test]
    fn invalid_utf8_listing_still_parsed() {
        let dst = tempfile::tempdir().unwrap();
        let mut fetcher = Fetcher::new(
            Latin1Listing,
            StdRng::seed_from_u64(3),
            config(dst.path().to_path_buf()),
        );
        let report = fetcher.fetch(&["cs.CY".to_string()]).unwrap();
        assert!(matches!(
            report.categories[0].outcome,
            CategoryOutcome::Completed { attempts: 1, .. }
        ));
        assert!(dst.path().join("1712.00001_cs.CY.pdf").exists());
    }

    #[test]
    fn report_counts() {
        let report = FetchReport {
            categories: vec![
                CategoryReport {
                    category: "cs.AI".to_string(),
                    outcome: CategoryOutcome::Completed {
                        date: DateKey::new(2018, 2).unwrap(),
                        attempts: 1,
                        downloaded: vec![PathBuf::from("a_cs.AI.pdf"), PathBuf::from("b_cs.AI.pdf")],
                        skipped: 0,
                    },
                },
                CategoryReport {
                    category: "cs.CL".to_string(),
                    outcome: CategoryOutcome::Exhausted { attempts: 3 },
                },
            ],
        };
        assert_eq!(report.downloaded(), 2);
        assert_eq!(report.exhausted().collect::<Vec<_>>(), vec!["cs.CL"]);
    }
}
