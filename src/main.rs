//! # corpusprep
//!
//! Builds topic modeling corpora out of arXiv papers, in two steps:
//! random PDFs are first downloaded for each computer science category,
//! then their text is extracted (and optionally cleaned) into JSON files.
//!
//! ## Getting started
//!
//! ```sh
//! corpusprep 0.1.0
//! arXiv PDF corpus preparation for topic modeling.
//!
//! USAGE:
//!     corpusprep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract    Extract every PDF of a folder into a single record file
//!     fetch      Download random arXiv PDFs for each category
//!     help       Prints this message or the help of the given subcommand(s)
//!     split      Extract every PDF of a folder into text/filename files per fraction
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info corpusprep fetch dataset_pdf`).
use std::time::Duration;

use corpusprep::categories;
use corpusprep::corpus::{FullCorpus, Pipeline, Sampling, SplitConfig, SplitCorpus};
use corpusprep::download::{FetchConfig, Fetcher, HttpTransport, RetryPolicy};
use corpusprep::error::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Url;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

/// Build the crawl parameters from the command line.
fn fetch_config(f: &cli::Fetch) -> Result<FetchConfig, Error> {
    let mut config = FetchConfig::new(f.dst.clone())?;
    config.per_category = f.per_category;
    config.years = f.from_year..=f.to_year;
    config.retry = RetryPolicy::new(
        Some(f.max_attempts).filter(|&max| max > 0),
        Duration::from_millis(f.backoff_ms),
    );
    config.listing_base = Url::parse(&f.listing_url)?;
    config.site = Url::parse(&f.site_url)?;
    Ok(config)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Corpusprep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Corpusprep::Fetch(f) => {
            let config = fetch_config(&f)?;
            if config.retry.max_attempts().is_none() {
                warn!("No attempt limit! A failing category will be retried forever.");
            }
            let categories = if f.categories.is_empty() {
                categories::all()
            } else {
                f.categories
            };
            let rng = match f.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let transport = HttpTransport::new(Duration::from_secs(f.timeout))?;
            let mut fetcher = Fetcher::new(transport, rng, config);
            let report = fetcher.fetch(&categories)?;

            info!(
                "downloaded {} PDFs over {} categories, {} given up",
                report.downloaded(),
                report.categories.len(),
                report.exhausted().count()
            );
        }

        cli::Corpusprep::Extract(e) => {
            let p = FullCorpus::new(e.src, e.dst, e.clean)?;
            p.run()?;
        }

        cli::Corpusprep::Split(s) => {
            let mut config = SplitConfig::default();
            if !s.fractions.is_empty() {
                config.fractions = s.fractions;
            }
            if s.nested {
                config.sampling = Sampling::Nested;
            }
            let p = SplitCorpus::new(s.src, s.text_dst, s.filename_dst, config, s.clean, s.seed)?;
            p.run()?;
        }
    };
    Ok(())
}
