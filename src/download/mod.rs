/*! arXiv PDF crawling

For each category, a random year/month listing page is requested,
`Download PDF` links are parsed out of it and a random sample of them is saved
to the destination folder as `<id>_<category>.pdf`.

A failed listing attempt (network error, bad status, unusable page) is retried with a new random month,
up to the limit set by the [RetryPolicy].
!*/
mod date;
mod fetcher;
mod listing;
mod retry;
mod transport;

pub use date::DateKey;
pub use fetcher::{CategoryOutcome, CategoryReport, FetchConfig, FetchReport, Fetcher};
pub use listing::{listing_url, local_filename, parse_pdf_links};
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, Transport};
