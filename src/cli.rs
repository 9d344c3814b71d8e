//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "corpusprep", about = "arXiv PDF corpus preparation for topic modeling.")]
/// Holds every command that is callable by the `corpusprep` command.
pub enum Corpusprep {
    #[structopt(about = "Download random arXiv PDFs for each category")]
    Fetch(Fetch),
    #[structopt(about = "Extract every PDF of a folder into a single record file")]
    Extract(Extract),
    #[structopt(about = "Extract every PDF of a folder into text/filename files per fraction")]
    Split(Split),
}

#[derive(Debug, StructOpt)]
/// Fetch command and parameters.
/// ```sh
/// corpusprep-fetch 0.1.0
/// Download random arXiv PDFs for each category
///
/// USAGE:
///     corpusprep fetch [OPTIONS] <dst>
///
/// OPTIONS:
///     -c, --category <categories>...       categories to crawl. Default is every cs category.
///     -n, --per-category <per-category>    number of PDFs sampled per category [default: 10]
///
/// ARGS:
///     <dst>    download destination
/// ```
pub struct Fetch {
    #[structopt(parse(from_os_str), help = "download destination")]
    pub dst: PathBuf,
    #[structopt(
        short = "c",
        long = "category",
        number_of_values = 1,
        help = "categories to crawl. Default is every cs category."
    )]
    pub categories: Vec<String>,
    #[structopt(
        short = "n",
        long = "per-category",
        help = "number of PDFs sampled per category",
        default_value = "10"
    )]
    pub per_category: usize,
    #[structopt(long = "from-year", help = "first listing year", default_value = "2016")]
    pub from_year: u16,
    #[structopt(long = "to-year", help = "last listing year", default_value = "2022")]
    pub to_year: u16,
    #[structopt(
        long = "max-attempts",
        help = "listing attempts per category, 0 for no limit",
        default_value = "25"
    )]
    pub max_attempts: usize,
    #[structopt(
        long = "backoff-ms",
        help = "wait between two failed attempts (in milliseconds)",
        default_value = "1000"
    )]
    pub backoff_ms: u64,
    #[structopt(
        long = "timeout",
        help = "request timeout (in seconds)",
        default_value = "60"
    )]
    pub timeout: u64,
    #[structopt(
        long = "listing-url",
        help = "listing pages base address",
        default_value = "https://export.arxiv.org/list"
    )]
    pub listing_url: String,
    #[structopt(
        long = "site-url",
        help = "address PDF links are resolved against",
        default_value = "https://export.arxiv.org"
    )]
    pub site_url: String,
    #[structopt(long = "seed", help = "random seed")]
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
pub struct Extract {
    #[structopt(parse(from_os_str), help = "PDF folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination JSON file")]
    pub dst: PathBuf,
    #[structopt(
        long = "clean",
        parse(from_os_str),
        help = "clean text using resources (stopwords.txt, words.txt, lemmas.txt, noun.exc) from this folder"
    )]
    pub clean: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
/// ```sh
/// corpusprep-split 0.1.0
/// Extract every PDF of a folder into text/filename files per fraction
///
/// USAGE:
///     corpusprep split [FLAGS] [OPTIONS] <src> <text-dst> <filename-dst>
///
/// ARGS:
///     <src>             PDF folder
///     <text-dst>        base path of text files (`_<percent>` is added before the extension)
///     <filename-dst>    base path of filename files (`_<percent>` is added before the extension)
/// ```
pub struct Split {
    #[structopt(parse(from_os_str), help = "PDF folder")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "base path of text files (`_<percent>` is added before the extension)"
    )]
    pub text_dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "base path of filename files (`_<percent>` is added before the extension)"
    )]
    pub filename_dst: PathBuf,
    #[structopt(
        short = "f",
        long = "fraction",
        number_of_values = 1,
        help = "corpus fractions. Default is 0.2 0.4 0.6 0.8 1."
    )]
    pub fractions: Vec<f64>,
    #[structopt(long = "nested", help = "make each subset contain the smaller ones")]
    pub nested: bool,
    #[structopt(
        long = "clean",
        parse(from_os_str),
        help = "clean text using resources (stopwords.txt, words.txt, lemmas.txt, noun.exc) from this folder"
    )]
    pub clean: Option<PathBuf>,
    #[structopt(long = "seed", help = "random seed")]
    pub seed: Option<u64>,
}
