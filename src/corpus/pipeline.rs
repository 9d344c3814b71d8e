//! Pipeline trait and corpus pipelines.
use std::path::PathBuf;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{build_full, build_splits, SplitConfig, SubsetSummary};
use crate::cleaning::Cleaner;
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

/// Loads a cleaner if a resource folder is given.
fn load_cleaner(resources: Option<&PathBuf>) -> Result<Option<Cleaner>, Error> {
    match resources {
        Some(dir) => Ok(Some(Cleaner::from_dir(dir)?)),
        None => {
            info!("no resource folder specified, text will not be cleaned");
            Ok(None)
        }
    }
}

/// Whole folder into a single record file.
pub struct FullCorpus {
    src: PathBuf,
    dst: PathBuf,
    cleaner: Option<Cleaner>,
}

impl FullCorpus {
    /// `resources` is the cleaning resource folder, no cleaning is done if [None].
    pub fn new(src: PathBuf, dst: PathBuf, resources: Option<PathBuf>) -> Result<Self, Error> {
        Ok(Self {
            src,
            dst,
            cleaner: load_cleaner(resources.as_ref())?,
        })
    }
}

impl Pipeline<usize> for FullCorpus {
    fn run(&self) -> Result<usize, Error> {
        build_full(&self.src, &self.dst, self.cleaner.as_ref())
    }
}

/// Folder into text/filename files per fraction.
pub struct SplitCorpus {
    src: PathBuf,
    text_dst: PathBuf,
    filename_dst: PathBuf,
    config: SplitConfig,
    cleaner: Option<Cleaner>,
    seed: Option<u64>,
}

impl SplitCorpus {
    /// A fixed `seed` makes the draws reproducible.
    pub fn new(
        src: PathBuf,
        text_dst: PathBuf,
        filename_dst: PathBuf,
        config: SplitConfig,
        resources: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Result<Self, Error> {
        config.validate()?;
        if seed.is_none() {
            warn!("No seed specified! Subsets will not be reproducible.");
        }
        Ok(Self {
            src,
            text_dst,
            filename_dst,
            config,
            cleaner: load_cleaner(resources.as_ref())?,
            seed,
        })
    }
}

impl Pipeline<Vec<SubsetSummary>> for SplitCorpus {
    fn run(&self) -> Result<Vec<SubsetSummary>, Error> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        build_splits(
            &self.src,
            &self.text_dst,
            &self.filename_dst,
            &self.config,
            self.cleaner.as_ref(),
            &mut rng,
        )
    }
}
