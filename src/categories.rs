//! arXiv subject categories.
//!
//! Computer science sub-categories crawled by default.
//! The list actually crawled is passed to [crate::download::Fetcher::fetch],
//! this one is only the default set.

pub const CS_CATEGORIES: [&str; 38] = [
    "cs.AI", "cs.CL", "cs.CC", "cs.CE", "cs.CG", "cs.GT", "cs.CV", "cs.CY", "cs.CR", "cs.DS",
    "cs.DB", "cs.DL", "cs.DM", "cs.DC", "cs.ET", "cs.FL", "cs.GR", "cs.AR", "cs.HC", "cs.IR",
    "cs.IT", "cs.LG", "cs.LO", "cs.MS", "cs.MA", "cs.MM", "cs.NI", "cs.NE", "cs.NA", "cs.OH",
    "cs.PF", "cs.PL", "cs.RO", "cs.SI", "cs.SE", "cs.SD", "cs.SC", "cs.SY",
];

/// Owned copy of [CS_CATEGORIES].
pub fn all() -> Vec<String> {
    CS_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
