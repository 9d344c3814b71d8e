//! Listing page dates.
use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::Error;

/// A year/month pair, rendered as `YYMM` in listing page addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateKey {
    year: u16,
    month: u8,
}

impl DateKey {
    pub fn new(year: u16, month: u8) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::Custom(format!("invalid month: {}", month)));
        }
        Ok(Self { year, month })
    }

    /// Draw a year uniformly from `years` and a month uniformly from 1–12.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, years: &RangeInclusive<u16>) -> Self {
        Self {
            year: rng.gen_range(years.clone()),
            month: rng.gen_range(1..=12),
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.year % 100, self.month)
    }
}
