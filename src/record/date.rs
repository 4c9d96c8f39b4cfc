//! Birth and reference dates
//!
//! A plain day/month/year triple. A day of 31 in a 30-day month is accepted
//! as-is; only the codec range-checks fields.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, RollbookError};

/// A day/month/year triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Date {
    /// Lowest accepted year when decoding
    pub const MIN_YEAR: i32 = 1900;

    /// Highest accepted year when decoding
    pub const MAX_YEAR: i32 = 2100;

    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    /// Parse an ISO `YYYY-MM-DD` date (used for reference dates)
    pub fn parse_iso(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|e| RollbookError::Config(format!("invalid date '{}': {}", s, e)))
    }

    /// Whether every field lies inside the accepted decode ranges
    pub fn in_range(day: i32, month: i32, year: i32) -> bool {
        (1..=31).contains(&day)
            && (1..=12).contains(&month)
            && (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year)
    }

    /// Whole years elapsed from `self` (a birth date) to `reference`
    pub fn age_at(&self, reference: &Date) -> i32 {
        age(self, reference)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}

/// Age in whole years on `reference` for someone born on `birth`
///
/// `reference.year - birth.year`, minus one when the birthday has not yet
/// come round, i.e. `(month, day)` of the reference sorts before the birth's.
pub fn age(birth: &Date, reference: &Date) -> i32 {
    let years = reference.year - birth.year;
    if (reference.month, reference.day) < (birth.month, birth.day) {
        years - 1
    } else {
        years
    }
}
