use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month used as the reporting period of every indicator.
///
/// Serialized as `"YYYY-MM"`. Ordering is chronological, and two periods are
/// always comparable by their month distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, rejecting months outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("Invalid month {} in period {}", month, year));
        }
        Ok(Self { year, month })
    }

    pub fn january(year: i32) -> Self {
        Self { year, month: 1 }
    }

    pub fn december(year: i32) -> Self {
        Self { year, month: 12 }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Absolute month number, used for offset arithmetic.
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }

    /// Period `months` away from this one (negative goes back in time).
    pub fn offset(&self, months: i64) -> Self {
        Self::from_ordinal(self.ordinal() + months)
    }

    /// Signed month distance from `from` to `to`.
    pub fn months_between(from: Period, to: Period) -> i64 {
        to.ordinal() - from.ordinal()
    }

    /// Contiguous inclusive run of months. Empty when `to` precedes `from`.
    pub fn range(from: Period, to: Period) -> Vec<Period> {
        (from.ordinal()..=to.ordinal())
            .map(Self::from_ordinal)
            .collect()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid period '{}', expected YYYY-MM", s))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(format!("Invalid period '{}', expected YYYY-MM", s));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in period '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month in period '{}'", s))?;
        Period::new(year, month)
    }
}

impl Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
