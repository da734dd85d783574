// Activity dataset model
// Matches the contributions JSON feed: a list of years plus a flat list of days

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChartError, Result};
use crate::utils::calendar::parse_date;
use crate::utils::config::GRADE_COUNT;

/// Everything needed to draw both charts for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDataset {
    pub years: Vec<Year>,
    pub contributions: Vec<Contribution>,
}

/// Per-year summary as reported by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Year {
    /// Four digit year, e.g. "2021"
    pub year: String,
    pub total: u64,
    pub range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// A single day of activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub date: String,
    pub count: u64,
    /// Colour grade, pre-classified by the data source (0..=4)
    #[serde(deserialize_with = "intensity_from_number_or_string")]
    pub intensity: u8,
}

impl Year {
    pub fn new(year: impl Into<String>, total: u64, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            total,
            range: DateRange {
                start: start.into(),
                end: end.into(),
            },
        }
    }
}

impl Contribution {
    pub fn new(date: impl Into<String>, count: u64, intensity: u8) -> Self {
        Self {
            date: date.into(),
            count,
            intensity,
        }
    }
}

/// Some feeds send intensity as a string ("3"), others as a number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIntensity {
    Number(u8),
    Text(String),
}

fn intensity_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    match RawIntensity::deserialize(deserializer)? {
        RawIntensity::Number(n) => Ok(n),
        RawIntensity::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// A year with its dates parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedYear<'a> {
    pub source: &'a Year,
    pub number: i32,
    /// January 1 of `number`
    pub first_day: NaiveDate,
    /// Last day reported by the data source (`range.end`)
    pub last_day: NaiveDate,
}

/// Validated view of a dataset with contributions keyed by date
#[derive(Debug, Clone)]
pub struct DatasetIndex<'a> {
    years: Vec<IndexedYear<'a>>,
    by_date: HashMap<NaiveDate, &'a Contribution>,
}

impl<'a> DatasetIndex<'a> {
    pub fn years(&self) -> &[IndexedYear<'a>] {
        &self.years
    }

    pub fn contribution_on(&self, date: NaiveDate) -> Option<&'a Contribution> {
        self.by_date.get(&date).copied()
    }
}

impl ActivityDataset {
    /// Parse a dataset from the contributions JSON feed
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ChartError::InvalidDataset(e.to_string()))
    }

    /// Validate the dataset and build a date index over it
    pub fn index(&self) -> Result<DatasetIndex<'_>> {
        let years = self
            .years
            .iter()
            .map(index_year)
            .collect::<Result<Vec<_>>>()?;

        let mut by_date = HashMap::with_capacity(self.contributions.len());
        for contribution in &self.contributions {
            let date = parse_date(&contribution.date).ok_or_else(|| {
                ChartError::InvalidDataset(format!("bad contribution date: {:?}", contribution.date))
            })?;
            if contribution.intensity as usize >= GRADE_COUNT {
                return Err(ChartError::InvalidDataset(format!(
                    "intensity {} on {} is outside 0..={}",
                    contribution.intensity,
                    contribution.date,
                    GRADE_COUNT - 1
                )));
            }
            if by_date.insert(date, contribution).is_some() {
                return Err(ChartError::InvalidDataset(format!(
                    "duplicate contribution date: {}",
                    contribution.date
                )));
            }
        }

        Ok(DatasetIndex { years, by_date })
    }
}

fn index_year(year: &Year) -> Result<IndexedYear<'_>> {
    let label = year.year.trim();
    if label.len() != 4 || !label.chars().all(|c| c.is_ascii_digit()) {
        return Err(ChartError::InvalidDataset(format!("bad year: {:?}", year.year)));
    }
    let number: i32 = label
        .parse()
        .map_err(|_| ChartError::InvalidDataset(format!("bad year: {:?}", year.year)))?;
    let first_day = NaiveDate::from_ymd_opt(number, 1, 1)
        .ok_or_else(|| ChartError::InvalidDataset(format!("bad year: {:?}", year.year)))?;

    parse_date(&year.range.start).ok_or_else(|| {
        ChartError::InvalidDataset(format!("bad range start for {}: {:?}", label, year.range.start))
    })?;
    let last_day = parse_date(&year.range.end).ok_or_else(|| {
        ChartError::InvalidDataset(format!("bad range end for {}: {:?}", label, year.range.end))
    })?;

    Ok(IndexedYear {
        source: year,
        number,
        first_day,
        last_day,
    })
}
