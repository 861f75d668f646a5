// Viewership domain models
use chrono::NaiveDateTime;
use std::fmt;

/// One row of the viewership dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub country: String,
    pub sports: String,
    pub gender: String,
    pub views: f64,
    pub site_visits: f64,
    /// Date and Time columns combined
    pub date_time: NaiveDateTime,
}

impl Record {
    pub fn new(
        country: String,
        sports: String,
        gender: String,
        views: f64,
        site_visits: f64,
        date_time: NaiveDateTime,
    ) -> Self {
        Self {
            country,
            sports,
            gender,
            views,
            site_visits,
            date_time,
        }
    }

    pub fn dimension(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Country => &self.country,
            Dimension::Sports => &self.sports,
            Dimension::Gender => &self.gender,
        }
    }

    pub fn measure(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Views => self.views,
            Measure::SiteVisits => self.site_visits,
        }
    }
}

/// Categorical columns that can be filtered and grouped on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Country,
    Sports,
    Gender,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Country, Dimension::Sports, Dimension::Gender];

    /// Column name as it appears in the CSV header
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Country => "Country",
            Dimension::Sports => "Sports",
            Dimension::Gender => "Gender",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Numeric columns that can be summed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Views,
    SiteVisits,
}

impl Measure {
    pub fn column(&self) -> &'static str {
        match self {
            Measure::Views => "Views",
            Measure::SiteVisits => "Site_Visits",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// The loaded table. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of a column in first-seen order
    pub fn distinct(&self, dimension: Dimension) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|r| r.dimension(dimension))
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }
}

/// Filter on one dimension: rows where `dimension == value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub dimension: Dimension,
    pub value: String,
}

impl Filter {
    pub fn new(dimension: Dimension, value: impl Into<String>) -> Self {
        Self {
            dimension,
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.dimension(self.dimension) == self.value
    }
}

/// Summed measure for one group, keys in `group_by` order
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub keys: Vec<String>,
    pub value: f64,
}

impl AggregateRow {
    pub fn new(keys: Vec<String>, value: f64) -> Self {
        Self { keys, value }
    }

    pub fn key(&self, index: usize) -> &str {
        self.keys.get(index).map(String::as_str).unwrap_or_default()
    }
}
