// CSV file repository implementation
use crate::application::dataset_repository::{DatasetRepository, LoadError};
use crate::domain::viewership::{Dataset, Record};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use std::path::PathBuf;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Country",
    "Sports",
    "Gender",
    "Views",
    "Site_Visits",
    "Date",
    "Time",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Sports")]
    sports: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Views")]
    views: f64,
    #[serde(rename = "Site_Visits")]
    site_visits: f64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time")]
    time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CsvDatasetRepository {
    path: PathBuf,
}

impl CsvDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, bytes: &[u8]) -> Result<Dataset, LoadError> {
        let csv_error = |source| LoadError::Csv {
            path: self.path.clone(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader.headers().map_err(csv_error)?.clone();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns {
                path: self.path.clone(),
                missing,
            });
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let raw = result.map_err(csv_error)?;
            let line = raw.position().map(|p| p.line()).unwrap_or_default();
            let row: CsvRow = raw.deserialize(Some(&headers)).map_err(csv_error)?;
            let date_time = self.combine(&row, line)?;

            records.push(Record::new(
                row.country,
                row.sports,
                row.gender,
                row.views,
                row.site_visits,
                date_time,
            ));
        }

        Ok(Dataset::new(records))
    }

    fn combine(&self, row: &CsvRow, line: u64) -> Result<NaiveDateTime, LoadError> {
        let invalid = |column: &'static str, value: &str| LoadError::InvalidValue {
            path: self.path.clone(),
            line,
            column,
            value: value.to_string(),
        };

        let date = parse_date(&row.date).ok_or_else(|| invalid("Date", &row.date))?;
        let time = match row.time.as_deref() {
            None | Some("") => NaiveTime::MIN,
            Some(raw) => parse_time(raw).ok_or_else(|| invalid("Time", raw))?,
        };

        Ok(date.and_time(time))
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

#[async_trait]
impl DatasetRepository for CsvDatasetRepository {
    async fn load_dataset(&self) -> Result<Dataset, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        let dataset = self.parse(&bytes)?;
        if dataset.is_empty() {
            tracing::warn!(
                "Dataset {} has no records, every chart will be empty",
                self.path.display()
            );
        }
        tracing::info!(
            "Loaded {} records from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}
