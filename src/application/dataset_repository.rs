// Repository trait for loading the viewership dataset
use crate::domain::viewership::Dataset;
use async_trait::async_trait;
use std::path::PathBuf;

/// Why the dataset could not be loaded. Any of these stops startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {} is missing required columns: {}", path.display(), missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("invalid {column} value '{value}' on line {line} of {}", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Read every record, preserving file order
    async fn load_dataset(&self) -> Result<Dataset, LoadError>;
}
