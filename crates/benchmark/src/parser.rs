//! Dataset parser.

use crate::dataset::Dataset;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when parsing datasets.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),
}

/// Parser for JSON pallet datasets.
#[derive(Debug, Default)]
pub struct DatasetParser;

impl DatasetParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a dataset from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses a dataset from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Dataset, ParseError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        self.validate(&dataset)?;
        Ok(dataset)
    }

    /// Lists the `*.json` files of a directory, sorted by path.
    pub fn list_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ParseError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn validate(&self, dataset: &Dataset) -> Result<(), ParseError> {
        if dataset.pallet.iter().any(|&d| d <= 0) {
            return Err(ParseError::InvalidFormat(format!(
                "pallet {:?} must have positive dimensions",
                dataset.pallet
            )));
        }
        for item in &dataset.items {
            if item.dimensions.iter().any(|&d| d <= 0) {
                return Err(ParseError::InvalidFormat(format!(
                    "item '{}' has non-positive dimensions {:?}",
                    item.id, item.dimensions
                )));
            }
        }
        Ok(())
    }
}
