//! Parsed payload types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Format;

/// One CSV row keyed by column name.
pub type Record = BTreeMap<String, String>;

/// CSV rows together with the header order of the file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CsvTable {
    /// Column names in file order
    pub columns: Vec<String>,
    /// Rows in file order
    pub rows: Vec<Record>,
}

impl CsvTable {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the values of one column; rows missing the field are skipped.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows
            .iter()
            .filter_map(move |row| row.get(name).map(String::as_str))
    }
}

/// One parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    Json(serde_json::Value),
    Csv(CsvTable),
}

impl Dataset {
    pub fn format(&self) -> Format {
        match self {
            Dataset::Json(_) => Format::Json,
            Dataset::Csv(_) => Format::Csv,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Dataset::Json(value) => Some(value),
            Dataset::Csv(_) => None,
        }
    }

    pub fn as_csv(&self) -> Option<&CsvTable> {
        match self {
            Dataset::Csv(table) => Some(table),
            Dataset::Json(_) => None,
        }
    }

    /// Number of top-level records, if the payload is a list.
    pub fn record_count(&self) -> Option<usize> {
        match self {
            Dataset::Json(serde_json::Value::Array(items)) => Some(items.len()),
            Dataset::Json(_) => None,
            Dataset::Csv(table) => Some(table.len()),
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    /// Payload of a single-source loader
    Single(Dataset),
    /// Payloads of a multi-source loader, in request order
    Multi(Vec<Dataset>),
}

impl LoadResult {
    /// All datasets in request order.
    pub fn datasets(&self) -> &[Dataset] {
        match self {
            LoadResult::Single(dataset) => std::slice::from_ref(dataset),
            LoadResult::Multi(datasets) => datasets,
        }
    }

    pub fn into_datasets(self) -> Vec<Dataset> {
        match self {
            LoadResult::Single(dataset) => vec![dataset],
            LoadResult::Multi(datasets) => datasets,
        }
    }
}
