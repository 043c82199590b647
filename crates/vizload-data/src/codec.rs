//! Payload decoding.

use csv::ReaderBuilder;
use vizload_core::error::LoadError;
use vizload_core::types::{CsvTable, Record};

/// Parse a JSON document.
pub fn parse_json(address: &str, body: &str) -> Result<serde_json::Value, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::parse(address, e))
}

/// Parse a CSV document with a header row.
///
/// Short rows keep only the fields they have; extra trailing fields are dropped.
pub fn parse_csv(address: &str, body: &str) -> Result<CsvTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::parse(address, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| LoadError::parse(address, e))?;
        let row: Record = columns
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(CsvTable::new(columns, rows))
}
