//! Top-N selection over loaded country records.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use vizload_core::error::ChartError;
use vizload_core::types::{Dataset, Metric, Record};

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryBar {
    pub location: String,
    pub value: f64,
    /// Flag image URL, when the source provides one
    pub flag: Option<String>,
}

/// A record from either payload format.
enum Row<'a> {
    Json(&'a Map<String, Value>),
    Csv(&'a Record),
}

impl<'a> Row<'a> {
    fn number(&self, key: &str) -> Option<f64> {
        match self {
            Row::Json(map) => match map.get(key)? {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            },
            Row::Csv(record) => record.get(key)?.trim().parse().ok(),
        }
    }

    fn text(&self, key: &str) -> Option<&'a str> {
        match *self {
            Row::Json(map) => map.get(key)?.as_str(),
            Row::Csv(record) => record.get(key).map(String::as_str),
        }
    }

    fn flag(&self) -> Option<&'a str> {
        match *self {
            Row::Json(map) => map.get("countryInfo")?.get("flag")?.as_str(),
            Row::Csv(record) => record.get("flag").map(String::as_str),
        }
    }
}

fn rows(dataset: &Dataset) -> Result<Vec<Row<'_>>, ChartError> {
    let rows: Vec<Row<'_>> = match dataset {
        Dataset::Json(Value::Array(items)) => {
            items.iter().filter_map(Value::as_object).map(Row::Json).collect()
        }
        Dataset::Json(_) => Vec::new(),
        Dataset::Csv(table) => table.rows.iter().map(Row::Csv).collect(),
    };

    if rows.is_empty() {
        return Err(ChartError::EmptyResult);
    }
    Ok(rows)
}

/// Rank countries by a metric, largest first.
///
/// Records without a positive value for the metric are skipped.
pub fn rank_countries(
    dataset: &Dataset,
    metric: Metric,
    top_n: usize,
) -> Result<Vec<CountryBar>, ChartError> {
    let mut bars: Vec<CountryBar> = rows(dataset)?
        .iter()
        .filter_map(|row| {
            let value = row.number(metric.key()).filter(|v| *v > 0.0)?;
            Some(CountryBar {
                location: row.text("country").unwrap_or("Unknown").to_string(),
                value,
                flag: row.flag().map(str::to_string),
            })
        })
        .collect();

    if bars.is_empty() {
        return Err(ChartError::NoValidData {
            metric: metric.key().to_string(),
        });
    }

    bars.sort_by(|a, b| b.value.total_cmp(&a.value));
    bars.truncate(top_n);
    Ok(bars)
}

/// Most recent `updated` timestamp (Unix milliseconds) across all records.
pub fn latest_update(dataset: &Dataset) -> Option<DateTime<Utc>> {
    rows(dataset)
        .ok()?
        .iter()
        .filter_map(|row| row.number("updated"))
        .map(|ms| ms as i64)
        .max()
        .and_then(DateTime::from_timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vizload_core::types::CsvTable;

    fn countries() -> Dataset {
        Dataset::Json(json!([
            {"country": "France", "cases": 40138560, "deaths": 167985, "recovered": null,
             "countryInfo": {"flag": "https://disease.sh/assets/img/flags/fr.png"}, "updated": 1700000000000u64},
            {"country": "USA", "cases": 111820082, "deaths": 1219487, "recovered": 109814428,
             "countryInfo": {"flag": "https://disease.sh/assets/img/flags/us.png"}, "updated": 1700000500000u64},
            {"country": "India", "cases": 45035393, "deaths": 533570, "recovered": 0,
             "countryInfo": {"flag": "https://disease.sh/assets/img/flags/in.png"}, "updated": 1700000100000u64},
            {"country": "Vatican City", "cases": 29, "deaths": 0, "recovered": 29},
            "not a record"
        ]))
    }

    #[test]
    fn test_rank_sorts_descending_and_truncates() {
        let bars = rank_countries(&countries(), Metric::Cases, 2).unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].location, "USA");
        assert_eq!(bars[0].value, 111820082.0);
        assert_eq!(bars[1].location, "India");
        assert_eq!(
            bars[1].flag.as_deref(),
            Some("https://disease.sh/assets/img/flags/in.png")
        );
    }

    #[test]
    fn test_rank_skips_null_and_zero() {
        let bars = rank_countries(&countries(), Metric::Recovered, 10).unwrap();
        let names: Vec<&str> = bars.iter().map(|b| b.location.as_str()).collect();
        assert_eq!(names, vec!["USA", "Vatican City"]);
        assert_eq!(bars[1].flag, None);
    }

    #[test]
    fn test_rank_no_valid_data() {
        let err = rank_countries(&countries(), Metric::Critical, 10).unwrap_err();
        assert_eq!(
            err,
            ChartError::NoValidData {
                metric: "critical".to_string()
            }
        );
    }

    #[test]
    fn test_rank_empty_payloads() {
        assert_eq!(
            rank_countries(&Dataset::Json(json!([])), Metric::Cases, 10).unwrap_err(),
            ChartError::EmptyResult
        );
        assert_eq!(
            rank_countries(&Dataset::Json(json!({"message": "not found"})), Metric::Cases, 10)
                .unwrap_err(),
            ChartError::EmptyResult
        );
        assert_eq!(
            rank_countries(&Dataset::Csv(CsvTable::default()), Metric::Cases, 10).unwrap_err(),
            ChartError::EmptyResult
        );
    }

    #[test]
    fn test_rank_csv_rows() {
        let mut table = CsvTable::new(vec!["country".into(), "deaths".into(), "flag".into()], Vec::new());
        for (country, deaths) in [("Peru", "220831"), ("Brazil", "702116"), ("Chad", "")] {
            let mut row = Record::new();
            row.insert("country".into(), country.into());
            row.insert("deaths".into(), deaths.into());
            row.insert("flag".into(), format!("{}.png", country.to_lowercase()));
            table.rows.push(row);
        }

        let bars = rank_countries(&Dataset::Csv(table), Metric::Deaths, 10).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].location, "Brazil");
        assert_eq!(bars[0].flag.as_deref(), Some("brazil.png"));
    }

    #[test]
    fn test_latest_update() {
        let updated = latest_update(&countries()).unwrap();
        assert_eq!(updated.timestamp_millis(), 1700000500000);
        assert!(latest_update(&Dataset::Json(json!([{"country": "X"}]))).is_none());
    }
}
