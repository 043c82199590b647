//! Scripted fetcher for loader tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use vizload_core::error::LoadError;
use vizload_core::traits::Fetcher;
use vizload_core::types::{CsvTable, Dataset, Record};

struct Reply {
    delay: Duration,
    outcome: Result<Dataset, LoadError>,
}

/// Fetcher answering from a fixed script, with an optional delay per address.
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: HashMap<String, Reply>,
    events: Mutex<Vec<Event>>,
}

/// A fetch starting or finishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String),
    Completed(String),
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, address: &str, dataset: Dataset) -> Self {
        self.reply(address, Duration::ZERO, Ok(dataset))
    }

    pub fn fail(self, address: &str, err: LoadError) -> Self {
        self.reply(address, Duration::ZERO, Err(err))
    }

    pub fn reply(
        mut self,
        address: &str,
        delay: Duration,
        outcome: Result<Dataset, LoadError>,
    ) -> Self {
        self.replies
            .insert(address.to_string(), Reply { delay, outcome });
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Addresses in the order fetches were issued.
    pub fn started(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Started(address) => Some(address),
                Event::Completed(_) => None,
            })
            .collect()
    }

    /// Addresses in the order fetches finished.
    pub fn completed(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Completed(address) => Some(address),
                Event::Started(_) => None,
            })
            .collect()
    }

    async fn answer(&self, address: &str) -> Result<Dataset, LoadError> {
        self.events
            .lock()
            .unwrap()
            .push(Event::Started(address.to_string()));
        let outcome = match self.replies.get(address) {
            Some(reply) => {
                if !reply.delay.is_zero() {
                    tokio::time::sleep(reply.delay).await;
                }
                reply.outcome.clone()
            }
            None => Err(LoadError::fetch(address, "HTTP 404 Not Found")),
        };
        self.events
            .lock()
            .unwrap()
            .push(Event::Completed(address.to_string()));
        outcome
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch_json(&self, address: &str) -> Result<serde_json::Value, LoadError> {
        match self.answer(address).await? {
            Dataset::Json(value) => Ok(value),
            Dataset::Csv(_) => Err(LoadError::parse(address, "expected JSON")),
        }
    }

    async fn fetch_csv(&self, address: &str) -> Result<CsvTable, LoadError> {
        match self.answer(address).await? {
            Dataset::Csv(table) => Ok(table),
            Dataset::Json(_) => Err(LoadError::parse(address, "expected CSV")),
        }
    }

    fn name(&self) -> &str {
        "Scripted Fetcher"
    }
}

/// Small two-row table.
pub fn sample_table() -> CsvTable {
    let rows = [("France", "100"), ("Chile", "50")]
        .iter()
        .map(|(country, cases)| {
            let mut row = Record::new();
            row.insert("country".to_string(), country.to_string());
            row.insert("cases".to_string(), cases.to_string());
            row
        })
        .collect();
    CsvTable::new(vec!["country".to_string(), "cases".to_string()], rows)
}
