//! Fixture-backed reader
//!
//! Serves rows from memory instead of the REST backend. Used for offline
//! demos (`backend.fixture_path`) and by the test suite, which also relies on
//! its fault injection, artificial latency and read counters.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ReadRequest, TableReader};
use crate::error::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct InMemoryReader {
    tables: HashMap<String, Vec<Value>>,
    faults: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    reads: Mutex<HashMap<String, usize>>,
}

impl InMemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fixture shaped as `{ "<source>": [row, ...], ... }`
    pub fn from_json(fixture: Value) -> AppResult<Self> {
        let Value::Object(sources) = fixture else {
            return Err(AppError::Configuration(
                "fixture must be an object keyed by table name".to_string(),
            ));
        };

        let mut reader = Self::new();
        for (source, rows) in sources {
            let Value::Array(rows) = rows else {
                return Err(AppError::Configuration(format!(
                    "fixture entry {} must be an array of rows",
                    source
                )));
            };
            reader.tables.insert(source, rows);
        }
        Ok(reader)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("cannot read fixture {}: {}", path.display(), e))
        })?;
        let fixture: Value = serde_json::from_str(&raw).map_err(|e| {
            AppError::Configuration(format!("invalid fixture {}: {}", path.display(), e))
        })?;
        Self::from_json(fixture)
    }

    pub fn with_table(mut self, source: &str, rows: Vec<Value>) -> Self {
        self.tables.insert(source.to_string(), rows);
        self
    }

    /// Make every read of `source` fail with a backend error
    pub fn with_fault(mut self, source: &str, message: &str) -> Self {
        self.faults.insert(source.to_string(), message.to_string());
        self
    }

    /// Delay every read of `source`
    pub fn with_delay(mut self, source: &str, delay: Duration) -> Self {
        self.delays.insert(source.to_string(), delay);
        self
    }

    /// Number of reads issued against `source`
    pub fn read_count(&self, source: &str) -> usize {
        self.reads
            .lock()
            .map(|reads| reads.get(source).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn total_reads(&self) -> usize {
        self.reads
            .lock()
            .map(|reads| reads.values().sum())
            .unwrap_or(0)
    }

    fn record_read(&self, source: &str) {
        if let Ok(mut reads) = self.reads.lock() {
            *reads.entry(source.to_string()).or_insert(0) += 1;
        }
    }
}

#[async_trait]
impl TableReader for InMemoryReader {
    async fn read(&self, request: ReadRequest) -> AppResult<Vec<Value>> {
        self.record_read(&request.source);

        if let Some(delay) = self.delays.get(&request.source) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(message) = self.faults.get(&request.source) {
            return Err(AppError::Backend {
                source_name: request.source,
                status: 500,
                body: message.clone(),
            });
        }

        let rows = self.tables.get(&request.source).ok_or_else(|| AppError::Backend {
            source_name: request.source.clone(),
            status: 404,
            body: format!("relation \"{}\" does not exist", request.source),
        })?;

        let limit = request.limit.map(|l| l as usize).unwrap_or(rows.len());
        Ok(rows.iter().take(limit).cloned().collect())
    }
}
