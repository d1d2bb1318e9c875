//! External data backend integrations
//!
//! The dashboard never owns data. Every table and view is read through
//! [`TableReader`], which the REST client and the fixture reader implement.

pub mod memory;
pub mod supabase;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub use memory::InMemoryReader;
pub use supabase::SupabaseClient;

/// One read of a backend table or view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    /// Table or view name
    pub source: String,
    /// Column selection in REST `select` syntax, e.g. `isletme_id, Arac(arac_tur_adi)`
    pub columns: String,
    pub limit: Option<u32>,
}

impl ReadRequest {
    pub fn new(source: impl Into<String>, columns: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            columns: columns.into(),
            limit: None,
        }
    }

    /// Read every column
    pub fn all(source: impl Into<String>) -> Self {
        Self::new(source, "*")
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read boundary to the managed database
#[async_trait]
pub trait TableReader: Send + Sync {
    /// Fetch the rows of a table or view as raw JSON objects
    async fn read(&self, request: ReadRequest) -> AppResult<Vec<Value>>;
}

/// Read a source and decode every row into `T`
pub async fn fetch_rows<T: DeserializeOwned>(
    reader: &dyn TableReader,
    request: ReadRequest,
) -> AppResult<Vec<T>> {
    let source = request.source.clone();
    let rows = reader.read(request).await?;
    tracing::debug!(source = %source, rows = rows.len(), "backend read completed");

    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| AppError::Decode {
                source_name: source.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}
