//! REST client for the managed Postgres backend
//!
//! Talks to the PostgREST endpoint exposed by Supabase: one GET per table or
//! view, authenticated with the project's anonymous key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{ReadRequest, TableReader};
use crate::config::BackendConfig;
use crate::error::{AppError, AppResult};

/// Supabase REST client
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    api_key: String,
    schema: String,
    base_url: String,
}

impl SupabaseClient {
    /// Create a client from the backend configuration
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            schema: config.schema.clone(),
            base_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
        })
    }

    /// Query string for a read request
    fn query(request: &ReadRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![("select", compact_columns(&request.columns))];
        if let Some(limit) = request.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// Strip whitespace from a column selection; PostgREST rejects it inside
/// embedded resources.
fn compact_columns(columns: &str) -> String {
    columns.chars().filter(|c| !c.is_whitespace()).collect()
}

#[async_trait]
impl TableReader for SupabaseClient {
    async fn read(&self, request: ReadRequest) -> AppResult<Vec<Value>> {
        let url = format!("{}/{}", self.base_url, request.source);

        let response = self
            .client
            .get(&url)
            .query(&Self::query(&request))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept-Profile", &self.schema)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(source = %request.source, error = %e, "backend request failed");
                AppError::BackendUnavailable(format!("{}: {}", request.source, e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend {
                source_name: request.source,
                status: status.as_u16(),
                body,
            });
        }

        // A null body is an empty result
        let rows: Option<Vec<Value>> = response.json().await.map_err(|e| AppError::Decode {
            source_name: request.source.clone(),
            message: e.to_string(),
        })?;

        Ok(rows.unwrap_or_default())
    }
}
