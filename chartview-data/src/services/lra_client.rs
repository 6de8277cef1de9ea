//! Graph-query endpoint client
//!
//! Issues `GET {base}/api/lra/query?q=<query>` and returns the raw bound
//! rows. Row order is the upstream's table order and is preserved.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::UpstreamError;

const QUERY_PATH: &str = "/api/lra/query";

/// One result row: query variable name -> bound value.
pub type Binding = HashMap<String, Value>;

/// Graph-query response envelope.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub table: QueryTable,
}

/// Result table: `rows` for multi-result queries, `row` for single-result
/// queries. Either may be absent depending on the operation cardinality.
#[derive(Debug, Default, Deserialize)]
pub struct QueryTable {
    #[serde(default)]
    pub rows: Vec<Binding>,
    #[serde(default)]
    pub row: Option<Binding>,
}

/// Client for the graph-query service.
#[derive(Debug, Clone)]
pub struct LraClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LraClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Run a multi-result query, returning the bound rows in table order.
    pub async fn select_rows(&self, query: &str) -> Result<Vec<Binding>, UpstreamError> {
        let response = self.run(query).await?;
        Ok(response.table.rows)
    }

    /// Run a single-result query.
    pub async fn select_row(&self, query: &str) -> Result<Binding, UpstreamError> {
        let response = self.run(query).await?;
        response
            .table
            .row
            .ok_or_else(|| UpstreamError::Decode("query result has no row binding".to_string()))
    }

    async fn run(&self, query: &str) -> Result<QueryResponse, UpstreamError> {
        let url = self.query_url(query)?;

        tracing::debug!(url = %url, "Running graph query");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    /// Serialize the query text into the request URL. This is the single
    /// encoding point for query text; the builder never escapes anything.
    fn query_url(&self, query: &str) -> Result<reqwest::Url, UpstreamError> {
        let endpoint = format!("{}{}", self.base_url, QUERY_PATH);
        reqwest::Url::parse_with_params(&endpoint, &[("q", query)])
            .map_err(|e| UpstreamError::Network(format!("Invalid query URL: {}", e)))
    }
}
