//! REST catalog endpoint client
//!
//! Path-addressed JSON resources for a song's historical ranks and related
//! media. Bodies arrive as a `data` envelope around an ordered list.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::UpstreamError;

/// Number of media items requested per lookup.
const MEDIA_COUNT: u32 = 4;

/// `{ data: [...] }` envelope shared by the catalog resources.
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
}

/// Raw historical-rank record.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRecord {
    /// End date of the chart week, ISO calendar date
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub rank: u32,
}

/// Raw related-media record.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaRecord {
    pub url: String,
    pub caption: String,
    pub thumbnail: String,
}

/// Client for the REST catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the historical chart ranks of a song, source order preserved.
    pub async fn fetch_rankings(&self, song_id: &str) -> Result<Vec<RankRecord>, UpstreamError> {
        let url = format!("{}/api/songs/{}/ranks", self.base_url, song_id);
        self.fetch_list(&url).await
    }

    /// Fetch related media of a song. The count is fixed at [`MEDIA_COUNT`];
    /// the service never asks for more.
    pub async fn fetch_media(&self, song_id: &str) -> Result<Vec<MediaRecord>, UpstreamError> {
        let url = format!(
            "{}/api/songs/{}/media?n={}",
            self.base_url, song_id, MEDIA_COUNT
        );
        self.fetch_list(&url).await
    }

    async fn fetch_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, UpstreamError> {
        tracing::debug!(url = %url, "Fetching catalog resource");

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

        let envelope: ListEnvelope<T> = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(envelope.data)
    }
}
