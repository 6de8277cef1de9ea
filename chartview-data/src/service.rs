//! Public data-access operations
//!
//! One stateless service object over the two transports. Each operation is
//! a single request: build the query (graph operations only), run it, map
//! the payload. Failures of either transport surface as the one domain
//! error; callers never see a transport-specific shape.

use chartview_common::config::Endpoints;
use chartview_common::models::{ChartPosition, MediaItem, Song, SongRank};
use chartview_common::{Error, Result};

use crate::error::normalize;
use crate::mapping;
use crate::queries;
use crate::services::{CatalogClient, LraClient};

const USER_AGENT: &str = concat!("chartview/", env!("CARGO_PKG_VERSION"));

/// Data-access facade over the graph-query and catalog services.
///
/// Holds only endpoint configuration and a shared HTTP client; cheap to
/// clone and safe to use from concurrent tasks. Concurrent operations carry
/// no completion-order guarantee.
#[derive(Debug, Clone)]
pub struct ChartDataService {
    lra: LraClient,
    catalog: CatalogClient,
}

impl ChartDataService {
    /// Build a service talking to the given endpoints, sharing one HTTP
    /// client between both transports.
    pub fn new(endpoints: &Endpoints) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            lra: LraClient::new(http_client.clone(), &endpoints.graph_base),
            catalog: CatalogClient::new(http_client, &endpoints.catalog_base),
        })
    }

    /// Chart listing published on `date` (ISO calendar date), in chart
    /// order.
    pub async fn chart(&self, date: &str) -> Result<Vec<ChartPosition>> {
        let rows = self
            .lra
            .select_rows(&queries::chart_query(date))
            .await
            .map_err(normalize)?;
        let chart = mapping::chart_positions(&rows)?;

        tracing::info!(date = %date, entries = chart.len(), "Retrieved chart");
        Ok(chart)
    }

    /// Full detail of one song.
    pub async fn song_detail(&self, id: &str) -> Result<Song> {
        let row = self
            .lra
            .select_row(&queries::song_detail_query(id))
            .await
            .map_err(normalize)?;
        let song = mapping::song_detail(id, &row)?;

        tracing::info!(id = %id, name = %song.name, "Retrieved song detail");
        Ok(song)
    }

    /// Historical chart ranks of a song, source order preserved.
    pub async fn song_rankings(&self, id: &str) -> Result<Vec<SongRank>> {
        let records = self.catalog.fetch_rankings(id).await.map_err(normalize)?;
        let rankings = mapping::song_rankings(&records)?;

        tracing::info!(id = %id, entries = rankings.len(), "Retrieved song rankings");
        Ok(rankings)
    }

    /// Related media of a song (at most four items).
    pub async fn song_media(&self, id: &str) -> Result<Vec<MediaItem>> {
        let records = self.catalog.fetch_media(id).await.map_err(normalize)?;
        let media = mapping::media_items(records);

        tracing::info!(id = %id, items = media.len(), "Retrieved song media");
        Ok(media)
    }
}
