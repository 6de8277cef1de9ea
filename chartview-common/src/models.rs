//! Domain entities produced by the data-access layer
//!
//! Plain value records: constructed once by the response mapping step and
//! owned by the caller that receives them. Sequence orderings are whatever
//! the upstream returned; nothing here re-sorts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a chart listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPosition {
    /// Rank within the chart (1 = top)
    pub position: u32,
    /// Track identifier, usable with the detail/ranks/media lookups
    pub song_id: String,
    /// Track name
    pub song_name: String,
    /// Artist name
    pub artist_name: String,
}

/// Full detail for a single track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub album_name: String,
    /// Release date literal as stored in the graph service
    pub album_release_date: String,
    pub duration_seconds: u32,
    /// Playable audio URL
    pub stream_url: String,
    pub album_cover_url: String,
}

/// One historical chart appearance of a song.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SongRank {
    pub date: NaiveDate,
    pub rank: u32,
}

/// One related-media asset of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub caption: String,
    pub thumbnail_url: String,
}
