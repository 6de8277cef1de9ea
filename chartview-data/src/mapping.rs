//! Raw payload to entity projection
//!
//! Mapping is total over its input: one entity per row or record, order
//! preserved, no filtering and no deduplication. A row that misses a
//! contract key, or binds it to an unusable value, fails the whole
//! operation with an error naming the key.

use chartview_common::models::{ChartPosition, MediaItem, Song, SongRank};
use chartview_common::{Error, Result};
use chrono::NaiveDate;
use serde_json::Value;

use crate::services::{Binding, MediaRecord, RankRecord};

/// Project chart rows into [`ChartPosition`]s, keeping table order.
///
/// The table arrives pre-ordered by position; no re-sort happens here.
pub fn chart_positions(rows: &[Binding]) -> Result<Vec<ChartPosition>> {
    rows.iter()
        .map(|row| {
            Ok(ChartPosition {
                position: integer_field(row, "?position")?,
                song_id: text_field(row, "?id")?,
                song_name: text_field(row, "?name")?,
                artist_name: text_field(row, "?name1")?,
            })
        })
        .collect()
}

/// Project the single detail row into a [`Song`].
///
/// `id` is the identifier the lookup was made with; the query filters on it
/// rather than selecting it back.
pub fn song_detail(id: &str, row: &Binding) -> Result<Song> {
    Ok(Song {
        id: id.to_string(),
        name: text_field(row, "?name")?,
        artist_name: text_field(row, "?artistName")?,
        album_name: text_field(row, "?albumName")?,
        album_release_date: text_field(row, "?albumRelease")?,
        duration_seconds: integer_field(row, "?duration")?,
        stream_url: text_field(row, "?url")?,
        album_cover_url: text_field(row, "?albumCoverImage")?,
    })
}

/// Project rank records into [`SongRank`]s, source order preserved.
pub fn song_rankings(records: &[RankRecord]) -> Result<Vec<SongRank>> {
    records
        .iter()
        .map(|record| {
            let date = NaiveDate::parse_from_str(&record.end_date, "%Y-%m-%d").map_err(|_| {
                Error::new(format!("Unreadable rank date: {}", record.end_date))
            })?;
            Ok(SongRank {
                date,
                rank: record.rank,
            })
        })
        .collect()
}

/// Project media records into [`MediaItem`]s.
pub fn media_items(records: Vec<MediaRecord>) -> Vec<MediaItem> {
    records
        .into_iter()
        .map(|record| MediaItem {
            url: record.url,
            caption: record.caption,
            thumbnail_url: record.thumbnail,
        })
        .collect()
}

/// A bound value that must be text. Numeric bindings are accepted, since
/// the graph service does not distinguish literal types consistently.
fn text_field(row: &Binding, key: &str) -> Result<String> {
    let value = field(row, key)?;
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(unusable(key, value)),
    }
}

/// A bound value that must be a non-negative integer. Accepts both JSON
/// numbers and numeric strings ("3" and 3 bind interchangeably upstream).
fn integer_field(row: &Binding, key: &str) -> Result<u32> {
    let value = field(row, key)?;
    let parsed = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| unusable(key, value))
}

fn field<'a>(row: &'a Binding, key: &str) -> Result<&'a Value> {
    row.get(key)
        .ok_or_else(|| Error::new(format!("Query result is missing {}", key)))
}

fn unusable(key: &str, value: &Value) -> Error {
    Error::new(format!("Query result has an unusable {} value: {}", key, value))
}
