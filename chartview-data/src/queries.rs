//! Graph-query construction
//!
//! Both queries are fixed templates with a single substitution point. The
//! parameter is embedded verbatim; making the rendered text URL-safe is the
//! transport's job, done once for every query alike.

/// Query for the chart published on `date`: position, track id, track name
/// and artist name for every entry, ordered by the service.
///
/// `date` is not validated here. A malformed date is passed through and
/// simply matches no chart.
pub fn chart_query(date: &str) -> String {
    format!(
        r#"SELECT DISTINCT ?position ?name ?id ?name1
WHERE {{
  ?Chart a schema:MusicPlaylist;
    schema:datePublished "{}";
    schema:track ?ListItem0.
  ?ListItem0 a schema:ListItem;
    schema:item ?Song;
    schema:position ?position.
  ?Song a schema:MusicRecording;
    schema:name ?name;
    schema:byArtist ?Artist;
    billboard:id ?id.
  ?Artist a schema:MusicGroup;
    schema:name ?name1
}}"#,
        date
    )
}

/// Query for the full detail of the single track with the given id.
///
/// The declared variables are exactly the keys the song-detail mapping
/// reads; the id itself is a filter, not a result variable.
pub fn song_detail_query(id: &str) -> String {
    format!(
        r#"SELECT DISTINCT ?duration ?url ?name ?artistName ?albumCoverImage ?albumRelease ?albumName
WHERE {{
  ?Song a schema:MusicRecording;
    billboard:id "{}";
    schema:duration ?duration;
    schema:url ?url;
    schema:name ?name;
    schema:byArtist ?artist;
    schema:inAlbum ?album.
  ?artist a schema:MusicGroup;
    schema:name ?artistName.
  ?album a schema:MusicAlbum;
    schema:image ?albumCoverImage;
    schema:albumRelease ?albumRelease;
    schema:name ?albumName
}}"#,
        id
    )
}
