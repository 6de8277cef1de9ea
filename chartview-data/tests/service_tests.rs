//! End-to-end tests driving ChartDataService against stub backends
//!
//! Each test binds a throwaway axum server on an ephemeral port, points the
//! real service at it and asserts on the mapped entities.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::json;

use chartview_common::config::Endpoints;
use chartview_data::error::GENERIC_ERROR_MESSAGE;
use chartview_data::ChartDataService;

/// Serve `app` on an ephemeral port, returning its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn service(graph_base: &str, catalog_base: &str) -> ChartDataService {
    ChartDataService::new(&Endpoints {
        graph_base: graph_base.to_string(),
        catalog_base: catalog_base.to_string(),
    })
    .unwrap()
}

/// Base URL for the backend a test never touches.
const UNUSED: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn chart_returns_rows_in_table_order() {
    let seen_query: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let recorded = seen_query.clone();

    let app = Router::new().route(
        "/api/lra/query",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            async move {
                *recorded.lock().unwrap() = params.get("q").cloned();
                Json(json!({
                    "table": { "rows": [
                        { "?position": "1", "?id": "s1", "?name": "One",   "?name1": "Artist A" },
                        { "?position": "2", "?id": "s2", "?name": "Two",   "?name1": "Artist B" },
                        { "?position": "3", "?id": "s3", "?name": "Three", "?name1": "Artist C" }
                    ] }
                }))
            }
        }),
    );

    let graph_base = serve(app).await;
    let service = service(&graph_base, UNUSED);

    let chart = service.chart("2021-06-05").await.unwrap();

    assert_eq!(chart.len(), 3);
    assert_eq!(
        chart.iter().map(|c| c.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(chart[0].song_id, "s1");
    assert_eq!(chart[2].song_name, "Three");
    assert_eq!(chart[2].artist_name, "Artist C");

    // The stub received the rendered query with the date embedded.
    let query = seen_query.lock().unwrap().clone().expect("query received");
    assert!(query.contains("schema:datePublished \"2021-06-05\""));
}

#[tokio::test]
async fn song_detail_populates_every_field() {
    let app = Router::new().route(
        "/api/lra/query",
        get(|| async {
            Json(json!({
                "table": { "row": {
                    "?duration": "201",
                    "?url": "http://stream/abc123",
                    "?name": "Levitating",
                    "?artistName": "Dua Lipa",
                    "?albumCoverImage": "http://img/fn.jpg",
                    "?albumRelease": "2020-03-27",
                    "?albumName": "Future Nostalgia"
                } }
            }))
        }),
    );

    let graph_base = serve(app).await;
    let service = service(&graph_base, UNUSED);

    let song = service.song_detail("abc123").await.unwrap();

    assert_eq!(song.id, "abc123");
    assert_eq!(song.name, "Levitating");
    assert_eq!(song.artist_name, "Dua Lipa");
    assert_eq!(song.album_name, "Future Nostalgia");
    assert_eq!(song.album_release_date, "2020-03-27");
    assert_eq!(song.duration_seconds, 201);
    assert_eq!(song.stream_url, "http://stream/abc123");
    assert_eq!(song.album_cover_url, "http://img/fn.jpg");
}

#[tokio::test]
async fn song_rankings_preserve_source_order() {
    let app = Router::new().route(
        "/api/songs/:id/ranks",
        get(|Path(id): Path<String>| async move {
            assert_eq!(id, "abc123");
            Json(json!({
                "data": [
                    { "endDate": "2021-06-05", "rank": 9 },
                    { "endDate": "2021-05-29", "rank": 4 },
                    { "endDate": "2021-05-22", "rank": 11 }
                ]
            }))
        }),
    );

    let catalog_base = serve(app).await;
    let service = service(UNUSED, &catalog_base);

    let rankings = service.song_rankings("abc123").await.unwrap();

    assert_eq!(rankings.len(), 3);
    // Source order kept, no re-sort to ascending.
    assert_eq!(
        rankings[0].date,
        NaiveDate::from_ymd_opt(2021, 6, 5).unwrap()
    );
    assert_eq!(rankings[0].rank, 9);
    assert_eq!(rankings[2].rank, 11);
}

#[tokio::test]
async fn song_media_requests_at_most_four_items() {
    let seen_count: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let recorded = seen_count.clone();

    let app = Router::new().route(
        "/api/songs/:id/media",
        get(
            move |Query(params): Query<HashMap<String, String>>, Path(_id): Path<String>| {
                let recorded = recorded.clone();
                async move {
                    *recorded.lock().unwrap() = params.get("n").cloned();
                    Json(json!({
                        "data": [
                            { "url": "http://m/1", "caption": "Live",      "thumbnail": "http://t/1" },
                            { "url": "http://m/2", "caption": "Interview", "thumbnail": "http://t/2" },
                            { "url": "http://m/3", "caption": "Cover",     "thumbnail": "http://t/3" }
                        ]
                    }))
                }
            },
        ),
    );

    let catalog_base = serve(app).await;
    let service = service(UNUSED, &catalog_base);

    let media = service.song_media("abc123").await.unwrap();

    assert_eq!(media.len(), 3);
    assert_eq!(media[0].url, "http://m/1");
    assert_eq!(media[1].caption, "Interview");
    assert_eq!(media[2].thumbnail_url, "http://t/3");

    // The service never asks the source for more than four items.
    let count = seen_count.lock().unwrap().clone().expect("n received");
    assert_eq!(count, "4");
}

#[tokio::test]
async fn upstream_error_details_become_the_message() {
    let app = Router::new().route(
        "/api/lra/query",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "errors": [ { "details": "Chart service is down for maintenance" } ] })),
            )
        }),
    );

    let graph_base = serve(app).await;
    let service = service(&graph_base, UNUSED);

    let error = service.chart("2021-06-05").await.unwrap_err();
    assert_eq!(error.message(), "Chart service is down for maintenance");
}

#[tokio::test]
async fn failure_without_usable_body_falls_back_to_generic_message() {
    let app = Router::new().route(
        "/api/songs/:id/ranks",
        get(|| async { (StatusCode::BAD_GATEWAY, String::new()) }),
    );

    let catalog_base = serve(app).await;
    let service = service(UNUSED, &catalog_base);

    let error = service.song_rankings("abc123").await.unwrap_err();
    assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn detail_lookup_without_row_binding_is_an_error() {
    let app = Router::new().route(
        "/api/lra/query",
        get(|| async { Json(json!({ "table": {} })) }),
    );

    let graph_base = serve(app).await;
    let service = service(&graph_base, UNUSED);

    let error = service.song_detail("missing").await.unwrap_err();
    assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn unreachable_backend_falls_back_to_generic_message() {
    // Nothing listens on the unused address; the request fails at connect.
    let service = service(UNUSED, UNUSED);

    let error = service.chart("2021-06-05").await.unwrap_err();
    assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
}
