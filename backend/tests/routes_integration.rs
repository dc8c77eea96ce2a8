//! HTTP-level tests driving the axum router directly.

#![cfg(all(feature = "http-server", feature = "local-repo"))]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use gscores_rust::db::repositories::LocalRepository;
use gscores_rust::db::repository::ScoreRepository;
use gscores_rust::http::{create_router, AppState};
use gscores_rust::models::StudentRecord;

fn fixture_state() -> AppState {
    let mut first = StudentRecord::new("01000001");
    first.toan = Some(8.4);
    first.vat_li = Some(9.0);
    first.hoa_hoc = Some(7.6);
    first.ngu_van = Some(6.5);

    let mut second = StudentRecord::new("01000002");
    second.toan = Some(3.0);

    let repo = LocalRepository::with_students(vec![first, second]).unwrap();
    AppState::new(Arc::new(repo) as Arc<dyn ScoreRepository>)
}

async fn get_json(
    state: AppState,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let app = create_router(state);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(fixture_state(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["database"], "connected");
}

#[tokio::test]
async fn test_check_score_success_envelope() {
    let (status, json) = get_json(fixture_state(), "/api/scores/check/1000001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["sbd"], "01000001");
    assert_eq!(json["data"]["scores"]["toan"], 8.4);
    assert_eq!(json["data"]["groupA"]["total"], 25.0);
}

#[tokio::test]
async fn test_check_score_not_found() {
    let (status, json) = get_json(fixture_state(), "/api/scores/check/99999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("99999999"));
}

#[tokio::test]
async fn test_check_score_non_numeric_is_bad_request() {
    let (status, json) = get_json(fixture_state(), "/api/scores/check/12ab").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_report_invalid_subject_is_bad_request() {
    let (status, json) = get_json(fixture_state(), "/api/scores/report/foo").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Invalid subject"));
    assert!(message.contains("toan"));
}

#[tokio::test]
async fn test_report_success_shape() {
    let (status, json) = get_json(fixture_state(), "/api/scores/report/toan").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["subject"], "Toán");
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["levels"]["excellent"]["count"], 1);
    assert_eq!(json["data"]["levels"]["poor"]["count"], 1);
    assert_eq!(json["data"]["levels"]["excellent"]["percentage"], "50.00%");
}

#[tokio::test]
async fn test_statistics_not_found_for_unsat_subject() {
    let (status, json) = get_json(fixture_state(), "/api/scores/statistics/gdcd").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Statistics not found");
}

#[tokio::test]
async fn test_statistics_success_shape() {
    let (status, json) = get_json(fixture_state(), "/api/scores/statistics/toan").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["highest"], 8.4);
    assert_eq!(json["data"]["lowest"], 3.0);
    // Median of [3.0, 8.4] = 5.7
    assert_eq!(json["data"]["median"], 5.7);
    assert_eq!(json["data"]["distribution"]["excellent"], 1);
}

#[tokio::test]
async fn test_top10_endpoint() {
    let (status, json) = get_json(fixture_state(), "/api/scores/top10/group-a").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["sbd"], "01000001");
}
