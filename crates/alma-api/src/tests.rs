//! Integration tests for the API router against an in-memory store.

use std::sync::Arc;

use alma_store_sqlite::SqliteStore;
use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt as _;

async fn router() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  store.seed_if_empty().await.unwrap();
  crate::api_router(Arc::new(store))
}

async fn into_json(resp: axum::response::Response) -> (StatusCode, Value) {
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
  let resp = app
    .clone()
    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
    .await
    .unwrap();
  into_json(resp).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
  let resp = app
    .clone()
    .oneshot(
      Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap(),
    )
    .await
    .unwrap();
  into_json(resp).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
  let resp = app
    .clone()
    .oneshot(
      Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  into_json(resp).await
}

// ─── Health ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_healthy() {
  let app = router().await;

  let (status, body) = get(&app, "/health").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "healthy");
  let ts = body["timestamp"].as_str().unwrap();
  assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

// ─── Colleges ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn colleges_default_sorted_by_name() {
  let app = router().await;

  let (status, body) = get(&app, "/colleges").await;
  assert_eq!(status, StatusCode::OK);
  let names: Vec<&str> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c["name"].as_str().unwrap())
    .collect();
  assert_eq!(names.len(), 8);
  let mut sorted = names.clone();
  sorted.sort();
  assert_eq!(names, sorted);
}

#[tokio::test]
async fn colleges_all_sentinel_means_unfiltered() {
  let app = router().await;

  let (status, body) = get(&app, "/colleges?location=all&course=all").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn colleges_location_fee_high_scenario() {
  let app = router().await;

  let (status, body) = get(&app, "/colleges?location=Hyderabad&sort=fee_high").await;
  assert_eq!(status, StatusCode::OK);
  let names: Vec<&str> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c["name"].as_str().unwrap())
    .collect();
  assert_eq!(names, ["Greenfield Medical College", "ABC Engineering College"]);
}

#[tokio::test]
async fn colleges_fee_range_conjunction() {
  let app = router().await;

  let (status, body) = get(&app, "/colleges?minFee=100000&maxFee=150000").await;
  assert_eq!(status, StatusCode::OK);
  let fees: Vec<i64> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c["fee"].as_i64().unwrap())
    .collect();
  assert_eq!(fees.len(), 3);
  assert!(fees.iter().all(|f| (100_000..=150_000).contains(f)));
}

#[tokio::test]
async fn colleges_search_matches_substring() {
  let app = router().await;

  let (status, body) = get(&app, "/colleges?search=Engineering").await;
  assert_eq!(status, StatusCode::OK);
  let names: Vec<&str> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c["name"].as_str().unwrap())
    .collect();
  assert_eq!(names.len(), 2);
  assert!(names.iter().all(|n| n.contains("Engineering")));
}

#[tokio::test]
async fn colleges_malformed_min_fee_rejected() {
  let app = router().await;

  let (status, body) = get(&app, "/colleges?minFee=cheap").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("minFee"));
}

#[tokio::test]
async fn filter_options_shape() {
  let app = router().await;

  let (status, body) = get(&app, "/colleges/filters").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body["locations"],
    json!(["Bangalore", "Chennai", "Hyderabad"])
  );
  assert_eq!(body["courses"].as_array().unwrap().len(), 6);
}

// ─── Reviews ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn review_create_echoes_and_lists_newest_first() {
  let app = router().await;

  let (status, body) = post(
    &app,
    "/reviews",
    json!({
      "college_name": "Tech University",
      "rating": 3,
      "comment": "ok",
    }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["id"].as_i64().unwrap() > 0);
  assert_eq!(body["college_name"], "Tech University");
  assert_eq!(body["rating"], 3);
  assert_eq!(body["comment"], "ok");
  let ts = body["created_at"].as_str().unwrap();
  assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());

  let (status, listed) = get(&app, "/reviews").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(listed[0]["college_name"], "Tech University");
  assert_eq!(listed[0]["comment"], "ok");
}

#[tokio::test]
async fn review_inputs_are_trimmed() {
  let app = router().await;

  let (status, body) = post(
    &app,
    "/reviews",
    json!({
      "college_name": "  Tech University  ",
      "rating": 4,
      "comment": "  fine  ",
    }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["college_name"], "Tech University");
  assert_eq!(body["comment"], "fine");
}

#[tokio::test]
async fn review_rating_bounds() {
  let app = router().await;

  for rating in [0, 6] {
    let (status, body) = post(
      &app,
      "/reviews",
      json!({ "college_name": "X", "rating": rating, "comment": "y" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "rating {rating}");
    assert!(body["error"].is_string());
  }

  for rating in [1, 5] {
    let (status, body) = post(
      &app,
      "/reviews",
      json!({ "college_name": "X", "rating": rating, "comment": "y" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "rating {rating}");
    assert_eq!(body["rating"], rating);
  }
}

#[tokio::test]
async fn review_missing_fields_rejected() {
  let app = router().await;

  let (status, body) =
    post(&app, "/reviews", json!({ "college_name": "X" })).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "All fields are required");

  let (status, _) = post(
    &app,
    "/reviews",
    json!({ "college_name": "   ", "rating": 3, "comment": "y" }),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_delete_flow() {
  let app = router().await;

  let (_, created) = post(
    &app,
    "/reviews",
    json!({ "college_name": "X", "rating": 2, "comment": "gone soon" }),
  )
  .await;
  let id = created["id"].as_i64().unwrap();

  let (status, body) = delete(&app, &format!("/reviews/{id}")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["success"], true);
  assert_eq!(body["deletedId"], id);
  assert_eq!(body["changes"], 1);

  let (status, body) = delete(&app, &format!("/reviews/{id}")).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Review not found");
}

#[tokio::test]
async fn review_get_one() {
  let app = router().await;

  let (status, body) = get(&app, "/reviews/9999").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Review not found");

  let (_, created) = post(
    &app,
    "/reviews",
    json!({ "college_name": "X", "rating": 5, "comment": "great" }),
  )
  .await;
  let id = created["id"].as_i64().unwrap();

  let (status, body) = get(&app, &format!("/reviews/{id}")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["comment"], "great");
}

// ─── Favorites ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn favorite_unknown_college_creates_nothing() {
  let app = router().await;

  let (status, body) = post(&app, "/favorites", json!({ "college_id": 9999 })).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "College not found");

  let (_, listed) = get(&app, "/favorites").await;
  assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn favorite_duplicate_is_conflict() {
  let app = router().await;

  let (status, body) = post(&app, "/favorites", json!({ "college_id": 1 })).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["college_id"], 1);
  assert!(body["id"].as_i64().unwrap() > 0);

  let (status, body) = post(&app, "/favorites", json!({ "college_id": 1 })).await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body["error"], "College already in favorites");
}

#[tokio::test]
async fn favorite_missing_id_rejected() {
  let app = router().await;

  let (status, body) = post(&app, "/favorites", json!({})).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "College ID is required");
}

#[tokio::test]
async fn favorite_delete_is_idempotent() {
  let app = router().await;

  let (status, body) = delete(&app, "/favorites/1").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["changes"], 0);
  assert_eq!(body["message"], "Removed from favorites");

  post(&app, "/favorites", json!({ "college_id": 1 })).await;
  let (status, body) = delete(&app, "/favorites/1").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["changes"], 1);

  let (_, body) = delete(&app, "/favorites/1").await;
  assert_eq!(body["changes"], 0);
}

#[tokio::test]
async fn favorites_list_returns_joined_colleges() {
  let app = router().await;

  // 5 = Tech University, 1 = ABC Engineering College (seed order).
  post(&app, "/favorites", json!({ "college_id": 5 })).await;
  post(&app, "/favorites", json!({ "college_id": 1 })).await;

  let (status, body) = get(&app, "/favorites").await;
  assert_eq!(status, StatusCode::OK);
  let listed = body.as_array().unwrap();
  assert_eq!(listed.len(), 2);
  assert_eq!(listed[0]["name"], "ABC Engineering College");
  assert_eq!(listed[0]["location"], "Hyderabad");
  assert_eq!(listed[1]["name"], "Tech University");
  assert_eq!(listed[1]["fee"], 180_000);
}
