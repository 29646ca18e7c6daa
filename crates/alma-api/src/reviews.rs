//! Handlers for `/reviews` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/reviews` | All reviews, newest first |
//! | `POST`   | `/reviews` | Body: `{"college_name","rating","comment"}` |
//! | `GET`    | `/reviews/:id` | 404 if not found |
//! | `DELETE` | `/reviews/:id` | Existence check first, then delete |

use std::sync::Arc;

use alma_core::{
  review::{NewReview, Review},
  store::DirectoryStore,
};
use axum::{
  Json,
  extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /reviews` — always the full set, `created_at` descending.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Review>>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let reviews = store
    .list_reviews()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(reviews))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /reviews`. All fields are required; they are
/// optional here so a missing field yields the validation error rather than
/// a deserialisation failure.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub college_name: Option<String>,
  pub rating:       Option<i64>,
  pub comment:      Option<String>,
}

/// `POST /reviews` — validates before any store call; echoes the trimmed
/// inputs with the assigned id and timestamp.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<Json<Review>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (Some(college_name), Some(rating), Some(comment)) =
    (body.college_name, body.rating, body.comment)
  else {
    return Err(ApiError::BadRequest("All fields are required".into()));
  };

  let input = NewReview::validated(&college_name, rating, &comment)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let review = store
    .add_review(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(review))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /reviews/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Review>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let review = store
    .get_review(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Review not found".into()))?;
  Ok(Json(review))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
  pub success:    bool,
  pub message:    String,
  #[serde(rename = "deletedId")]
  pub deleted_id: i64,
  pub changes:    usize,
}

/// `DELETE /reviews/:id` — 404 if the review does not exist.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .get_review(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Review not found".into()))?;

  let changes = store
    .delete_review(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(DeleteResponse {
    success:    true,
    message:    "Review deleted successfully".into(),
    deleted_id: id,
    changes,
  }))
}
