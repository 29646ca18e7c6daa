//! Handlers for `/favorites` endpoints.
//!
//! Uniqueness and referential integrity live here, not in the schema.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/favorites` | Favorited colleges, joined, ordered by name |
//! | `POST`   | `/favorites` | Body: `{"college_id":1}`; 404 unknown college, 409 duplicate |
//! | `DELETE` | `/favorites/:college_id` | Idempotent; reports rows removed |

use std::sync::Arc;

use alma_core::{college::College, favorite::Favorite, store::DirectoryStore};
use axum::{
  Json,
  extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /favorites` — the favorited colleges themselves, not the favorite
/// rows.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<College>>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let colleges = store
    .list_favorites()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(colleges))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub college_id: Option<i64>,
}

/// `POST /favorites` — body: `{"college_id":1}`.
///
/// The existence and duplicate checks run in order and short-circuit; the
/// duplicate check happens at call time on every request. The three store
/// round trips are not wrapped in a transaction.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<Json<Favorite>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Some(college_id) = body.college_id else {
    return Err(ApiError::BadRequest("College ID is required".into()));
  };

  store
    .get_college(college_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("College not found".into()))?;

  if store
    .favorite_for_college(college_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .is_some()
  {
    return Err(ApiError::Conflict("College already in favorites".into()));
  }

  let favorite = store
    .add_favorite(college_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(favorite))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
  pub message: String,
  pub changes: usize,
}

/// `DELETE /favorites/:college_id` — deleting an absent favorite is a
/// zero-changes success, not an error.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(college_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let changes = store
    .remove_favorite(college_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(DeleteResponse {
    message: "Removed from favorites".into(),
    changes,
  }))
}
