//! Handlers for `/colleges` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/colleges` | Optional `location`, `course`, `minFee`, `maxFee`, `search`, `sort` |
//! | `GET`  | `/colleges/filters` | Distinct locations and courses |

use std::sync::Arc;

use alma_core::{
  college::College,
  store::{CollegeFilter, DirectoryStore, FilterOptions, SortOrder},
};
use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// Raw query parameters for `GET /colleges`.
///
/// Everything arrives as text; [`parse_filter`] turns it into a typed
/// [`CollegeFilter`], rejecting malformed numeric input instead of passing
/// it through to the store.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub location: Option<String>,
  pub course:   Option<String>,
  #[serde(rename = "minFee")]
  pub min_fee:  Option<String>,
  #[serde(rename = "maxFee")]
  pub max_fee:  Option<String>,
  pub search:   Option<String>,
  pub sort:     Option<String>,
}

/// Empty values and the `"all"` sentinel mean "filter not supplied".
fn text_filter(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty() && v != "all")
}

fn fee_filter(value: Option<String>, name: &str) -> Result<Option<i64>, ApiError> {
  match value.filter(|v| !v.is_empty()) {
    None => Ok(None),
    Some(raw) => raw
      .parse::<i64>()
      .map(Some)
      .map_err(|_| ApiError::BadRequest(format!("{name} must be an integer"))),
  }
}

fn parse_filter(params: ListParams) -> Result<CollegeFilter, ApiError> {
  Ok(CollegeFilter {
    location: text_filter(params.location),
    course:   text_filter(params.course),
    min_fee:  fee_filter(params.min_fee, "minFee")?,
    max_fee:  fee_filter(params.max_fee, "maxFee")?,
    search:   params.search.filter(|s| !s.is_empty()),
    sort:     SortOrder::from_param(params.sort.as_deref()),
  })
}

/// `GET /colleges[?location=...][&course=...][&minFee=...][&maxFee=...][&search=...][&sort=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<College>>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let filter = parse_filter(params)?;
  let colleges = store
    .list_colleges(&filter)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(colleges))
}

// ─── Filter options ───────────────────────────────────────────────────────────

/// `GET /colleges/filters`
pub async fn filter_options<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<FilterOptions>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let options = store
    .filter_options()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(options))
}
