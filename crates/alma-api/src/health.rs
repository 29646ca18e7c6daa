//! Handler for `GET /health`.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
  pub message:   String,
  pub timestamp: String,
  pub status:    String,
}

/// `GET /health` — liveness probe.
pub async fn handler() -> Json<Health> {
  Json(Health {
    message:   "College directory API is running".into(),
    timestamp: Utc::now().to_rfc3339(),
    status:    "healthy".into(),
  })
}
