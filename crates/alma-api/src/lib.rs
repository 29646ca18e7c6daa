//! JSON REST API for the alma college directory.
//!
//! Exposes an axum [`Router`] backed by any
//! [`alma_core::store::DirectoryStore`]. CORS, tracing, and transport
//! concerns are the server binary's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", alma_api::api_router(store.clone()))
//! ```

pub mod colleges;
pub mod error;
pub mod favorites;
pub mod health;
pub mod reviews;

use std::sync::Arc;

use alma_core::store::DirectoryStore;
use axum::{
  Router,
  routing::{delete, get},
};

pub use error::ApiError;

#[cfg(test)]
mod tests;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Colleges (read-only; rows exist only via seeding)
    .route("/colleges", get(colleges::list::<S>))
    .route("/colleges/filters", get(colleges::filter_options::<S>))
    // Reviews
    .route("/reviews", get(reviews::list::<S>).post(reviews::create::<S>))
    .route(
      "/reviews/{id}",
      get(reviews::get_one::<S>).delete(reviews::delete_one::<S>),
    )
    // Favorites
    .route(
      "/favorites",
      get(favorites::list::<S>).post(favorites::create::<S>),
    )
    .route("/favorites/{college_id}", delete(favorites::delete_one::<S>))
    // Health
    .route("/health", get(health::handler))
    .with_state(store)
}
