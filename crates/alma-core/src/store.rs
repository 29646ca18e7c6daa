//! The `DirectoryStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `alma-store-sqlite`).
//! Higher layers (`alma-api`, `alma-cli`) depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::{
  college::College,
  favorite::Favorite,
  review::{NewReview, Review},
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Sort order for [`DirectoryStore::list_colleges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
  /// Ascending by fee (`fee_low`).
  FeeLow,
  /// Descending by fee (`fee_high`).
  FeeHigh,
  /// Ascending by name (the default).
  #[default]
  NameAsc,
}

impl SortOrder {
  /// Map the wire value to a sort order. Anything but the two fee sorts,
  /// including absence, is the name sort.
  pub fn from_param(s: Option<&str>) -> Self {
    match s {
      Some("fee_low") => SortOrder::FeeLow,
      Some("fee_high") => SortOrder::FeeHigh,
      _ => SortOrder::NameAsc,
    }
  }
}

/// Parameters for [`DirectoryStore::list_colleges`].
///
/// `None` means the filter is not applied. All supplied filters combine
/// conjunctively. Ties under a sort order are left in storage order.
#[derive(Debug, Clone, Default)]
pub struct CollegeFilter {
  pub location: Option<String>,
  pub course:   Option<String>,
  pub min_fee:  Option<i64>,
  pub max_fee:  Option<i64>,
  /// Substring match against the college name.
  pub search:   Option<String>,
  pub sort:     SortOrder,
}

/// Distinct filter values for the listing UI.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct FilterOptions {
  pub locations: Vec<String>,
  pub courses:   Vec<String>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a college directory backend.
///
/// Colleges are read-only after seeding; reviews and favorites are created
/// and deleted, never updated.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DirectoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Colleges ──────────────────────────────────────────────────────────

  /// List colleges matching `filter`, in its sort order.
  ///
  /// An empty result is `Ok(vec![])`, never an error.
  fn list_colleges<'a>(
    &'a self,
    filter: &'a CollegeFilter,
  ) -> impl Future<Output = Result<Vec<College>, Self::Error>> + Send + 'a;

  /// Retrieve a college by id. Returns `None` if not found.
  fn get_college(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<College>, Self::Error>> + Send + '_;

  /// Distinct location and course values, each alphabetically ordered.
  fn filter_options(
    &self,
  ) -> impl Future<Output = Result<FilterOptions, Self::Error>> + Send + '_;

  // ── Reviews ───────────────────────────────────────────────────────────

  /// All reviews, newest first (`created_at` descending).
  fn list_reviews(
    &self,
  ) -> impl Future<Output = Result<Vec<Review>, Self::Error>> + Send + '_;

  /// Retrieve a review by id. Returns `None` if not found.
  fn get_review(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Review>, Self::Error>> + Send + '_;

  /// Persist a validated review and return the stored [`Review`]. The
  /// `created_at` timestamp is set by the store.
  fn add_review(
    &self,
    input: NewReview,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// Delete a review by id, returning the number of rows removed.
  fn delete_review(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Favorites ─────────────────────────────────────────────────────────

  /// Favorited colleges, joined against the college set and ordered by
  /// name.
  fn list_favorites(
    &self,
  ) -> impl Future<Output = Result<Vec<College>, Self::Error>> + Send + '_;

  /// The favorite row for `college_id`, if one exists.
  fn favorite_for_college(
    &self,
    college_id: i64,
  ) -> impl Future<Output = Result<Option<Favorite>, Self::Error>> + Send + '_;

  /// Insert a favorite row for `college_id`.
  ///
  /// Existence and uniqueness checks are the caller's responsibility; see
  /// the add sequence in `alma-api`.
  fn add_favorite(
    &self,
    college_id: i64,
  ) -> impl Future<Output = Result<Favorite, Self::Error>> + Send + '_;

  /// Delete the favorite for `college_id`, returning the number of rows
  /// removed. Zero is a valid outcome.
  fn remove_favorite(
    &self,
    college_id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
