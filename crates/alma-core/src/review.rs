//! Review — free-text feedback attached to a college by name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A stored review.
///
/// `college_name` is plain text, not a reference into the college set:
/// reviews for unknown or misspelled colleges are allowed and surface
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
  pub id:           i64,
  pub college_name: String,
  /// 1..=5 inclusive.
  pub rating:       i64,
  pub comment:      String,
  /// Assigned by the store at insert; the sole sort key for listings.
  pub created_at:   DateTime<Utc>,
}

/// Validated input for a new review. `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReview {
  pub college_name: String,
  pub rating:       i64,
  pub comment:      String,
}

impl NewReview {
  /// Trim the text fields and check the rating range.
  ///
  /// Runs before any store call; the store never sees invalid input.
  pub fn validated(
    college_name: &str,
    rating: i64,
    comment: &str,
  ) -> Result<Self> {
    let college_name = college_name.trim();
    let comment = comment.trim();

    if college_name.is_empty() || comment.is_empty() {
      return Err(Error::MissingField);
    }
    if !(1..=5).contains(&rating) {
      return Err(Error::RatingOutOfRange(rating));
    }

    Ok(Self {
      college_name: college_name.to_owned(),
      rating,
      comment: comment.to_owned(),
    })
  }
}
