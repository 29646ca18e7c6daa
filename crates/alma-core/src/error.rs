//! Error types for `alma-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A required text field was missing or empty after trimming.
  #[error("All fields are required")]
  MissingField,

  /// Rating outside the accepted 1..=5 range.
  #[error("Rating must be between 1 and 5")]
  RatingOutOfRange(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
