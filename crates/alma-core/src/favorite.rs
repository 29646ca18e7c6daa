//! Favorite — a bookmark referencing one college by id.

use serde::{Deserialize, Serialize};

/// A stored favorite.
///
/// `college_id` is checked against the college set by the API layer at
/// creation time; the schema itself carries no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
  pub id:         i64,
  pub college_id: i64,
}
