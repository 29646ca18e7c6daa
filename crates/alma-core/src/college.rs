//! College — the seeded, read-only directory entry.

use serde::{Deserialize, Serialize};

/// A college listing.
///
/// Rows are seeded once at first startup and never mutated afterwards; no
/// create, update, or delete endpoint exists for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
  pub id:       i64,
  pub name:     String,
  pub location: String,
  pub course:   String,
  /// Annual fee; non-negative.
  pub fee:      i64,
}
