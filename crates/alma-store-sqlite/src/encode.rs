//! Encoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings, which keeps the
//! `created_at` ordering index chronological.

use alma_core::{college::College, review::Review};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Map a `colleges` row in SELECT column order
/// `(id, name, location, course, fee)`.
pub fn college_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<College> {
  Ok(College {
    id:       row.get(0)?,
    name:     row.get(1)?,
    location: row.get(2)?,
    course:   row.get(3)?,
    fee:      row.get(4)?,
  })
}

/// Raw values read directly from a `reviews` row.
pub struct RawReview {
  pub id:           i64,
  pub college_name: String,
  pub rating:       i64,
  pub comment:      String,
  pub created_at:   String,
}

impl RawReview {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      college_name: row.get(1)?,
      rating:       row.get(2)?,
      comment:      row.get(3)?,
      created_at:   row.get(4)?,
    })
  }

  pub fn into_review(self) -> Result<Review> {
    Ok(Review {
      id:           self.id,
      college_name: self.college_name,
      rating:       self.rating,
      comment:      self.comment,
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}
