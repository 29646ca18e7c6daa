//! [`SqliteStore`] — the SQLite implementation of [`DirectoryStore`].

use std::path::Path;

use alma_core::{
  college::College,
  favorite::Favorite,
  review::{NewReview, Review},
  store::{CollegeFilter, DirectoryStore, FilterOptions, SortOrder},
};
use chrono::Utc;
use rusqlite::{OptionalExtension as _, params_from_iter, types::Value};

use crate::{
  Error, Result,
  encode::{RawReview, college_from_row, encode_dt},
  schema::SCHEMA,
  seed::{SEED_COLLEGES, SEED_REVIEWS},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A college directory store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_owned();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert the initial college and review data if the colleges table is
  /// empty. A populated store is left untouched, so this runs on every
  /// startup. Returns `true` if data was inserted.
  pub async fn seed_if_empty(&self) -> Result<bool> {
    let now_str = encode_dt(Utc::now());

    let seeded = self
      .conn
      .call(move |conn| {
        let count: i64 =
          conn.query_row("SELECT COUNT(*) FROM colleges", [], |row| row.get(0))?;
        if count > 0 {
          return Ok(false);
        }

        let mut stmt = conn.prepare(
          "INSERT INTO colleges (name, location, course, fee)
           VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (name, location, course, fee) in SEED_COLLEGES {
          stmt.execute(rusqlite::params![name, location, course, fee])?;
        }

        let mut stmt = conn.prepare(
          "INSERT INTO reviews (college_name, rating, comment, created_at)
           VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (college_name, rating, comment) in SEED_REVIEWS {
          stmt.execute(rusqlite::params![college_name, rating, comment, now_str])?;
        }

        Ok(true)
      })
      .await?;

    Ok(seeded)
  }
}

// ─── DirectoryStore impl ─────────────────────────────────────────────────────

impl DirectoryStore for SqliteStore {
  type Error = Error;

  // ── Colleges ──────────────────────────────────────────────────────────────

  async fn list_colleges(&self, filter: &CollegeFilter) -> Result<Vec<College>> {
    // Clause text and bind parameter are pushed together, one per filter,
    // so their positional correspondence cannot drift.
    let mut sql = String::from(
      "SELECT id, name, location, course, fee FROM colleges WHERE 1=1",
    );
    let mut params: Vec<Value> = Vec::new();

    if let Some(location) = &filter.location {
      sql.push_str(" AND location = ?");
      params.push(Value::Text(location.clone()));
    }
    if let Some(course) = &filter.course {
      sql.push_str(" AND course = ?");
      params.push(Value::Text(course.clone()));
    }
    if let Some(min_fee) = filter.min_fee {
      sql.push_str(" AND fee >= ?");
      params.push(Value::Integer(min_fee));
    }
    if let Some(max_fee) = filter.max_fee {
      sql.push_str(" AND fee <= ?");
      params.push(Value::Integer(max_fee));
    }
    if let Some(search) = &filter.search {
      sql.push_str(" AND name LIKE ?");
      params.push(Value::Text(format!("%{search}%")));
    }

    sql.push_str(match filter.sort {
      SortOrder::FeeLow => " ORDER BY fee ASC",
      SortOrder::FeeHigh => " ORDER BY fee DESC",
      SortOrder::NameAsc => " ORDER BY name ASC",
    });

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(params_from_iter(params), college_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn get_college(&self, id: i64) -> Result<Option<College>> {
    let college = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, location, course, fee FROM colleges WHERE id = ?1",
              rusqlite::params![id],
              college_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(college)
  }

  async fn filter_options(&self) -> Result<FilterOptions> {
    let options = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT DISTINCT location FROM colleges ORDER BY location")?;
        let locations = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;

        let mut stmt =
          conn.prepare("SELECT DISTINCT course FROM colleges ORDER BY course")?;
        let courses = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(FilterOptions { locations, courses })
      })
      .await?;
    Ok(options)
  }

  // ── Reviews ───────────────────────────────────────────────────────────────

  async fn list_reviews(&self) -> Result<Vec<Review>> {
    let raws: Vec<RawReview> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, college_name, rating, comment, created_at
           FROM reviews ORDER BY created_at DESC",
        )?;
        let rows = stmt
          .query_map([], RawReview::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReview::into_review).collect()
  }

  async fn get_review(&self, id: i64) -> Result<Option<Review>> {
    let raw: Option<RawReview> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, college_name, rating, comment, created_at
               FROM reviews WHERE id = ?1",
              rusqlite::params![id],
              RawReview::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawReview::into_review).transpose()
  }

  async fn add_review(&self, input: NewReview) -> Result<Review> {
    let created_at = Utc::now();
    let created_at_str = encode_dt(created_at);
    let college_name = input.college_name.clone();
    let rating = input.rating;
    let comment = input.comment.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO reviews (college_name, rating, comment, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![college_name, rating, comment, created_at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Review {
      id,
      college_name: input.college_name,
      rating,
      comment: input.comment,
      created_at,
    })
  }

  async fn delete_review(&self, id: i64) -> Result<usize> {
    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM reviews WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(changes)
  }

  // ── Favorites ─────────────────────────────────────────────────────────────

  async fn list_favorites(&self) -> Result<Vec<College>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT c.id, c.name, c.location, c.course, c.fee
           FROM colleges c
           INNER JOIN favorites f ON c.id = f.college_id
           ORDER BY c.name",
        )?;
        let rows = stmt
          .query_map([], college_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn favorite_for_college(&self, college_id: i64) -> Result<Option<Favorite>> {
    let favorite = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, college_id FROM favorites WHERE college_id = ?1",
              rusqlite::params![college_id],
              |row| {
                Ok(Favorite {
                  id:         row.get(0)?,
                  college_id: row.get(1)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;
    Ok(favorite)
  }

  async fn add_favorite(&self, college_id: i64) -> Result<Favorite> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO favorites (college_id) VALUES (?1)",
          rusqlite::params![college_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Favorite { id, college_id })
  }

  async fn remove_favorite(&self, college_id: i64) -> Result<usize> {
    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM favorites WHERE college_id = ?1",
          rusqlite::params![college_id],
        )?)
      })
      .await?;
    Ok(changes)
  }
}
