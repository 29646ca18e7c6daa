//! SQL schema for the alma SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS colleges (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    location TEXT NOT NULL,
    course   TEXT NOT NULL,
    fee      INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS reviews (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    college_name TEXT NOT NULL,    -- free text, not a reference into colleges
    rating       INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
    comment      TEXT NOT NULL,
    created_at   TEXT NOT NULL     -- RFC 3339 UTC; server-assigned
);

-- college_id is checked against colleges by the API layer at insert time;
-- the schema itself carries no constraint.
CREATE TABLE IF NOT EXISTS favorites (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    college_id INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS colleges_location_idx ON colleges(location);
CREATE INDEX IF NOT EXISTS colleges_course_idx   ON colleges(course);
CREATE INDEX IF NOT EXISTS reviews_created_idx   ON reviews(created_at);

PRAGMA user_version = 1;
";
