//! First-startup seed data.
//!
//! Inserted only when the colleges table is empty, so an existing data file
//! is never touched. See [`crate::SqliteStore::seed_if_empty`].

/// `(name, location, course, fee)`
pub(crate) const SEED_COLLEGES: &[(&str, &str, &str, i64)] = &[
  ("ABC Engineering College", "Hyderabad", "Computer Science", 120_000),
  ("XYZ Institute of Technology", "Bangalore", "Electronics", 100_000),
  ("Sunrise Business School", "Chennai", "MBA", 150_000),
  ("Greenfield Medical College", "Hyderabad", "MBBS", 250_000),
  ("Tech University", "Bangalore", "Computer Science", 180_000),
  ("City Engineering College", "Chennai", "Electronics", 90_000),
  ("National Law School", "Bangalore", "Law", 200_000),
  ("Arts and Science College", "Chennai", "BSc Physics", 80_000),
];

/// `(college_name, rating, comment)`
pub(crate) const SEED_REVIEWS: &[(&str, i64, &str)] = &[
  ("ABC Engineering College", 5, "Excellent faculty and infrastructure!"),
  ("XYZ Institute of Technology", 4, "Good placements and campus life."),
  ("Sunrise Business School", 5, "Outstanding management program."),
];
