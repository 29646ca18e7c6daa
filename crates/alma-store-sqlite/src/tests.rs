//! Integration tests for `SqliteStore` against an in-memory database.

use alma_core::{
  review::NewReview,
  store::{CollegeFilter, DirectoryStore, SortOrder},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  let s = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  s.seed_if_empty().await.expect("seeding");
  s
}

fn review(college_name: &str, rating: i64, comment: &str) -> NewReview {
  NewReview::validated(college_name, rating, comment).expect("valid review")
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_populates_empty_store() {
  let s = store().await;

  let colleges = s.list_colleges(&CollegeFilter::default()).await.unwrap();
  assert_eq!(colleges.len(), 8);

  let reviews = s.list_reviews().await.unwrap();
  assert_eq!(reviews.len(), 3);
}

#[tokio::test]
async fn seed_is_idempotent() {
  let s = store().await;

  let seeded_again = s.seed_if_empty().await.unwrap();
  assert!(!seeded_again);

  let colleges = s.list_colleges(&CollegeFilter::default()).await.unwrap();
  assert_eq!(colleges.len(), 8);
}

// ─── College listing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn default_sort_is_name_ascending() {
  let s = store().await;

  let colleges = s.list_colleges(&CollegeFilter::default()).await.unwrap();
  let names: Vec<&str> = colleges.iter().map(|c| c.name.as_str()).collect();
  let mut sorted = names.clone();
  sorted.sort();
  assert_eq!(names, sorted);
  assert_eq!(names[0], "ABC Engineering College");
}

#[tokio::test]
async fn fee_low_sorts_non_decreasing() {
  let s = store().await;

  let filter = CollegeFilter {
    sort: SortOrder::FeeLow,
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  assert!(colleges.windows(2).all(|w| w[0].fee <= w[1].fee));
}

#[tokio::test]
async fn fee_high_sorts_non_increasing() {
  let s = store().await;

  let filter = CollegeFilter {
    sort: SortOrder::FeeHigh,
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  assert!(colleges.windows(2).all(|w| w[0].fee >= w[1].fee));
}

#[tokio::test]
async fn location_filter_restricts_results() {
  let s = store().await;

  let filter = CollegeFilter {
    location: Some("Hyderabad".into()),
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  assert_eq!(colleges.len(), 2);
  assert!(colleges.iter().all(|c| c.location == "Hyderabad"));
}

#[tokio::test]
async fn filters_combine_conjunctively() {
  let s = store().await;

  let filter = CollegeFilter {
    location: Some("Bangalore".into()),
    course: Some("Computer Science".into()),
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  assert_eq!(colleges.len(), 1);
  assert_eq!(colleges[0].name, "Tech University");
}

#[tokio::test]
async fn fee_range_is_inclusive() {
  let s = store().await;

  let filter = CollegeFilter {
    min_fee: Some(100_000),
    max_fee: Some(150_000),
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  assert_eq!(colleges.len(), 3);
  assert!(colleges.iter().all(|c| (100_000..=150_000).contains(&c.fee)));
}

#[tokio::test]
async fn search_matches_name_substring() {
  let s = store().await;

  let filter = CollegeFilter {
    search: Some("Engineering".into()),
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  assert_eq!(colleges.len(), 2);
  assert!(colleges.iter().all(|c| c.name.contains("Engineering")));
}

#[tokio::test]
async fn no_match_returns_empty_not_error() {
  let s = store().await;

  let filter = CollegeFilter {
    location: Some("Atlantis".into()),
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  assert!(colleges.is_empty());
}

#[tokio::test]
async fn hyderabad_fee_high_orders_by_fee_descending() {
  let s = store().await;

  let filter = CollegeFilter {
    location: Some("Hyderabad".into()),
    sort: SortOrder::FeeHigh,
    ..Default::default()
  };
  let colleges = s.list_colleges(&filter).await.unwrap();
  let names: Vec<&str> = colleges.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Greenfield Medical College", "ABC Engineering College"]);

  // ABC Engineering College precedes every Hyderabad college priced at or
  // below its 120000 fee.
  let abc_pos = colleges
    .iter()
    .position(|c| c.name == "ABC Engineering College")
    .unwrap();
  assert!(
    colleges[abc_pos..].iter().all(|c| c.fee <= 120_000),
    "colleges after ABC must not be priced above it"
  );
}

// ─── Filter options ──────────────────────────────────────────────────────────

#[tokio::test]
async fn filter_options_are_distinct_and_sorted() {
  let s = store().await;

  let options = s.filter_options().await.unwrap();
  assert_eq!(options.locations, ["Bangalore", "Chennai", "Hyderabad"]);
  assert_eq!(
    options.courses,
    ["BSc Physics", "Computer Science", "Electronics", "Law", "MBA", "MBBS"]
  );
}

// ─── Reviews ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_review_assigns_id_and_timestamp() {
  let s = store().await;

  let created = s
    .add_review(review("Tech University", 3, "ok"))
    .await
    .unwrap();
  assert!(created.id > 0);
  assert_eq!(created.college_name, "Tech University");
  assert_eq!(created.rating, 3);

  let fetched = s.get_review(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.comment, "ok");
  assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn reviews_list_newest_first() {
  let s = store().await;

  s.add_review(review("Tech University", 4, "older")).await.unwrap();
  let newest = s
    .add_review(review("National Law School", 5, "newer"))
    .await
    .unwrap();

  let reviews = s.list_reviews().await.unwrap();
  assert_eq!(reviews[0].id, newest.id);
  assert!(
    reviews
      .windows(2)
      .all(|w| w[0].created_at >= w[1].created_at)
  );
}

#[tokio::test]
async fn orphaned_college_name_is_allowed() {
  let s = store().await;

  let created = s
    .add_review(review("No Such College", 2, "never heard of it"))
    .await
    .unwrap();
  let fetched = s.get_review(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.college_name, "No Such College");
}

#[tokio::test]
async fn delete_review_reports_row_count() {
  let s = store().await;

  let created = s
    .add_review(review("Tech University", 3, "to delete"))
    .await
    .unwrap();

  assert_eq!(s.delete_review(created.id).await.unwrap(), 1);
  assert_eq!(s.delete_review(created.id).await.unwrap(), 0);
  assert!(s.get_review(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn get_review_missing_returns_none() {
  let s = store().await;
  assert!(s.get_review(9_999).await.unwrap().is_none());
}

// ─── Favorites ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_favorites_joins_colleges() {
  let s = store().await;

  // ids follow seed insertion order: 5 = Tech University, 1 = ABC.
  s.add_favorite(5).await.unwrap();
  s.add_favorite(1).await.unwrap();

  let favorites = s.list_favorites().await.unwrap();
  let names: Vec<&str> = favorites.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["ABC Engineering College", "Tech University"]);
}

#[tokio::test]
async fn favorite_for_college_roundtrip() {
  let s = store().await;

  assert!(s.favorite_for_college(1).await.unwrap().is_none());

  let favorite = s.add_favorite(1).await.unwrap();
  let found = s.favorite_for_college(1).await.unwrap().unwrap();
  assert_eq!(found, favorite);
}

#[tokio::test]
async fn remove_favorite_counts_rows() {
  let s = store().await;

  s.add_favorite(2).await.unwrap();
  assert_eq!(s.remove_favorite(2).await.unwrap(), 1);
  assert_eq!(s.remove_favorite(2).await.unwrap(), 0);
  assert!(s.favorite_for_college(2).await.unwrap().is_none());
}
