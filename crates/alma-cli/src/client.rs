//! Async HTTP client wrapping the alma JSON API.

use std::time::Duration;

use alma_core::{
  college::College,
  favorite::Favorite,
  review::Review,
  store::{CollegeFilter, FilterOptions, SortOrder},
};
use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Connection settings for the alma API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Shape of an API error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  error: String,
}

/// Async HTTP client for the alma JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Requests
/// carry a fixed 8-second timeout; a timed-out or unreachable server is
/// reported as a transport failure, distinct from a server `{error}` body.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(8))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Turn a non-success response into the server's `{error}` message.
  async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
    if resp.status().is_success() {
      return Ok(resp);
    }
    let status = resp.status();
    let message = resp
      .json::<ErrorBody>()
      .await
      .map(|b| b.error)
      .unwrap_or_else(|_| format!("HTTP {status}"));
    Err(anyhow!(message))
  }

  // ── Colleges ──────────────────────────────────────────────────────────────

  /// `GET /api/colleges` with the filter encoded as query parameters.
  /// Unset filters produce no parameter at all.
  pub async fn list_colleges(&self, filter: &CollegeFilter) -> Result<Vec<College>> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(location) = &filter.location {
      query.push(("location", location.clone()));
    }
    if let Some(course) = &filter.course {
      query.push(("course", course.clone()));
    }
    if let Some(min_fee) = filter.min_fee {
      query.push(("minFee", min_fee.to_string()));
    }
    if let Some(max_fee) = filter.max_fee {
      query.push(("maxFee", max_fee.to_string()));
    }
    if let Some(search) = &filter.search {
      query.push(("search", search.clone()));
    }
    match filter.sort {
      SortOrder::FeeLow => query.push(("sort", "fee_low".to_string())),
      SortOrder::FeeHigh => query.push(("sort", "fee_high".to_string())),
      SortOrder::NameAsc => {}
    }

    let resp = self
      .client
      .get(self.url("/colleges"))
      .query(&query)
      .send()
      .await
      .context("GET /colleges failed")?;
    Self::check(resp)
      .await?
      .json()
      .await
      .context("deserialising colleges")
  }

  /// `GET /api/colleges/filters`
  pub async fn filter_options(&self) -> Result<FilterOptions> {
    let resp = self
      .client
      .get(self.url("/colleges/filters"))
      .send()
      .await
      .context("GET /colleges/filters failed")?;
    Self::check(resp)
      .await?
      .json()
      .await
      .context("deserialising filter options")
  }

  // ── Reviews ───────────────────────────────────────────────────────────────

  /// `GET /api/reviews`
  pub async fn list_reviews(&self) -> Result<Vec<Review>> {
    let resp = self
      .client
      .get(self.url("/reviews"))
      .send()
      .await
      .context("GET /reviews failed")?;
    Self::check(resp)
      .await?
      .json()
      .await
      .context("deserialising reviews")
  }

  /// `POST /api/reviews`
  pub async fn add_review(
    &self,
    college_name: &str,
    rating: i64,
    comment: &str,
  ) -> Result<Review> {
    let resp = self
      .client
      .post(self.url("/reviews"))
      .json(&json!({
        "college_name": college_name,
        "rating": rating,
        "comment": comment,
      }))
      .send()
      .await
      .context("POST /reviews failed")?;
    Self::check(resp)
      .await?
      .json()
      .await
      .context("deserialising review")
  }

  /// `DELETE /api/reviews/:id`
  pub async fn delete_review(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/reviews/{id}")))
      .send()
      .await
      .context("DELETE /reviews failed")?;
    Self::check(resp).await?;
    Ok(())
  }

  // ── Favorites ─────────────────────────────────────────────────────────────

  /// `GET /api/favorites`
  pub async fn list_favorites(&self) -> Result<Vec<College>> {
    let resp = self
      .client
      .get(self.url("/favorites"))
      .send()
      .await
      .context("GET /favorites failed")?;
    Self::check(resp)
      .await?
      .json()
      .await
      .context("deserialising favorites")
  }

  /// `POST /api/favorites`
  pub async fn add_favorite(&self, college_id: i64) -> Result<Favorite> {
    let resp = self
      .client
      .post(self.url("/favorites"))
      .json(&json!({ "college_id": college_id }))
      .send()
      .await
      .context("POST /favorites failed")?;
    Self::check(resp)
      .await?
      .json()
      .await
      .context("deserialising favorite")
  }

  /// `DELETE /api/favorites/:college_id`
  pub async fn remove_favorite(&self, college_id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/favorites/{college_id}")))
      .send()
      .await
      .context("DELETE /favorites failed")?;
    Self::check(resp).await?;
    Ok(())
  }
}
