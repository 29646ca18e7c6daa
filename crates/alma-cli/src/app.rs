//! Application state machine and event dispatcher.

use std::{collections::HashSet, sync::Arc};

use alma_core::{
  college::College,
  review::Review,
  store::{CollegeFilter, FilterOptions, SortOrder},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::client::ApiClient;

// ─── Tabs and input modes ─────────────────────────────────────────────────────

/// The three tabs of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  Colleges,
  Reviews,
  Favorites,
}

/// Which filter text field, if any, currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
  None,
  Search,
  MinFee,
  MaxFee,
}

/// Field focus within the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  CollegeName,
  Rating,
  Comment,
}

impl FormField {
  fn next(self) -> Self {
    match self {
      FormField::CollegeName => FormField::Rating,
      FormField::Rating => FormField::Comment,
      FormField::Comment => FormField::CollegeName,
    }
  }

  fn prev(self) -> Self {
    match self {
      FormField::CollegeName => FormField::Comment,
      FormField::Rating => FormField::CollegeName,
      FormField::Comment => FormField::Rating,
    }
  }
}

/// In-progress review form state.
#[derive(Debug, Clone)]
pub struct ReviewForm {
  pub college_name: String,
  pub rating:       i64,
  pub comment:      String,
  pub field:        FormField,
}

impl ReviewForm {
  /// Open with the college name prefilled when one is selected.
  fn new(college_name: String) -> Self {
    Self {
      college_name,
      rating: 5,
      comment: String::new(),
      field: FormField::CollegeName,
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Active tab.
  pub tab: Tab,

  /// Colleges matching the current filter, as returned by the API.
  pub colleges: Vec<College>,

  /// Distinct filter values fetched at startup.
  pub options: FilterOptions,

  /// Current filter state; re-sent to the API whenever it changes.
  pub filter: CollegeFilter,

  /// Reviews, newest first.
  pub reviews: Vec<Review>,

  /// Favorited colleges, ordered by name.
  pub favorites: Vec<College>,

  /// College ids currently favorited; drives the list marker and toggling.
  pub favorite_ids: HashSet<i64>,

  pub college_cursor:  usize,
  pub review_cursor:   usize,
  pub favorite_cursor: usize,

  /// Active filter input field, with its in-progress buffer.
  pub input:     Input,
  pub input_buf: String,

  /// Review form, when open (Reviews tab).
  pub form: Option<ReviewForm>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] with empty lists.
  pub fn new(client: ApiClient) -> Self {
    Self {
      tab: Tab::Colleges,
      colleges: Vec::new(),
      options: FilterOptions::default(),
      filter: CollegeFilter::default(),
      reviews: Vec::new(),
      favorites: Vec::new(),
      favorite_ids: HashSet::new(),
      college_cursor: 0,
      review_cursor: 0,
      favorite_cursor: 0,
      input: Input::None,
      input_buf: String::new(),
      form: None,
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch everything shown on startup: filter options, the unfiltered
  /// college list, reviews, and favorites.
  pub async fn load_initial(&mut self) -> anyhow::Result<()> {
    self.status_msg = "Loading…".into();

    let loaded = self.try_load_initial().await;
    self.status_msg = match &loaded {
      Ok(()) => String::new(),
      Err(e) => format!("Error: {e}"),
    };
    loaded
  }

  async fn try_load_initial(&mut self) -> anyhow::Result<()> {
    self.options = self.client.filter_options().await?;
    self.colleges = self.client.list_colleges(&self.filter).await?;
    self.reviews = self.client.list_reviews().await?;
    let favorites = self.client.list_favorites().await?;
    self.set_favorites(favorites);
    Ok(())
  }

  /// Re-fetch colleges for the current filter. Failures land in the status
  /// bar; the previous list stays on screen.
  pub async fn reload_colleges(&mut self) {
    match self.client.list_colleges(&self.filter).await {
      Ok(colleges) => {
        self.colleges = colleges;
        self.college_cursor = self
          .college_cursor
          .min(self.colleges.len().saturating_sub(1));
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  pub async fn reload_reviews(&mut self) {
    match self.client.list_reviews().await {
      Ok(reviews) => {
        self.reviews = reviews;
        self.review_cursor = self
          .review_cursor
          .min(self.reviews.len().saturating_sub(1));
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  pub async fn reload_favorites(&mut self) {
    match self.client.list_favorites().await {
      Ok(favorites) => {
        self.set_favorites(favorites);
        self.favorite_cursor = self
          .favorite_cursor
          .min(self.favorites.len().saturating_sub(1));
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  fn set_favorites(&mut self, favorites: Vec<College>) {
    self.favorite_ids = favorites.iter().map(|c| c.id).collect();
    self.favorites = favorites;
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
    {
      return Ok(false);
    }

    if self.form.is_some() {
      return self.handle_form_key(key).await;
    }
    if self.input != Input::None {
      return self.handle_input_key(key).await;
    }

    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Tab => {
        let next = match self.tab {
          Tab::Colleges => Tab::Reviews,
          Tab::Reviews => Tab::Favorites,
          Tab::Favorites => Tab::Colleges,
        };
        self.switch_tab(next).await;
        return Ok(true);
      }
      KeyCode::Char('1') => {
        self.switch_tab(Tab::Colleges).await;
        return Ok(true);
      }
      KeyCode::Char('2') => {
        self.switch_tab(Tab::Reviews).await;
        return Ok(true);
      }
      KeyCode::Char('3') => {
        self.switch_tab(Tab::Favorites).await;
        return Ok(true);
      }
      _ => {}
    }

    match self.tab {
      Tab::Colleges => self.handle_colleges_key(key).await,
      Tab::Reviews => self.handle_reviews_key(key).await,
      Tab::Favorites => self.handle_favorites_key(key).await,
    }
  }

  /// Switch tab, refreshing that tab's data.
  async fn switch_tab(&mut self, tab: Tab) {
    self.tab = tab;
    self.status_msg = String::new();
    match tab {
      Tab::Colleges => self.reload_colleges().await,
      Tab::Reviews => self.reload_reviews().await,
      Tab::Favorites => self.reload_favorites().await,
    }
  }

  async fn handle_colleges_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if self.college_cursor + 1 < self.colleges.len() {
          self.college_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.college_cursor = self.college_cursor.saturating_sub(1);
      }

      // Filter inputs
      KeyCode::Char('/') => self.open_input(Input::Search),
      KeyCode::Char('m') => self.open_input(Input::MinFee),
      KeyCode::Char('M') => self.open_input(Input::MaxFee),

      // Filter cycling
      KeyCode::Char('l') => {
        self.filter.location =
          next_option(&self.options.locations, self.filter.location.take());
        self.reload_colleges().await;
      }
      KeyCode::Char('c') => {
        self.filter.course =
          next_option(&self.options.courses, self.filter.course.take());
        self.reload_colleges().await;
      }
      KeyCode::Char('s') => {
        self.filter.sort = match self.filter.sort {
          SortOrder::NameAsc => SortOrder::FeeLow,
          SortOrder::FeeLow => SortOrder::FeeHigh,
          SortOrder::FeeHigh => SortOrder::NameAsc,
        };
        self.reload_colleges().await;
      }
      KeyCode::Char('x') => {
        self.filter = CollegeFilter::default();
        self.reload_colleges().await;
      }

      // Favorite toggle
      KeyCode::Char('f') | KeyCode::Enter => self.toggle_favorite().await,

      _ => {}
    }
    Ok(true)
  }

  async fn handle_reviews_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.review_cursor + 1 < self.reviews.len() {
          self.review_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.review_cursor = self.review_cursor.saturating_sub(1);
      }
      KeyCode::Char('a') => {
        // Prefill from the college selected on the Colleges tab.
        let prefill = self
          .colleges
          .get(self.college_cursor)
          .map(|c| c.name.clone())
          .unwrap_or_default();
        self.form = Some(ReviewForm::new(prefill));
      }
      KeyCode::Char('d') => self.delete_selected_review().await,
      _ => {}
    }
    Ok(true)
  }

  async fn handle_favorites_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.favorite_cursor + 1 < self.favorites.len() {
          self.favorite_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.favorite_cursor = self.favorite_cursor.saturating_sub(1);
      }
      KeyCode::Char('d') | KeyCode::Char('f') => {
        self.remove_selected_favorite().await;
      }
      _ => {}
    }
    Ok(true)
  }

  // ── Filter input mode ─────────────────────────────────────────────────────

  fn open_input(&mut self, input: Input) {
    self.input = input;
    self.input_buf = match input {
      Input::Search => self.filter.search.clone().unwrap_or_default(),
      Input::MinFee => {
        self.filter.min_fee.map(|v| v.to_string()).unwrap_or_default()
      }
      Input::MaxFee => {
        self.filter.max_fee.map(|v| v.to_string()).unwrap_or_default()
      }
      Input::None => String::new(),
    };
  }

  async fn handle_input_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => {
        self.input = Input::None;
        self.input_buf.clear();
      }
      KeyCode::Enter => self.commit_input().await,
      KeyCode::Backspace => {
        self.input_buf.pop();
      }
      KeyCode::Char(c) => self.input_buf.push(c),
      _ => {}
    }
    Ok(true)
  }

  /// Apply the input buffer to the filter and re-query. A fee that is not a
  /// whole number never leaves the client; the input stays open to fix it.
  async fn commit_input(&mut self) {
    let buf = self.input_buf.trim().to_string();

    match self.input {
      Input::None => {}
      Input::Search => {
        self.filter.search = (!buf.is_empty()).then(|| buf.clone());
      }
      Input::MinFee | Input::MaxFee => {
        let parsed = if buf.is_empty() {
          None
        } else {
          match buf.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
              self.status_msg = "Fee must be a whole number".into();
              return;
            }
          }
        };
        if self.input == Input::MinFee {
          self.filter.min_fee = parsed;
        } else {
          self.filter.max_fee = parsed;
        }
      }
    }

    self.input = Input::None;
    self.input_buf.clear();
    self.college_cursor = 0;
    self.reload_colleges().await;
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Add or remove the favorite for the selected college.
  async fn toggle_favorite(&mut self) {
    let Some(college) = self.colleges.get(self.college_cursor) else {
      return;
    };
    let id = college.id;
    let name = college.name.clone();

    let result = if self.favorite_ids.contains(&id) {
      self
        .client
        .remove_favorite(id)
        .await
        .map(|_| format!("Removed {name} from favorites"))
    } else {
      self
        .client
        .add_favorite(id)
        .await
        .map(|_| format!("Added {name} to favorites"))
    };

    match result {
      Ok(msg) => {
        self.status_msg = msg;
        self.reload_favorites().await;
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  async fn delete_selected_review(&mut self) {
    let Some(review) = self.reviews.get(self.review_cursor) else {
      return;
    };
    let id = review.id;

    match self.client.delete_review(id).await {
      Ok(()) => {
        self.status_msg = "Review deleted".into();
        self.reload_reviews().await;
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  async fn remove_selected_favorite(&mut self) {
    let Some(college) = self.favorites.get(self.favorite_cursor) else {
      return;
    };
    let id = college.id;
    let name = college.name.clone();

    match self.client.remove_favorite(id).await {
      Ok(()) => {
        self.status_msg = format!("Removed {name} from favorites");
        self.reload_favorites().await;
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  // ── Review form ───────────────────────────────────────────────────────────

  async fn handle_form_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => {
        self.form = None;
        return Ok(true);
      }
      KeyCode::Enter => {
        self.submit_form().await;
        return Ok(true);
      }
      _ => {}
    }

    let Some(form) = self.form.as_mut() else {
      return Ok(true);
    };
    match key.code {
      KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
      KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
      KeyCode::Left if form.field == FormField::Rating => {
        form.rating = (form.rating - 1).max(1);
      }
      KeyCode::Right if form.field == FormField::Rating => {
        form.rating = (form.rating + 1).min(5);
      }
      KeyCode::Backspace => match form.field {
        FormField::CollegeName => {
          form.college_name.pop();
        }
        FormField::Comment => {
          form.comment.pop();
        }
        FormField::Rating => {}
      },
      KeyCode::Char(c) => match form.field {
        FormField::Rating => {
          if let Some(d) = c.to_digit(10) {
            let d = i64::from(d);
            if (1..=5).contains(&d) {
              form.rating = d;
            }
          }
        }
        FormField::CollegeName => form.college_name.push(c),
        FormField::Comment => form.comment.push(c),
      },
      _ => {}
    }
    Ok(true)
  }

  /// Submit the open form. The server validates; its `{error}` message
  /// lands in the status bar and the form stays open for correction.
  async fn submit_form(&mut self) {
    let Some(form) = self.form.clone() else {
      return;
    };

    match self
      .client
      .add_review(&form.college_name, form.rating, &form.comment)
      .await
    {
      Ok(_) => {
        self.form = None;
        self.status_msg = "Review added".into();
        self.reload_reviews().await;
        self.review_cursor = 0;
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Advance through `None -> values[0] -> ... -> values[last] -> None`.
fn next_option(values: &[String], current: Option<String>) -> Option<String> {
  match current {
    None => values.first().cloned(),
    Some(cur) => match values.iter().position(|v| *v == cur) {
      Some(i) if i + 1 < values.len() => Some(values[i + 1].clone()),
      _ => None,
    },
  }
}
