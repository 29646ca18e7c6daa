//! Colleges pane — the filterable directory list.

use alma_core::store::SortOrder;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Input};

/// Render the colleges pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(2), Constraint::Min(0)])
    .split(area);

  draw_filter_bar(f, rows[0], app);
  draw_list(f, rows[1], app);
}

// ─── Filter summary ───────────────────────────────────────────────────────────

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) {
  let location = app.filter.location.as_deref().unwrap_or("all");
  let course = app.filter.course.as_deref().unwrap_or("all");
  let sort = match app.filter.sort {
    SortOrder::NameAsc => "name",
    SortOrder::FeeLow => "fee (low first)",
    SortOrder::FeeHigh => "fee (high first)",
  };
  let fee_range = match (app.filter.min_fee, app.filter.max_fee) {
    (None, None) => "any".to_string(),
    (min, max) => format!(
      "{}..{}",
      min.map(|v| v.to_string()).unwrap_or_default(),
      max.map(|v| v.to_string()).unwrap_or_default(),
    ),
  };

  let mut lines = vec![Line::from(vec![
    Span::styled("location ", Style::default().fg(Color::DarkGray)),
    Span::raw(location),
    Span::styled("  course ", Style::default().fg(Color::DarkGray)),
    Span::raw(course),
    Span::styled("  fee ", Style::default().fg(Color::DarkGray)),
    Span::raw(fee_range),
    Span::styled("  sort ", Style::default().fg(Color::DarkGray)),
    Span::raw(sort),
  ])];

  // Active input line, rendered under the summary.
  let input_line = match app.input {
    Input::None => {
      let search = app.filter.search.as_deref().unwrap_or("");
      if search.is_empty() {
        Line::from("")
      } else {
        Line::from(Span::styled(
          format!("/{search}"),
          Style::default().fg(Color::Yellow),
        ))
      }
    }
    Input::Search => Line::from(Span::styled(
      format!("/{}_", app.input_buf),
      Style::default().fg(Color::Yellow),
    )),
    Input::MinFee => Line::from(Span::styled(
      format!("min fee: {}_", app.input_buf),
      Style::default().fg(Color::Yellow),
    )),
    Input::MaxFee => Line::from(Span::styled(
      format!("max fee: {}_", app.input_buf),
      Style::default().fg(Color::Yellow),
    )),
  };
  lines.push(input_line);

  f.render_widget(Paragraph::new(lines), area);
}

// ─── List ─────────────────────────────────────────────────────────────────────

fn draw_list(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" Colleges ({}) ", app.colleges.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = app
    .colleges
    .iter()
    .enumerate()
    .map(|(i, college)| {
      let marker = if app.favorite_ids.contains(&college.id) {
        "★ "
      } else {
        "  "
      };

      let style = if i == app.college_cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };

      let text = format!(
        "{marker}{:<30} {:<11} {:<17} ₹{:>7}",
        college.name, college.location, college.course, college.fee,
      );
      ListItem::new(Line::from(Span::styled(text, style)))
    })
    .collect();

  let inner = block.inner(area);
  f.render_widget(block, area);

  if app.colleges.is_empty() {
    f.render_widget(
      Paragraph::new("No colleges match the current filters.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let mut state = ListState::default();
  state.select(Some(app.college_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner,
    &mut state,
  );
}
