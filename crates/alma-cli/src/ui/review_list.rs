//! Reviews pane — list plus the add-review form overlay.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, FormField, ReviewForm};

/// Render the reviews pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  draw_list(f, area, app);

  if let Some(form) = &app.form {
    draw_form(f, area, form);
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

fn stars(rating: i64) -> String {
  let filled = rating.clamp(0, 5) as usize;
  format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn draw_list(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" Reviews ({}) ", app.reviews.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  if app.reviews.is_empty() {
    f.render_widget(
      Paragraph::new("No reviews yet. Press 'a' to add one.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = app
    .reviews
    .iter()
    .enumerate()
    .map(|(i, review)| {
      let style = if i == app.review_cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };

      let date = review.created_at.format("%Y-%m-%d").to_string();
      let header = Line::from(vec![
        Span::styled(stars(review.rating), style.patch(Style::default().fg(Color::Yellow))),
        Span::styled(format!("  {:<30}", review.college_name), style),
        Span::styled(format!("  {date}"), style.patch(Style::default().fg(Color::DarkGray))),
      ]);
      let body = Line::from(Span::styled(format!("    {}", review.comment), style));

      ListItem::new(vec![header, body])
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.review_cursor));

  f.render_stateful_widget(
    List::new(items).highlight_symbol(""),
    inner,
    &mut state,
  );
}

// ─── Form overlay ─────────────────────────────────────────────────────────────

/// Centered rect of `width` x `height` within `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let x = area.x + area.width.saturating_sub(width) / 2;
  let y = area.y + area.height.saturating_sub(height) / 2;
  Rect {
    x,
    y,
    width: width.min(area.width),
    height: height.min(area.height),
  }
}

fn draw_form(f: &mut Frame, area: Rect, form: &ReviewForm) {
  let popup = centered(area, 60, 9);
  f.render_widget(Clear, popup);

  let block = Block::default()
    .title(" Add review ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));

  let field_line = |label: &str, value: String, focused: bool| {
    let label_style = if focused {
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
      Span::styled(format!("{label:<10}"), label_style),
      Span::raw(format!("{value}{cursor}")),
    ])
  };

  let lines = vec![
    Line::from(""),
    field_line(
      "college",
      form.college_name.clone(),
      form.field == FormField::CollegeName,
    ),
    Line::from(""),
    field_line("rating", stars(form.rating), form.field == FormField::Rating),
    Line::from(""),
    field_line("comment", form.comment.clone(), form.field == FormField::Comment),
  ];

  let inner = block.inner(popup);
  f.render_widget(block, popup);
  f.render_widget(Paragraph::new(lines), inner);
}
