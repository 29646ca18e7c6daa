//! TUI rendering — orchestrates all panes.

pub mod college_list;
pub mod favorites_list;
pub mod review_list;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::Paragraph,
};

use crate::app::{App, Input, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: tab bar, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // tab bar
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_tabs(f, rows[0], app);
  match app.tab {
    Tab::Colleges => college_list::draw(f, rows[1], app),
    Tab::Reviews => review_list::draw(f, rows[1], app),
    Tab::Favorites => favorites_list::draw(f, rows[1], app),
  }
  draw_status(f, rows[2], app);
}

// ─── Tab bar ──────────────────────────────────────────────────────────────────

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
  let tab_span = |label: &str, tab: Tab| {
    if app.tab == tab {
      Span::styled(
        format!(" {label} "),
        Style::default()
          .fg(Color::Black)
          .bg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
    } else {
      Span::styled(format!(" {label} "), Style::default().fg(Color::Gray))
    }
  };

  let line = Line::from(vec![
    Span::styled(" alma ", Style::default().add_modifier(Modifier::BOLD)),
    tab_span("[1] Colleges", Tab::Colleges),
    tab_span("[2] Reviews", Tab::Reviews),
    tab_span("[3] Favorites", Tab::Favorites),
  ]);

  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::DarkGray)),
    area,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.form.is_some() {
    (
      "FORM",
      "Tab next field  ←→ rating  Enter submit  Esc cancel",
    )
  } else if app.input != Input::None {
    ("INPUT", "Type value  Enter apply  Esc cancel")
  } else {
    match app.tab {
      Tab::Colleges => (
        "COLLEGES",
        "↑↓/jk move  / search  l location  c course  s sort  m/M fee  x clear  f favorite  q quit",
      ),
      Tab::Reviews => ("REVIEWS", "↑↓/jk move  a add  d delete  q quit"),
      Tab::Favorites => ("FAVORITES", "↑↓/jk move  d remove  q quit"),
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span =
    Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray));

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
