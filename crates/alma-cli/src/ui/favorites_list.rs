//! Favorites pane — the bookmarked colleges.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the favorites pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" Favorites ({}) ", app.favorites.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  if app.favorites.is_empty() {
    f.render_widget(
      Paragraph::new("No favorites yet. Press 'f' on a college to add one.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = app
    .favorites
    .iter()
    .enumerate()
    .map(|(i, college)| {
      let style = if i == app.favorite_cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };

      let text = format!(
        "★ {:<30} {:<11} {:<17} ₹{:>7}",
        college.name, college.location, college.course, college.fee,
      );
      ListItem::new(Line::from(Span::styled(text, style)))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.favorite_cursor));

  f.render_stateful_widget(
    List::new(items).highlight_symbol(""),
    inner,
    &mut state,
  );
}
