use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::cell::DetailCell;

/// Render prepared cells as a selectable list.
pub fn render_rows(frame: &mut Frame<'_>, area: Rect, cells: &[DetailCell], selected: Option<usize>) {
    let content_width = area.width.saturating_sub(4);
    let items: Vec<ListItem<'_>> = cells
        .iter()
        .map(|cell| ListItem::new(cell.to_lines(content_width)))
        .collect();

    let mut state = ListState::default();
    state.select(selected);

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}
