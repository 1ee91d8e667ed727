//! Vertical menus and the title/help chrome around every screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// A wrapping list selection over a fixed set of items.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    items: Vec<T>,
    list_state: ListState,
}

impl<T: Copy + PartialEq> Menu<T> {
    /// Creates a menu with the first item selected.
    pub fn new(items: Vec<T>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(if items.is_empty() { None } else { Some(0) });
        Self { items, list_state }
    }

    /// Selects `item` if present.
    pub fn with_selected(mut self, item: T) -> Self {
        if let Some(i) = self.items.iter().position(|it| *it == item) {
            self.list_state.select(Some(i));
        }
        self
    }

    /// Moves selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let count = self.items.len();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let count = self.items.len();
        if count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// The highlighted item.
    pub fn selected(&self) -> Option<T> {
        self.list_state
            .selected()
            .and_then(|i| self.items.get(i))
            .copied()
    }

    /// Draws the menu into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, label: impl Fn(T) -> String) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(label(*item)))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Draws a title bar and a help bar, returning the area between them.
pub fn draw_chrome(frame: &mut Frame, title: &str, help: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let help = Paragraph::new(help.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    chunks[1]
}
