// ABOUTME: "My Presentations" view listing presentations consolidated this session
// Read-only list with a cursor; records are never reopened

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::models::ClientType;

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const LIST_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct HistoryComponent;

impl HistoryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(area);

        self.render_list(frame, layout[0], state);
        self.render_help_bar(frame, layout[1]);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let records = state.history.newest_first();

        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(" My Presentations ", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(format!("({}) ", records.len()), Style::default().fg(MUTED_GRAY)),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        if records.is_empty() {
            let empty_msg = Paragraph::new("No presentations yet")
                .block(block)
                .style(Style::default().fg(MUTED_GRAY))
                .alignment(Alignment::Center);
            frame.render_widget(empty_msg, area);
            return;
        }

        let items: Vec<ListItem> = records
            .iter()
            .map(|record| {
                let type_color = match record.client_type {
                    ClientType::Existing => CORNFLOWER_BLUE,
                    ClientType::New => SELECTION_GREEN,
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<32}", record.client_name), Style::default().fg(SOFT_WHITE)),
                    Span::styled(format!("{:<17}", record.client_type.label()), Style::default().fg(type_color)),
                    Span::styled(format!("{:<5}", record.user_type.label()), Style::default().fg(MUTED_GRAY)),
                    Span::styled(
                        record.created_at.format("%Y-%m-%d").to_string(),
                        Style::default().fg(MUTED_GRAY),
                    ),
                    Span::styled(format!("  {} slides", record.slide_count), Style::default().fg(GOLD)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(LIST_HIGHLIGHT_BG)
                    .fg(SOFT_WHITE)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.history_cursor.min(records.len() - 1)));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect) {
        let help_items = [("↑↓", "navigate"), ("Esc/h", "back to wizard"), ("q", "quit")];

        let mut spans = vec![Span::styled("  ", Style::default())];
        for (i, (key, desc)) in help_items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(SUBDUED_BORDER)));
            }
            spans.push(Span::styled(*key, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(*desc, Style::default().fg(MUTED_GRAY)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(DARK_BG)), area);
    }
}

impl Default for HistoryComponent {
    fn default() -> Self {
        Self::new()
    }
}
