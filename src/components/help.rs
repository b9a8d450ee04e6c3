// ABOUTME: Help overlay component displaying keyboard shortcuts for each wizard step

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::layout::centered_rect;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &str) -> ListItem<'_> {
        ListItem::new(title).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let help_items = vec![
            Self::section("Wizard:"),
            ListItem::new("  Enter      Next step / confirm"),
            ListItem::new("  Esc        Previous step / close"),
            ListItem::new("  1/n 2/e    New or existing client (start)"),
            ListItem::new("  u / Tab    Switch user type RM/DB"),
            ListItem::new(""),
            Self::section("Slides:"),
            ListItem::new("  h/←  l/→   Previous / next slide"),
            ListItem::new("  Home End   First / last slide"),
            ListItem::new("  1-9        Jump to slide"),
            ListItem::new("  Space/x    Mark slide (delete or add)"),
            ListItem::new(""),
            Self::section("Identifications:"),
            ListItem::new("  Enter      Add identification (empty: next)"),
            ListItem::new("  Tab        Cycle input / list / report"),
            ListItem::new("  d          Remove selected identification"),
            ListItem::new("  Ctrl+R/F5  Generate performance report"),
            ListItem::new(""),
            Self::section("Review:"),
            ListItem::new("  < >        Move slide left / right"),
            ListItem::new("  d          Remove slide from deck"),
            ListItem::new("  p          Add product slides"),
            ListItem::new("  a          Upload custom slides"),
            ListItem::new(""),
            Self::section("General:"),
            ListItem::new("  F2 / h     Presentation history"),
            ListItem::new("  ?/F1       Toggle this help"),
            ListItem::new("  q          Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
