// ABOUTME: Main layout component arranging the active view, status bar, notifications and help overlay

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const ERROR_RED: Color = Color::Rgb(230, 100, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

use super::{HelpComponent, HistoryComponent, WizardComponent};
use crate::app::{AppState, NotificationType, View};

pub struct LayoutComponent {
    wizard: WizardComponent,
    history: HistoryComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            wizard: WizardComponent::new(),
            history: HistoryComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(3)])
            .split(frame.size());

        match state.current_view {
            View::Wizard => self.wizard.render(frame, chunks[0], state),
            View::History => self.history.render(frame, chunks[0], state),
        }

        self.render_status_bar(frame, chunks[1], state);

        // Render notifications (top-right corner)
        self.render_notifications(frame, frame.size(), state);

        if state.show_help {
            self.help.render(frame, frame.size());
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let separator = || Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER));
        let wizard = &state.wizard;
        let step = wizard.current_step();
        // Position among the visible steps so new clients count five
        let steps = wizard.visible_steps();
        let position = steps.iter().position(|s| *s == step).map_or(step.number(), |idx| idx + 1);

        let mut status_spans = vec![
            Span::styled("Step ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                format!("{}/{}", position, steps.len()),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", step.title()), Style::default().fg(SOFT_WHITE)),
        ];

        if let Some(client_type) = wizard.client_type() {
            status_spans.push(separator());
            status_spans.push(Span::styled(client_type.label(), Style::default().fg(CORNFLOWER_BLUE)));
            status_spans.push(Span::styled(
                format!(" ({})", wizard.user_type().label()),
                Style::default().fg(MUTED_GRAY),
            ));
        }

        let summary = wizard.summary();
        status_spans.push(separator());
        status_spans.push(Span::styled(
            format!("{} slides", summary.total),
            Style::default().fg(SOFT_WHITE),
        ));

        if state.is_generating_report() {
            status_spans.push(separator());
            status_spans.push(Span::styled("Generating report...", Style::default().fg(WARNING_ORANGE)));
        }
        if state.is_exporting() {
            status_spans.push(separator());
            status_spans.push(Span::styled("Exporting...", Style::default().fg(WARNING_ORANGE)));
        }

        let status = Paragraph::new(Line::from(status_spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(CORNFLOWER_BLUE))
                    .style(Style::default().bg(DARK_BG))
                    .title(Line::from(vec![Span::styled(
                        " Status ",
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    )])),
            )
            .alignment(Alignment::Left);

        frame.render_widget(status, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.get_current_notifications();
        if notifications.is_empty() {
            return;
        }

        // Position notifications in the top-right corner
        let notification_width = 50.min(area.width.saturating_sub(2));
        let notification_height = notifications.len() as u16 * 3; // 3 lines per notification

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= notification_area.height {
                break;
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, color) = match notification.notification_type {
                NotificationType::Success => ("✓ ", SELECTION_GREEN),
                NotificationType::Error => ("✗ ", ERROR_RED),
                NotificationType::Warning => ("⚠ ", WARNING_ORANGE),
                NotificationType::Info => ("ℹ ", CORNFLOWER_BLUE),
            };

            let notification_line = Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(color)),
            ]);

            let notification_widget = Paragraph::new(notification_line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(ratatui::widgets::Clear, single_notification_area);
            frame.render_widget(notification_widget, single_notification_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Rect of the given percentage size centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 80, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 40);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 5);
    }
}
