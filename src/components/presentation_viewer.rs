// ABOUTME: Slide viewer component - current slide card, thumbnail strip and mark counter
// Marks are read from whichever selection set the caller passes in

use crate::models::{MarkMode, SelectionSet, Slide, SlideCategory};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// What to show in one viewer
pub struct ViewerProps<'a> {
    pub title: &'a str,
    pub slides: &'a [&'a Slide],
    pub current: usize,
    pub mode: MarkMode,
    pub marks: Option<&'a SelectionSet>,
    pub show_thumbnails: bool,
    pub focused: bool,
}

impl ViewerProps<'_> {
    fn is_marked(&self, slide: &Slide) -> bool {
        self.marks.is_some_and(|marks| marks.is_marked(slide.id))
    }

    fn marked_count(&self) -> usize {
        self.slides.iter().filter(|s| self.is_marked(s)).count()
    }
}

pub struct PresentationViewerComponent;

impl PresentationViewerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, props: &ViewerProps) {
        let border = if props.focused { GOLD } else { CORNFLOWER_BLUE };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", props.title))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.slides.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No slides to show", Style::default().fg(MUTED_GRAY))),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let thumbnails_height = if props.show_thumbnails { 3 } else { 0 };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(thumbnails_height),
                Constraint::Length(1),
            ])
            .split(inner);

        let current = props.current.min(props.slides.len() - 1);
        self.render_slide_card(frame, layout[0], props, props.slides[current]);
        if props.show_thumbnails {
            self.render_thumbnails(frame, layout[1], props, current);
        }
        self.render_footer(frame, layout[2], props, current);
    }

    fn render_slide_card(&self, frame: &mut Frame, area: Rect, props: &ViewerProps, slide: &Slide) {
        let marked = props.is_marked(slide);
        let (border_color, status) = match (props.mode, marked) {
            (MarkMode::Delete, true) => (ERROR_RED, "✗ Will be deleted"),
            (MarkMode::Add, true) => (SELECTION_GREEN, "✓ Will be added"),
            (MarkMode::Delete, false) => (SUBDUED_BORDER, "Space: mark for deletion"),
            (MarkMode::Add, false) => (SUBDUED_BORDER, "Space: mark to add"),
            (MarkMode::View, _) => (SUBDUED_BORDER, ""),
        };

        let title_style = if marked && props.mode == MarkMode::Delete {
            Style::default()
                .fg(MUTED_GRAY)
                .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(slide.title.as_str(), title_style)),
            Line::from(""),
            Line::from(Span::styled(slide.description.as_str(), Style::default().fg(MUTED_GRAY))),
            Line::from(""),
            Line::from(vec![
                Span::styled(category_badge(slide.category()), Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(format!("  {}", slide.id), Style::default().fg(SUBDUED_BORDER)),
            ]),
            Line::from(Span::styled(status, Style::default().fg(border_color))),
        ];

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(DARK_BG)),
            );
        frame.render_widget(card, area);
    }

    /// Numbered strip; only a window around the current slide fits on narrow terminals
    fn render_thumbnails(&self, frame: &mut Frame, area: Rect, props: &ViewerProps, current: usize) {
        let cell_width = 5usize;
        let capacity = (area.width as usize / cell_width).max(1);
        let start = current
            .saturating_sub(capacity / 2)
            .min(props.slides.len().saturating_sub(capacity));

        let mut spans = Vec::new();
        for (idx, slide) in props.slides.iter().enumerate().skip(start).take(capacity) {
            let marked = props.is_marked(slide);
            let mut style = match (props.mode, marked) {
                (MarkMode::Delete, true) => Style::default().fg(ERROR_RED).add_modifier(Modifier::CROSSED_OUT),
                (MarkMode::Add, true) => Style::default().fg(SELECTION_GREEN),
                _ => Style::default().fg(MUTED_GRAY),
            };
            if idx == current {
                style = style.fg(GOLD).add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{:^4}", idx + 1), style));
            spans.push(Span::raw(" "));
        }

        let strip = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(SUBDUED_BORDER)));
        frame.render_widget(strip, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, props: &ViewerProps, current: usize) {
        let mut spans = vec![Span::styled(
            format!("Slide {} of {}", current + 1, props.slides.len()),
            Style::default().fg(SOFT_WHITE),
        )];
        if props.mode != MarkMode::View {
            spans.push(Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(
                format!("{} {}", props.marked_count(), props.mode.count_label()),
                Style::default().fg(GOLD),
            ));
        }
        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}

impl Default for PresentationViewerComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn category_badge(category: SlideCategory) -> String {
    format!("[{}]", category.label())
}
