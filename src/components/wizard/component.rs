// ABOUTME: Main presentation wizard component
// Renders the progress header, the active step and the key hints footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::product_picker::PickerRow;
use super::state::{Step5Mode, WizardStep};
use super::view::{IdentificationFocus, TextInput};
use crate::app::AppState;
use crate::components::presentation_viewer::{PresentationViewerComponent, ViewerProps};
use crate::models::{ClientType, MarkMode, Slide, SlideCategory};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

pub struct WizardComponent {
    viewer: PresentationViewerComponent,
}

impl WizardComponent {
    pub fn new() -> Self {
        Self {
            viewer: PresentationViewerComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(12),   // Step content
                Constraint::Length(3), // Key hints
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        self.render_navigation(frame, layout[2], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let wizard = &state.wizard;
        let mut title = vec![Span::styled(
            "Presentation Builder",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )];
        if !wizard.client_name().trim().is_empty() {
            title.push(Span::styled(
                format!("  ·  {}", wizard.client_name().trim()),
                Style::default().fg(SOFT_WHITE),
            ));
        }
        if let Some(client_type) = wizard.client_type() {
            title.push(Span::styled(
                format!("  ({}, {})", client_type.label(), wizard.user_type().label()),
                Style::default().fg(MUTED_GRAY),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title)).alignment(Alignment::Center), header_layout[0]);

        self.render_progress(frame, header_layout[1], state);
    }

    /// Step progress dots; the identification step is hidden for new clients
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let steps = state.wizard.visible_steps();
        let current = state.wizard.current_step();
        let current_idx = steps.iter().position(|s| *s == current).unwrap_or(0);

        let mut spans = vec![Span::styled("  ", Style::default())];
        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));
            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        match state.wizard.current_step() {
            WizardStep::Welcome => self.render_welcome(frame, area, state),
            WizardStep::ClientName => self.render_client_name(frame, area, state),
            WizardStep::BasePresentation => self.render_base_presentation(frame, area, state),
            WizardStep::Identifications => self.render_identifications(frame, area, state),
            WizardStep::Review => match state.wizard.step5_mode() {
                Step5Mode::Review => self.render_review(frame, area, state),
                Step5Mode::AddProduct => self.render_add_product(frame, area, state),
                Step5Mode::AddSlide => self.render_add_slide(frame, area, state),
            },
            WizardStep::Consolidate => self.render_consolidate(frame, area, state),
        }
    }

    fn step_block(step: WizardStep) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {}. {} ", step.number(), step.title()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    fn render_welcome(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Self::step_block(WizardStep::Welcome);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Min(6), Constraint::Length(2)])
            .split(inner);

        let question = Paragraph::new(Span::styled(
            WizardStep::Welcome.description(),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(question, layout[0]);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1]);

        for (idx, client_type) in [ClientType::New, ClientType::Existing].into_iter().enumerate() {
            let highlighted = state.view.client_choice == client_type;
            let border = if highlighted { GOLD } else { SUBDUED_BORDER };
            let card = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("[{}] {}", idx + 1, client_type.label()),
                    Style::default()
                        .fg(if highlighted { GOLD } else { SOFT_WHITE })
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(client_type.description(), Style::default().fg(MUTED_GRAY))),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(DARK_BG)),
            );
            frame.render_widget(card, cards[idx]);
        }

        let user = Paragraph::new(Line::from(vec![
            Span::styled("User type: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                state.wizard.user_type().label(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (u to switch)", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(user, layout[2]);
    }

    fn render_client_name(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Self::step_block(WizardStep::ClientName);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Length(3), // Input field
                Constraint::Length(2), // User type
                Constraint::Min(0),
            ])
            .split(inner);

        let desc = Paragraph::new(Span::styled(
            WizardStep::ClientName.description(),
            Style::default().fg(SOFT_WHITE),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(desc, layout[0]);

        let name = state.wizard.client_name();
        let text = if state.view.show_cursor {
            format!("{name}│")
        } else {
            name.to_string()
        };
        frame.render_widget(Self::input_box(text, "Client name", true), layout[1]);

        let user = Paragraph::new(Line::from(vec![
            Span::styled("Prepared by: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                state.wizard.user_type().label(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Tab to switch RM/DB)", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(user, layout[2]);
    }

    fn input_box(text: String, title: &str, focused: bool) -> Paragraph<'static> {
        Paragraph::new(text).style(Style::default().fg(SOFT_WHITE)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { GOLD } else { SUBDUED_BORDER }))
                .title(format!(" {title} "))
                .style(Style::default().bg(DARK_BG)),
        )
    }

    fn draft_text(input: &TextInput, show_cursor: bool) -> String {
        if show_cursor {
            let (before, after) = input.split_at_cursor();
            format!("{before}│{after}")
        } else {
            input.value().to_string()
        }
    }

    fn render_base_presentation(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let deck = state.wizard.deck();
        let slides: Vec<&Slide> = deck.catalog(SlideCategory::Base).iter().collect();
        let title = format!(
            "{}. {} - {}",
            WizardStep::BasePresentation.number(),
            WizardStep::BasePresentation.title(),
            WizardStep::BasePresentation.description()
        );
        self.viewer.render(
            frame,
            area,
            &ViewerProps {
                title: &title,
                slides: &slides,
                current: state.view.base_viewer.current_index(),
                mode: MarkMode::Delete,
                marks: deck.deleted(SlideCategory::Base),
                show_thumbnails: state.config.ui.show_thumbnails,
                focused: true,
            },
        );
    }

    fn render_identifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let block = Self::step_block(WizardStep::Identifications);
        let inner = block.inner(columns[0]);
        frame.render_widget(block, columns[0]);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(2)])
            .split(inner);

        let focus = state.view.identification_focus;
        let draft = Self::draft_text(
            &state.view.identification_input,
            state.view.show_cursor && focus == IdentificationFocus::Input,
        );
        frame.render_widget(
            Self::input_box(draft, "Identification", focus == IdentificationFocus::Input),
            layout[0],
        );

        let items: Vec<ListItem> = state
            .wizard
            .identifications()
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let selected = focus == IdentificationFocus::List && idx == state.view.selected_identification;
                let style = if selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(GOLD)),
                    Span::styled(value.as_str(), style),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focus == IdentificationFocus::List {
                    GOLD
                } else {
                    SUBDUED_BORDER
                }))
                .title(format!(" Identifications ({}) ", state.wizard.identifications().len())),
        );
        frame.render_widget(list, layout[1]);

        let status = if state.is_generating_report() {
            Span::styled("Generating report...", Style::default().fg(WARNING_YELLOW))
        } else if state.wizard.report_generated() {
            Span::styled("✓ Report generated", Style::default().fg(SELECTION_GREEN))
        } else {
            Span::styled("Ctrl+R to generate the report", Style::default().fg(MUTED_GRAY))
        };
        frame.render_widget(Paragraph::new(Line::from(status)).alignment(Alignment::Center), layout[2]);

        let deck = state.wizard.deck();
        let slides: Vec<&Slide> = deck.catalog(SlideCategory::PerformanceReport).iter().collect();
        self.viewer.render(
            frame,
            columns[1],
            &ViewerProps {
                title: "Performance Report",
                slides: &slides,
                current: state.view.report_viewer.current_index(),
                mode: MarkMode::Delete,
                marks: deck.deleted(SlideCategory::PerformanceReport),
                show_thumbnails: state.config.ui.show_thumbnails,
                focused: focus == IdentificationFocus::Report,
            },
        );
    }

    fn render_review(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let slides = state.wizard.deck().merged_deck();
        let summary = state.wizard.summary();
        let title = format!(
            "{}. {} - {} slides",
            WizardStep::Review.number(),
            WizardStep::Review.title(),
            summary.total
        );
        self.viewer.render(
            frame,
            area,
            &ViewerProps {
                title: &title,
                slides: &slides,
                current: state.view.review_viewer.current_index(),
                mode: MarkMode::View,
                marks: None,
                show_thumbnails: state.config.ui.show_thumbnails,
                focused: true,
            },
        );
    }

    fn render_add_product(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let picker = &state.view.product_picker;
        if let Some(preview) = picker.preview() {
            let slides = preview.slides();
            let title = format!("Add Product - {}", preview.file.name);
            self.viewer.render(
                frame,
                area,
                &ViewerProps {
                    title: &title,
                    slides: &slides,
                    current: preview.navigator.current_index(),
                    mode: MarkMode::Add,
                    marks: Some(&preview.selection),
                    show_thumbnails: state.config.ui.show_thumbnails,
                    focused: true,
                },
            );
            return;
        }

        let rows = picker.rows(state.wizard.deck().product_slides());
        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let selected = idx == picker.cursor();
                let indent = "  ".repeat(row.depth());
                let line = match row {
                    PickerRow::Category {
                        name,
                        expanded,
                        has_children,
                        ..
                    } => {
                        let icon = match (has_children, expanded) {
                            (false, _) => "·",
                            (true, true) => "▼",
                            (true, false) => "▶",
                        };
                        Line::from(vec![
                            Span::raw(indent),
                            Span::styled(format!("{icon} "), Style::default().fg(CORNFLOWER_BLUE)),
                            Span::styled(name.as_str(), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
                        ])
                    }
                    PickerRow::File {
                        name,
                        slide_count,
                        in_deck,
                        ..
                    } => Line::from(vec![
                        Span::raw(indent),
                        Span::styled("▤ ", Style::default().fg(MUTED_GRAY)),
                        Span::styled(name.as_str(), Style::default().fg(SOFT_WHITE)),
                        Span::styled(format!("  {slide_count} slides"), Style::default().fg(MUTED_GRAY)),
                        if *in_deck > 0 {
                            Span::styled(format!("  ✓ {in_deck} in deck"), Style::default().fg(SELECTION_GREEN))
                        } else {
                            Span::raw("")
                        },
                    ]),
                };
                let item = ListItem::new(line);
                if selected {
                    item.style(Style::default().bg(SUBDUED_BORDER))
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORNFLOWER_BLUE))
                .style(Style::default().bg(PANEL_BG))
                .title(" Add Product - choose a presentation file ")
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(list, area);
    }

    fn render_add_slide(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Add Slide - upload images ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Min(2)])
            .split(inner);

        let desc = Paragraph::new(Line::from(vec![
            Span::styled("Image files to add as slides ", Style::default().fg(SOFT_WHITE)),
            Span::styled("(comma-separated)", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(desc, layout[0]);

        let draft = Self::draft_text(&state.view.upload_input, state.view.show_cursor);
        frame.render_widget(Self::input_box(draft, "Files", true), layout[1]);

        let custom: Vec<Line> = state
            .wizard
            .deck()
            .custom_slides()
            .iter()
            .map(|s| Line::from(Span::styled(format!("  • {}", s.title), Style::default().fg(MUTED_GRAY))))
            .collect();
        frame.render_widget(Paragraph::new(custom), layout[2]);
    }

    fn render_consolidate(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Self::step_block(WizardStep::Consolidate);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let summary = state.wizard.summary();
        let row = |label: &str, count: usize| {
            Line::from(vec![
                Span::styled(format!("  {label:<20}"), Style::default().fg(SOFT_WHITE)),
                Span::styled(count.to_string(), Style::default().fg(GOLD)),
            ])
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Presentation for {}", state.wizard.client_name().trim()),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            row(SlideCategory::Base.label(), summary.base),
        ];
        if state.wizard.client_type().is_some_and(|ct| ct.needs_identifications()) {
            lines.push(row(SlideCategory::PerformanceReport.label(), summary.performance));
        }
        lines.push(row(SlideCategory::Product.label(), summary.product));
        lines.push(row(SlideCategory::Custom.label(), summary.custom));
        lines.push(Line::from(Span::styled("  ─────────────────────────", Style::default().fg(SUBDUED_BORDER))));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", "Total"), Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            Span::styled(summary.total.to_string(), Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(""));
        lines.push(if state.is_exporting() {
            Line::from(Span::styled("Exporting...", Style::default().fg(WARNING_YELLOW)))
        } else {
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" to export the presentation", Style::default().fg(MUTED_GRAY)),
            ])
        });

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.wizard.current_step() {
            WizardStep::Welcome => vec![("←/→", "Choose"), ("Enter", "Select"), ("u", "User type"), ("h", "History")],
            WizardStep::ClientName => vec![("Esc", "Back"), ("Tab", "User type"), ("Enter", "Next")],
            WizardStep::BasePresentation => {
                vec![("Esc", "Back"), ("←/→", "Browse"), ("Space", "Delete/Restore"), ("Enter", "Next")]
            }
            WizardStep::Identifications => vec![
                ("Esc", "Back"),
                ("Tab", "Focus"),
                ("Enter", "Add / Next"),
                ("Ctrl+R", "Generate report"),
            ],
            WizardStep::Review => match state.wizard.step5_mode() {
                Step5Mode::Review => vec![
                    ("Esc", "Back"),
                    ("←/→", "Browse"),
                    ("</>", "Move"),
                    ("d", "Remove"),
                    ("p", "Add product"),
                    ("a", "Add slide"),
                    ("Enter", "Next"),
                ],
                Step5Mode::AddProduct if state.view.product_picker.is_previewing() => {
                    vec![("Esc", "Files"), ("Space", "Select"), ("a", "All"), ("Enter", "Confirm")]
                }
                Step5Mode::AddProduct => vec![("Esc", "Done"), ("↑/↓", "Move"), ("Enter", "Open")],
                Step5Mode::AddSlide => vec![("Esc", "Done"), ("Enter", "Upload")],
            },
            WizardStep::Consolidate => vec![("Esc", "Back"), ("Enter", "Export")],
        }
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];
        for (idx, (key, label)) in Self::hints(state).into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
            }
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(key, Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(MUTED_GRAY)));
        }
        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[F1]", Style::default().fg(GOLD)));
        spans.push(Span::styled(" Help", Style::default().fg(MUTED_GRAY)));

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), inner);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}

