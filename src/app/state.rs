// ABOUTME: Application state - single owner of the wizard, its view state and background work
// Every UI action goes through here so rendering only ever borrows this state

use super::task::PendingTask;
use crate::catalog::{generate_performance_report_delayed, CatalogProvider, MockCatalog};
use crate::components::wizard::{
    IdentificationFocus, Step5Mode, TextInput, Transition, ValidationError, WizardState, WizardStep,
    WizardView,
};
use crate::config::AppConfig;
use crate::export::{DeckExporter, ExportError, ExportReceipt, ExportRequest, ManifestExporter, SimulatedExporter};
use crate::models::{
    ClientType, PresentationHistory, PresentationRecord, ReorderEvent, Slide, SlideCategory, SlideNavigator,
};
use crate::upload::parse_upload_input;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self::new(message, NotificationType::Success, Duration::from_secs(3))
    }

    pub fn error(message: String) -> Self {
        Self::new(message, NotificationType::Error, Duration::from_secs(5))
    }

    pub fn info(message: String) -> Self {
        Self::new(message, NotificationType::Info, Duration::from_secs(3))
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, NotificationType::Warning, Duration::from_secs(4))
    }

    fn new(message: String, notification_type: NotificationType, duration: Duration) -> Self {
        Self {
            message,
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Wizard,
    History,
}

/// Report generation in flight for one identification-step visit
pub struct PendingReport {
    pub ticket: u64,
    pub task: PendingTask<Vec<Slide>>,
}

type ExportOutcome = (ExportRequest, Result<ExportReceipt, ExportError>);

pub struct AppState {
    pub wizard: WizardState,
    pub view: WizardView,
    pub current_view: View,
    pub show_help: bool,
    pub history: PresentationHistory,
    pub history_cursor: usize,
    pub notifications: Vec<Notification>,
    pub config: AppConfig,
    pub should_quit: bool,
    pub ui_needs_refresh: bool,
    catalog: Box<dyn CatalogProvider>,
    exporter: Arc<dyn DeckExporter + Send + Sync>,
    pending_report: Option<PendingReport>,
    pending_export: Option<PendingTask<ExportOutcome>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let exporter: Arc<dyn DeckExporter + Send + Sync> = match &config.export.output_dir {
            Some(dir) => {
                info!("Deck manifests will be written to {}", dir.display());
                Arc::new(ManifestExporter::new(dir.clone()))
            }
            None => Arc::new(SimulatedExporter),
        };
        Self::with_collaborators(config, Box::new(MockCatalog::new()), exporter)
    }

    pub fn with_collaborators(
        config: AppConfig,
        catalog: Box<dyn CatalogProvider>,
        exporter: Arc<dyn DeckExporter + Send + Sync>,
    ) -> Self {
        let view = WizardView::new(catalog.product_catalog());
        Self {
            wizard: WizardState::new(config.wizard.default_user_type),
            view,
            current_view: View::Wizard,
            show_help: false,
            history: PresentationHistory::with_demo_entries(),
            history_cursor: 0,
            notifications: Vec::new(),
            config,
            should_quit: false,
            ui_needs_refresh: false,
            catalog,
            exporter,
            pending_report: None,
            pending_export: None,
        }
    }

    // ============================================================================
    // Notifications
    // ============================================================================

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
        self.ui_needs_refresh = true;
    }

    pub fn add_success_notification(&mut self, message: String) {
        let duration = Duration::from_secs(self.config.ui.notification_secs);
        self.add_notification(Notification::success(message).with_duration(duration));
    }

    pub fn add_error_notification(&mut self, message: String) {
        self.add_notification(Notification::error(message));
    }

    pub fn add_info_notification(&mut self, message: String) {
        let duration = Duration::from_secs(self.config.ui.notification_secs);
        self.add_notification(Notification::info(message).with_duration(duration));
    }

    pub fn add_warning_notification(&mut self, message: String) {
        self.add_notification(Notification::warning(message));
    }

    pub fn cleanup_expired_notifications(&mut self) {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired());
        if self.notifications.len() != before {
            self.ui_needs_refresh = true;
        }
    }

    pub fn get_current_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.is_expired()).collect()
    }

    fn report_validation(&mut self, err: ValidationError) {
        self.add_warning_notification(err.to_string());
    }

    // ============================================================================
    // Views and overlays
    // ============================================================================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_history(&mut self) {
        self.current_view = match self.current_view {
            View::Wizard => View::History,
            View::History => View::Wizard,
        };
        self.history_cursor = 0;
    }

    pub fn history_up(&mut self) {
        self.history_cursor = self.history_cursor.saturating_sub(1);
    }

    pub fn history_down(&mut self) {
        if self.history_cursor + 1 < self.history.len() {
            self.history_cursor += 1;
        }
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.cancel_pending_tasks();
        self.should_quit = true;
    }

    pub fn cancel_pending_tasks(&mut self) {
        self.pending_report = None;
        self.pending_export = None;
    }

    // ============================================================================
    // Wizard navigation
    // ============================================================================

    pub fn is_generating_report(&self) -> bool {
        self.pending_report.is_some()
    }

    pub fn is_exporting(&self) -> bool {
        self.pending_export.is_some()
    }

    /// Whether typed characters currently edit a text field
    pub fn is_typing(&self) -> bool {
        self.current_view == View::Wizard
            && !self.show_help
            && self
                .view
                .is_typing(self.wizard.current_step(), self.wizard.step5_mode() == Step5Mode::AddSlide)
    }

    pub fn toggle_client_choice(&mut self) {
        self.view.client_choice = self.view.client_choice.toggle();
    }

    pub fn select_client_type(&mut self, client_type: ClientType) {
        match self.wizard.select_client_type(client_type, self.catalog.as_ref()) {
            Ok(transition) => {
                self.view.client_choice = client_type;
                self.view.base_viewer.first();
                self.after_transition(transition);
            }
            Err(err) => self.report_validation(err),
        }
    }

    pub fn select_highlighted_client_type(&mut self) {
        self.select_client_type(self.view.client_choice);
    }

    pub fn advance(&mut self) {
        if self.is_exporting() {
            return;
        }
        match self.wizard.advance() {
            Ok(transition) => self.after_transition(transition),
            Err(err) => self.report_validation(err),
        }
    }

    pub fn retreat(&mut self) {
        if self.is_exporting() {
            return;
        }
        let transition = self.wizard.retreat();
        self.after_transition(transition);
    }

    fn after_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Moved { from, to } => {
                if from == WizardStep::Identifications && self.pending_report.take().is_some() {
                    info!("Cancelled report generation after leaving the identification step");
                }
                if to == WizardStep::Review {
                    self.view.review_viewer.clamp(self.wizard.deck().len());
                }
                if to == WizardStep::Identifications {
                    self.view.identification_focus = IdentificationFocus::Input;
                }
                self.leave_add_modes();
            }
            Transition::ReturnedToReview => {
                // Product edits in the picker can shrink the deck
                self.view.review_viewer.clamp(self.wizard.deck().len());
                self.leave_add_modes();
            }
            Transition::Stayed => {}
        }
        self.ui_needs_refresh = true;
    }

    fn leave_add_modes(&mut self) {
        self.view.product_picker.reset();
        self.view.upload_input.take();
    }

    pub fn toggle_user_type(&mut self) {
        self.wizard.toggle_user_type();
    }

    // ============================================================================
    // Text input
    // ============================================================================

    pub fn input_char(&mut self, c: char) {
        match self.wizard.current_step() {
            WizardStep::ClientName => self.wizard.push_client_name_char(c),
            WizardStep::Identifications => self.view.identification_input.input_char(c),
            WizardStep::Review if self.wizard.step5_mode() == Step5Mode::AddSlide => {
                self.view.upload_input.input_char(c)
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.wizard.current_step() {
            WizardStep::ClientName => self.wizard.pop_client_name_char(),
            WizardStep::Identifications => self.view.identification_input.backspace(),
            WizardStep::Review if self.wizard.step5_mode() == Step5Mode::AddSlide => {
                self.view.upload_input.backspace()
            }
            _ => {}
        }
    }

    fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.wizard.current_step() {
            WizardStep::Identifications => Some(&mut self.view.identification_input),
            WizardStep::Review if self.wizard.step5_mode() == Step5Mode::AddSlide => {
                Some(&mut self.view.upload_input)
            }
            _ => None,
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(input) = self.active_input() {
            input.delete();
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(input) = self.active_input() {
            input.cursor_left();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(input) = self.active_input() {
            input.cursor_right();
        }
    }

    pub fn cursor_home(&mut self) {
        if let Some(input) = self.active_input() {
            input.cursor_home();
        }
    }

    pub fn cursor_end(&mut self) {
        if let Some(input) = self.active_input() {
            input.cursor_end();
        }
    }

    // ============================================================================
    // Identifications and report
    // ============================================================================

    pub fn cycle_identification_focus(&mut self) {
        self.view.identification_focus = self.view.identification_focus.next();
    }

    /// Enter on the identification input: add the draft, or continue when it is empty
    pub fn submit_identification(&mut self) {
        if self.view.identification_input.value().trim().is_empty() {
            self.view.identification_input.take();
            self.advance();
            return;
        }
        let draft = self.view.identification_input.take();
        if !self.wizard.add_identification(&draft) {
            self.add_info_notification(format!("'{}' is already in the list", draft.trim()));
            return;
        }
        self.pending_report = None;
        self.view.selected_identification = self.wizard.identifications().len() - 1;
    }

    pub fn identification_up(&mut self) {
        self.view.selected_identification = self.view.selected_identification.saturating_sub(1);
    }

    pub fn identification_down(&mut self) {
        if self.view.selected_identification + 1 < self.wizard.identifications().len() {
            self.view.selected_identification += 1;
        }
    }

    pub fn remove_selected_identification(&mut self) {
        let Some(value) = self
            .wizard
            .identifications()
            .get(self.view.selected_identification)
            .cloned()
        else {
            return;
        };
        if self.wizard.remove_identification(&value) {
            self.pending_report = None;
            let len = self.wizard.identifications().len();
            self.view.selected_identification = self.view.selected_identification.min(len.saturating_sub(1));
            self.add_info_notification(format!("Removed {value}"));
        }
    }

    pub fn generate_report(&mut self) {
        match self.wizard.request_report() {
            Ok(request) => {
                let delay = self.config.simulation.report_delay();
                let task = PendingTask::spawn(
                    "performance report",
                    generate_performance_report_delayed(request.identifications, delay),
                );
                // Replacing an older pending report aborts it
                self.pending_report = Some(PendingReport {
                    ticket: request.ticket,
                    task,
                });
                self.add_info_notification("Generating performance report...".to_string());
            }
            Err(err) => self.report_validation(err),
        }
    }

    fn poll_report(&mut self) {
        let Some(pending) = self.pending_report.as_mut() else {
            return;
        };
        let Some(result) = pending.task.poll() else {
            return;
        };
        let ticket = pending.ticket;
        self.pending_report = None;

        match result {
            Ok(slides) => {
                let count = slides.len();
                if self.wizard.complete_report(ticket, slides) {
                    self.view.report_viewer.first();
                    self.add_success_notification(format!("Performance report ready ({count} slides)"));
                }
            }
            Err(err) => {
                error!("Report generation failed: {}", err);
                self.add_error_notification("Report generation failed".to_string());
            }
        }
    }

    // ============================================================================
    // Slide viewers
    // ============================================================================

    /// Slides shown by the viewer active on the current screen
    pub fn visible_slides(&self) -> Vec<&Slide> {
        match self.wizard.current_step() {
            WizardStep::BasePresentation => self.wizard.deck().catalog(SlideCategory::Base).iter().collect(),
            WizardStep::Identifications => self
                .wizard
                .deck()
                .catalog(SlideCategory::PerformanceReport)
                .iter()
                .collect(),
            WizardStep::Review => match self.wizard.step5_mode() {
                Step5Mode::AddProduct => self
                    .view
                    .product_picker
                    .preview()
                    .map(|p| p.slides())
                    .unwrap_or_default(),
                _ => self.wizard.deck().merged_deck(),
            },
            _ => Vec::new(),
        }
    }

    fn with_viewer<R>(&mut self, f: impl FnOnce(&mut SlideNavigator, usize) -> R) -> Option<R> {
        let len = self.visible_slides().len();
        let navigator = match self.wizard.current_step() {
            WizardStep::BasePresentation => &mut self.view.base_viewer,
            WizardStep::Identifications if self.view.identification_focus == IdentificationFocus::Report => {
                &mut self.view.report_viewer
            }
            WizardStep::Review => match self.wizard.step5_mode() {
                Step5Mode::Review => &mut self.view.review_viewer,
                Step5Mode::AddProduct => &mut self.view.product_picker.preview_mut()?.navigator,
                Step5Mode::AddSlide => return None,
            },
            _ => return None,
        };
        Some(f(navigator, len))
    }

    pub fn slide_next(&mut self) {
        self.with_viewer(|nav, len| nav.next(len));
    }

    pub fn slide_previous(&mut self) {
        self.with_viewer(|nav, _| nav.previous());
    }

    pub fn slide_first(&mut self) {
        self.with_viewer(|nav, _| nav.first());
    }

    pub fn slide_last(&mut self) {
        self.with_viewer(|nav, len| nav.last(len));
    }

    /// Jump via the thumbnail strip
    pub fn slide_jump(&mut self, index: usize) {
        if let Some(Err(err)) = self.with_viewer(|nav, len| nav.jump_to(index, len)) {
            debug!("Ignored thumbnail jump: {}", err);
        }
    }

    pub fn current_viewer_index(&self) -> usize {
        match self.wizard.current_step() {
            WizardStep::BasePresentation => self.view.base_viewer.current_index(),
            WizardStep::Identifications => self.view.report_viewer.current_index(),
            WizardStep::Review => match self.wizard.step5_mode() {
                Step5Mode::AddProduct => self
                    .view
                    .product_picker
                    .preview()
                    .map(|p| p.navigator.current_index())
                    .unwrap_or(0),
                _ => self.view.review_viewer.current_index(),
            },
            _ => 0,
        }
    }

    /// Space in a viewer: delete-mark on base/report, add-mark in a product preview
    pub fn toggle_current_mark(&mut self) {
        let step = self.wizard.current_step();
        if step == WizardStep::Review && self.wizard.step5_mode() == Step5Mode::AddProduct {
            if let Some(preview) = self.view.product_picker.preview_mut() {
                preview.toggle_current();
            }
            return;
        }
        let target = match step {
            WizardStep::BasePresentation => Some(SlideCategory::Base),
            WizardStep::Identifications if self.view.identification_focus == IdentificationFocus::Report => {
                Some(SlideCategory::PerformanceReport)
            }
            _ => None,
        };
        let Some(category) = target else {
            return;
        };
        let index = self.current_viewer_index();
        let Some(id) = self.wizard.deck().catalog(category).get(index).map(|s| s.id) else {
            return;
        };
        if let Err(err) = self.wizard.deck_mut().toggle_mark(id) {
            warn!("Toggle failed: {}", err);
        }
    }

    /// Drag the current review slide one place left or right
    pub fn move_current_slide(&mut self, forward: bool) {
        if self.wizard.current_step() != WizardStep::Review || self.wizard.step5_mode() != Step5Mode::Review {
            return;
        }
        let len = self.wizard.deck().len();
        let from = self.view.review_viewer.current_index();
        let to = if forward {
            if from + 1 >= len {
                return;
            }
            from + 1
        } else {
            if from == 0 {
                return;
            }
            from - 1
        };
        match self.wizard.deck_mut().move_slide(from, to) {
            Ok(()) => self.view.review_viewer.apply_reorder(ReorderEvent { from, to }),
            Err(err) => warn!("Reorder failed: {}", err),
        }
    }

    pub fn remove_current_slide(&mut self) {
        if self.wizard.current_step() != WizardStep::Review || self.wizard.step5_mode() != Step5Mode::Review {
            return;
        }
        let index = self.view.review_viewer.current_index();
        let Some(slide) = self.wizard.deck().merged_deck().get(index).map(|s| (*s).clone()) else {
            return;
        };
        match self.wizard.deck_mut().remove_from_deck(slide.id) {
            Ok(()) => {
                let len = self.wizard.deck().len();
                self.view.review_viewer.clamp(len);
                self.add_info_notification(format!("Removed '{}'", slide.title));
            }
            Err(err) => self.add_error_notification(err.to_string()),
        }
    }

    // ============================================================================
    // Review sub-modes
    // ============================================================================

    pub fn enter_add_product(&mut self) {
        match self.wizard.enter_add_product() {
            Ok(()) => self.view.product_picker.reset(),
            Err(err) => self.report_validation(err),
        }
    }

    pub fn enter_add_slide(&mut self) {
        match self.wizard.enter_add_slide() {
            Ok(()) => {
                self.view.upload_input.take();
            }
            Err(err) => self.report_validation(err),
        }
    }

    pub fn picker_up(&mut self) {
        self.view.product_picker.cursor_up();
    }

    pub fn picker_down(&mut self) {
        let rows = self.view.product_picker.rows(self.wizard.deck().product_slides()).len();
        self.view.product_picker.cursor_down(rows);
    }

    pub fn picker_activate(&mut self) {
        let products = self.wizard.deck().product_slides().to_vec();
        self.view.product_picker.activate(&products);
    }

    pub fn picker_toggle_all(&mut self) {
        if let Some(preview) = self.view.product_picker.preview_mut() {
            preview.toggle_all();
        }
    }

    pub fn picker_close_preview(&mut self) {
        self.view.product_picker.close_preview();
    }

    pub fn picker_confirm(&mut self) {
        let Some(preview) = self.view.product_picker.take_preview() else {
            return;
        };
        match self
            .wizard
            .confirm_product_selection(&preview.file.slides, &preview.selection)
        {
            Ok((0, 0)) => self.add_info_notification("No changes to the presentation".to_string()),
            Ok((added, removed)) => self.add_success_notification(format!(
                "{}: {added} added, {removed} removed",
                preview.file.name
            )),
            Err(err) => self.report_validation(err),
        }
    }

    pub fn submit_upload(&mut self) {
        let files = parse_upload_input(self.view.upload_input.value());
        if files.is_empty() {
            self.add_warning_notification("Enter at least one image path".to_string());
            return;
        }
        match self.wizard.upload_custom_slides(&files) {
            Ok(outcome) => {
                for rejected in &outcome.rejected {
                    self.add_error_notification(rejected.to_string());
                }
                if !outcome.slides.is_empty() {
                    self.add_success_notification(format!("Added {} custom slide(s)", outcome.slides.len()));
                    self.view.upload_input.take();
                    self.advance();
                }
            }
            Err(err) => self.report_validation(err),
        }
    }

    // ============================================================================
    // Consolidation
    // ============================================================================

    pub fn consolidate(&mut self) {
        if self.is_exporting() {
            return;
        }
        let request = match self.wizard.begin_consolidation() {
            Ok(request) => request,
            Err(err) => {
                self.report_validation(err);
                return;
            }
        };
        let exporter = Arc::clone(&self.exporter);
        let delay = self.config.simulation.export_delay();
        self.pending_export = Some(PendingTask::spawn("export", async move {
            tokio::time::sleep(delay).await;
            // Exporters may write files, so keep them off the async workers
            let blocking_request = request.clone();
            let result = tokio::task::spawn_blocking(move || exporter.export(&blocking_request))
                .await
                .unwrap_or_else(|e| Err(ExportError::Other(format!("Export task failed: {e}"))));
            (request, result)
        }));
        self.add_info_notification("Exporting presentation...".to_string());
    }

    fn poll_export(&mut self) {
        let Some(task) = self.pending_export.as_mut() else {
            return;
        };
        let Some(result) = task.poll() else {
            return;
        };
        self.pending_export = None;

        match result {
            Ok((request, Ok(receipt))) => {
                self.history.record(PresentationRecord::new(
                    request.client_name,
                    request.client_type,
                    request.user_type,
                    receipt.slide_count,
                ));
                self.wizard.finish_consolidation();
                self.view = WizardView::new(self.catalog.product_catalog());
                self.add_success_notification(format!(
                    "Presentation exported as {} ({} slides)",
                    receipt.file_name, receipt.slide_count
                ));
            }
            Ok((_, Err(err))) => {
                error!("Export failed: {}", err);
                self.add_error_notification(err.to_string());
            }
            Err(err) => {
                error!("Export task failed: {}", err);
                self.add_error_notification("Export failed".to_string());
            }
        }
    }

    /// Poll background work and expire notifications
    pub fn tick(&mut self) {
        self.cleanup_expired_notifications();
        self.poll_report();
        self.poll_export();
        if self.is_typing() {
            self.view.toggle_cursor();
        } else {
            self.view.show_cursor = true;
        }
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn tick(&mut self) {
        self.state.tick();
    }

    /// Check if UI needs immediate refresh and clear the flag
    pub fn needs_ui_refresh(&mut self) -> bool {
        if self.state.ui_needs_refresh {
            self.state.ui_needs_refresh = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.simulation.report_delay_ms = 0;
        config.simulation.export_delay_ms = 0;
        config
    }

    #[test]
    fn test_notification_expiry() {
        let mut notification = Notification::info("hi".to_string());
        assert!(!notification.is_expired());
        notification.duration = Duration::ZERO;
        notification.created_at = Instant::now() - Duration::from_millis(5);
        assert!(notification.is_expired());
    }

    #[test]
    fn test_validation_failure_becomes_warning() {
        let mut state = AppState::new(instant_config());
        state.advance();
        assert_eq!(state.wizard.current_step(), WizardStep::Welcome);
        let notifications = state.get_current_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].notification_type, NotificationType::Warning);
    }

    #[test]
    fn test_typing_only_on_text_steps() {
        let mut state = AppState::new(instant_config());
        assert!(!state.is_typing());
        state.select_client_type(ClientType::New);
        assert!(state.is_typing());
        state.input_char('A');
        state.backspace();
        state.input_char('B');
        assert_eq!(state.wizard.client_name(), "B");
    }

    #[test]
    fn test_review_reorder_keeps_viewer_on_slide() {
        let mut state = AppState::new(instant_config());
        state.select_client_type(ClientType::New);
        state.input_char('X');
        state.advance();
        state.advance();
        assert_eq!(state.wizard.current_step(), WizardStep::Review);

        state.move_current_slide(true);
        assert_eq!(state.view.review_viewer.current_index(), 1);
        assert_eq!(state.visible_slides()[1].title, "Welcome");

        state.move_current_slide(false);
        state.move_current_slide(false);
        assert_eq!(state.view.review_viewer.current_index(), 0);
    }
}
