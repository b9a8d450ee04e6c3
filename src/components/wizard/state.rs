// ABOUTME: State management for the presentation wizard
// Owns the deck and enforces step ordering, skip rules and validation gates

use super::error::{ConsolidateError, ValidationError};
use crate::catalog::CatalogProvider;
use crate::export::{DeckExporter, ExportReceipt, ExportRequest};
use crate::models::{ClientType, DeckSummary, PresentationDeck, SelectionSet, Slide, SlideCategory, UserType};
use crate::upload::{upload_images, UploadFile, UploadOutcome};
use tracing::{debug, info, warn};

/// Steps in the presentation wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Welcome,
    ClientName,
    BasePresentation,
    Identifications,
    Review,
    Consolidate,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::Welcome,
            Self::ClientName,
            Self::BasePresentation,
            Self::Identifications,
            Self::Review,
            Self::Consolidate,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::Welcome => 1,
            Self::ClientName => 2,
            Self::BasePresentation => 3,
            Self::Identifications => 4,
            Self::Review => 5,
            Self::Consolidate => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Start",
            Self::ClientName => "Client",
            Self::BasePresentation => "Base Presentation",
            Self::Identifications => "Identifications",
            Self::Review => "Review",
            Self::Consolidate => "Consolidate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Welcome => "Who is this presentation for?",
            Self::ClientName => "Enter the client's name",
            Self::BasePresentation => "Remove the base slides you don't need",
            Self::Identifications => "Generate the client's performance report",
            Self::Review => "Reorder, remove and add slides",
            Self::Consolidate => "Export the final presentation",
        }
    }

    /// Whether this step is shown for the given client type
    pub fn applies_to(&self, client_type: Option<ClientType>) -> bool {
        match self {
            Self::Identifications => client_type.map_or(true, |ct| ct.needs_identifications()),
            _ => true,
        }
    }
}

/// Sub-mode of the review step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step5Mode {
    #[default]
    Review,
    AddProduct,
    AddSlide,
}

impl Step5Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::AddProduct => "Add Product",
            Self::AddSlide => "Add Slide",
        }
    }
}

/// Result of a successful navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: WizardStep, to: WizardStep },
    /// Left an add sub-mode of the review step
    ReturnedToReview,
    Stayed,
}

/// A report generation the caller should run and hand back with `complete_report`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub ticket: u64,
    pub identifications: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct WizardState {
    current_step: WizardStep,
    client_type: Option<ClientType>,
    user_type: UserType,
    default_user_type: UserType,
    client_name: String,
    identifications: Vec<String>,
    report_generated: bool,
    step5_mode: Step5Mode,
    deck: PresentationDeck,
    /// Only the report request carrying this ticket may complete
    report_ticket: u64,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(UserType::default())
    }
}

impl WizardState {
    pub fn new(default_user_type: UserType) -> Self {
        Self {
            current_step: WizardStep::Welcome,
            client_type: None,
            user_type: default_user_type,
            default_user_type,
            client_name: String::new(),
            identifications: Vec::new(),
            report_generated: false,
            step5_mode: Step5Mode::Review,
            deck: PresentationDeck::new(),
            report_ticket: 0,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn client_type(&self) -> Option<ClientType> {
        self.client_type
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn identifications(&self) -> &[String] {
        &self.identifications
    }

    pub fn report_generated(&self) -> bool {
        self.report_generated
    }

    pub fn step5_mode(&self) -> Step5Mode {
        self.step5_mode
    }

    pub fn deck(&self) -> &PresentationDeck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut PresentationDeck {
        &mut self.deck
    }

    pub fn summary(&self) -> DeckSummary {
        self.deck.summary()
    }

    /// Steps shown in the progress bar for the current client type
    pub fn visible_steps(&self) -> Vec<WizardStep> {
        WizardStep::all()
            .iter()
            .copied()
            .filter(|step| step.applies_to(self.client_type))
            .collect()
    }

    fn needs_identifications(&self) -> bool {
        self.client_type.is_some_and(|ct| ct.needs_identifications())
    }

    fn invalid(&self, action: &'static str) -> ValidationError {
        warn!("Rejected {} on step {}", action, self.current_step.title());
        ValidationError::InvalidAction {
            action,
            step: self.current_step.title(),
        }
    }

    fn move_to(&mut self, to: WizardStep) -> Transition {
        let from = self.current_step;
        if from == WizardStep::Identifications && to != from {
            // Drop any report still being generated for this visit
            self.report_ticket += 1;
        }
        self.current_step = to;
        self.step5_mode = Step5Mode::Review;
        info!("Wizard moved from step {} to step {}", from.number(), to.number());
        Transition::Moved { from, to }
    }

    /// Pick the client type on the welcome step and continue to the client name
    pub fn select_client_type(
        &mut self,
        client_type: ClientType,
        catalog: &dyn CatalogProvider,
    ) -> Result<Transition, ValidationError> {
        if self.current_step != WizardStep::Welcome {
            return Err(self.invalid("Choosing the client type"));
        }
        self.set_client_type(client_type, catalog);
        Ok(self.move_to(WizardStep::ClientName))
    }

    /// Set the client type, reloading the base catalog when it changes
    pub fn set_client_type(&mut self, client_type: ClientType, catalog: &dyn CatalogProvider) {
        if self.client_type == Some(client_type) && !self.deck.catalog(SlideCategory::Base).is_empty() {
            return;
        }
        self.client_type = Some(client_type);
        self.deck.load_base(catalog.base_slides(client_type));
        if !client_type.needs_identifications() {
            self.identifications.clear();
            self.invalidate_report();
        }
        info!("Client type set to {}", client_type.label());
    }

    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.client_name = name.into();
    }

    pub fn push_client_name_char(&mut self, c: char) {
        self.client_name.push(c);
    }

    pub fn pop_client_name_char(&mut self) {
        self.client_name.pop();
    }

    pub fn set_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
    }

    pub fn toggle_user_type(&mut self) {
        self.user_type = self.user_type.toggle();
    }

    /// Replace the identification list. Any change invalidates the report.
    pub fn set_identifications(&mut self, identifications: Vec<String>) {
        if identifications != self.identifications {
            self.identifications = identifications;
            self.invalidate_report();
        }
    }

    /// Add a trimmed identification. Empty input and duplicates are ignored.
    pub fn add_identification(&mut self, raw: &str) -> bool {
        let value = raw.trim();
        if value.is_empty() || self.identifications.iter().any(|i| i == value) {
            return false;
        }
        self.identifications.push(value.to_string());
        self.invalidate_report();
        true
    }

    pub fn remove_identification(&mut self, value: &str) -> bool {
        let before = self.identifications.len();
        self.identifications.retain(|i| i != value);
        if self.identifications.len() == before {
            return false;
        }
        self.invalidate_report();
        true
    }

    /// Setting the flag to false also drops the report slides
    pub fn set_report_generated(&mut self, generated: bool) {
        if generated {
            self.report_generated = true;
        } else {
            self.invalidate_report();
        }
    }

    fn invalidate_report(&mut self) {
        self.report_ticket += 1;
        if self.report_generated || !self.deck.catalog(SlideCategory::PerformanceReport).is_empty() {
            debug!("Performance report invalidated");
        }
        self.report_generated = false;
        self.deck.clear_performance();
    }

    /// Start a report generation for the current identifications
    pub fn request_report(&mut self) -> Result<ReportRequest, ValidationError> {
        if self.current_step != WizardStep::Identifications {
            return Err(self.invalid("Generating the report"));
        }
        if self.identifications.is_empty() {
            return Err(ValidationError::EmptyIdentificationSubmit);
        }
        self.report_ticket += 1;
        info!(
            "Requested performance report #{} for {} identification(s)",
            self.report_ticket,
            self.identifications.len()
        );
        Ok(ReportRequest {
            ticket: self.report_ticket,
            identifications: self.identifications.clone(),
        })
    }

    /// Apply a finished report. Returns false and discards the slides when the
    /// ticket is stale or the wizard left the identification step.
    pub fn complete_report(&mut self, ticket: u64, slides: Vec<Slide>) -> bool {
        if ticket != self.report_ticket || self.current_step != WizardStep::Identifications {
            debug!("Discarded stale performance report #{}", ticket);
            return false;
        }
        self.deck.load_performance(slides);
        self.report_generated = true;
        info!("Performance report #{} applied", ticket);
        true
    }

    pub fn advance(&mut self) -> Result<Transition, ValidationError> {
        match self.current_step {
            WizardStep::Welcome => {
                if self.client_type.is_none() {
                    return Err(ValidationError::MissingClientType);
                }
                Ok(self.move_to(WizardStep::ClientName))
            }
            WizardStep::ClientName => {
                if self.client_name.trim().is_empty() {
                    return Err(ValidationError::MissingClientName);
                }
                Ok(self.move_to(WizardStep::BasePresentation))
            }
            WizardStep::BasePresentation => {
                let Some(client_type) = self.client_type else {
                    return Err(ValidationError::MissingClientType);
                };
                let next = if client_type.needs_identifications() {
                    WizardStep::Identifications
                } else {
                    WizardStep::Review
                };
                Ok(self.move_to(next))
            }
            WizardStep::Identifications => {
                if self.identifications.is_empty() {
                    return Err(ValidationError::MissingIdentifications);
                }
                if !self.report_generated {
                    return Err(ValidationError::ReportNotGenerated);
                }
                Ok(self.move_to(WizardStep::Review))
            }
            WizardStep::Review => {
                if self.step5_mode != Step5Mode::Review {
                    self.step5_mode = Step5Mode::Review;
                    return Ok(Transition::ReturnedToReview);
                }
                Ok(self.move_to(WizardStep::Consolidate))
            }
            WizardStep::Consolidate => Ok(Transition::Stayed),
        }
    }

    pub fn retreat(&mut self) -> Transition {
        match self.current_step {
            WizardStep::Welcome => Transition::Stayed,
            WizardStep::ClientName => self.move_to(WizardStep::Welcome),
            WizardStep::BasePresentation => self.move_to(WizardStep::ClientName),
            WizardStep::Identifications => self.move_to(WizardStep::BasePresentation),
            WizardStep::Review => {
                if self.step5_mode != Step5Mode::Review {
                    self.step5_mode = Step5Mode::Review;
                    return Transition::ReturnedToReview;
                }
                let previous = if self.needs_identifications() {
                    WizardStep::Identifications
                } else {
                    WizardStep::BasePresentation
                };
                self.move_to(previous)
            }
            WizardStep::Consolidate => self.move_to(WizardStep::Review),
        }
    }

    fn enter_step5_mode(&mut self, mode: Step5Mode, action: &'static str) -> Result<(), ValidationError> {
        if self.current_step != WizardStep::Review || self.step5_mode != Step5Mode::Review {
            return Err(self.invalid(action));
        }
        self.step5_mode = mode;
        debug!("Review step entered {} mode", mode.label());
        Ok(())
    }

    pub fn enter_add_product(&mut self) -> Result<(), ValidationError> {
        self.enter_step5_mode(Step5Mode::AddProduct, "Adding products")
    }

    pub fn enter_add_slide(&mut self) -> Result<(), ValidationError> {
        self.enter_step5_mode(Step5Mode::AddSlide, "Uploading slides")
    }

    /// Make the deck hold exactly the selected slides of one product file
    pub fn confirm_product_selection(
        &mut self,
        file_slides: &[Slide],
        selected: &SelectionSet,
    ) -> Result<(usize, usize), ValidationError> {
        if self.current_step != WizardStep::Review || self.step5_mode != Step5Mode::AddProduct {
            return Err(self.invalid("Confirming products"));
        }
        let (added, removed) = self.deck.sync_product_file(file_slides, selected);
        info!("Product selection applied: {} added, {} removed", added, removed);
        Ok((added, removed))
    }

    /// Turn uploaded images into custom slides
    pub fn upload_custom_slides(&mut self, files: &[UploadFile]) -> Result<UploadOutcome, ValidationError> {
        if self.current_step != WizardStep::Review || self.step5_mode != Step5Mode::AddSlide {
            return Err(self.invalid("Uploading slides"));
        }
        let outcome = upload_images(files, self.deck.custom_ids());
        self.deck.add_custom_slides(outcome.slides.iter().cloned());
        Ok(outcome)
    }

    /// Build the export request for the final deck
    pub fn begin_consolidation(&self) -> Result<ExportRequest, ValidationError> {
        if self.current_step != WizardStep::Consolidate {
            return Err(self.invalid("Consolidating"));
        }
        let client_type = self.client_type.ok_or(ValidationError::MissingClientType)?;
        Ok(ExportRequest {
            client_name: self.client_name.trim().to_string(),
            client_type,
            user_type: self.user_type,
            slides: self.deck.merged_deck().into_iter().cloned().collect(),
            summary: self.deck.summary(),
        })
    }

    /// Called once the export succeeded
    pub fn finish_consolidation(&mut self) {
        info!("Presentation for '{}' consolidated", self.client_name.trim());
        self.reset();
    }

    /// Export synchronously and reset on success. Failure leaves state untouched.
    pub fn consolidate(&mut self, exporter: &dyn DeckExporter) -> Result<ExportReceipt, ConsolidateError> {
        let request = self.begin_consolidation()?;
        let receipt = exporter.export(&request)?;
        self.finish_consolidation();
        Ok(receipt)
    }

    /// Back to the initial state. Outstanding report tickets stay invalid.
    pub fn reset(&mut self) {
        let ticket = self.report_ticket + 1;
        *self = Self::new(self.default_user_type);
        self.report_ticket = ticket;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generate_performance_report, MockCatalog};
    use crate::export::{ExportError, MockDeckExporter, SimulatedExporter};
    use crate::models::SlideId;
    use pretty_assertions::assert_eq;

    fn wizard_at_base(client_type: ClientType) -> WizardState {
        let mut wizard = WizardState::default();
        wizard.select_client_type(client_type, &MockCatalog::new()).unwrap();
        wizard.set_client_name("ABC Holdings");
        wizard.advance().unwrap();
        wizard
    }

    fn existing_at_review() -> WizardState {
        let mut wizard = wizard_at_base(ClientType::Existing);
        wizard.advance().unwrap();
        wizard.add_identification("CC 123");
        let request = wizard.request_report().unwrap();
        assert!(wizard.complete_report(
            request.ticket,
            generate_performance_report(&request.identifications)
        ));
        wizard.advance().unwrap();
        wizard
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::Welcome.number(), 1);
        assert_eq!(WizardStep::Consolidate.number(), 6);
        assert_eq!(WizardStep::all().len(), 6);
    }

    #[test]
    fn test_select_client_type_loads_base_and_moves_on() {
        let mut wizard = WizardState::default();
        let transition = wizard.select_client_type(ClientType::New, &MockCatalog::new()).unwrap();
        assert_eq!(
            transition,
            Transition::Moved {
                from: WizardStep::Welcome,
                to: WizardStep::ClientName
            }
        );
        assert_eq!(wizard.deck().len(), 6);
    }

    #[test]
    fn test_welcome_requires_client_type() {
        let mut wizard = WizardState::default();
        assert_eq!(wizard.advance(), Err(ValidationError::MissingClientType));
        assert_eq!(wizard.retreat(), Transition::Stayed);
        assert_eq!(wizard.current_step(), WizardStep::Welcome);
    }

    #[test]
    fn test_whitespace_name_never_advances() {
        let mut wizard = WizardState::default();
        wizard.select_client_type(ClientType::New, &MockCatalog::new()).unwrap();
        for name in ["", " ", "\t", "  \n "] {
            wizard.set_client_name(name);
            assert_eq!(wizard.advance(), Err(ValidationError::MissingClientName));
            assert_eq!(wizard.current_step(), WizardStep::ClientName);
        }
    }

    #[test]
    fn test_new_client_skips_identifications() {
        let mut wizard = wizard_at_base(ClientType::New);
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Review);
        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::BasePresentation);
        assert!(!wizard.visible_steps().contains(&WizardStep::Identifications));
    }

    #[test]
    fn test_identifications_gate() {
        let mut wizard = wizard_at_base(ClientType::Existing);
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Identifications);

        assert_eq!(wizard.advance(), Err(ValidationError::MissingIdentifications));
        wizard.set_report_generated(true);
        assert_eq!(wizard.advance(), Err(ValidationError::MissingIdentifications));

        wizard.add_identification("CC 1");
        assert_eq!(wizard.advance(), Err(ValidationError::ReportNotGenerated));
        assert_eq!(wizard.current_step(), WizardStep::Identifications);

        wizard.set_report_generated(true);
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Review);
    }

    #[test]
    fn test_empty_report_request_is_rejected() {
        let mut wizard = wizard_at_base(ClientType::Existing);
        wizard.advance().unwrap();
        assert_eq!(wizard.request_report(), Err(ValidationError::EmptyIdentificationSubmit));
    }

    #[test]
    fn test_identification_input_is_trimmed_and_deduplicated() {
        let mut wizard = WizardState::default();
        assert!(wizard.add_identification("  CC 1 "));
        assert!(!wizard.add_identification("CC 1"));
        assert!(!wizard.add_identification("   "));
        assert_eq!(wizard.identifications(), &["CC 1".to_string()]);
        assert!(wizard.remove_identification("CC 1"));
        assert!(!wizard.remove_identification("CC 1"));
    }

    #[test]
    fn test_editing_identifications_invalidates_report() {
        let mut wizard = existing_at_review();
        assert_eq!(wizard.summary().performance, 3);

        wizard.add_identification("NIT 9");
        assert!(!wizard.report_generated());
        assert_eq!(wizard.summary().performance, 0);
    }

    #[test]
    fn test_stale_report_is_discarded_after_leaving_step() {
        let mut wizard = wizard_at_base(ClientType::Existing);
        wizard.advance().unwrap();
        wizard.add_identification("CC 1");
        let request = wizard.request_report().unwrap();

        wizard.retreat();
        wizard.advance().unwrap();
        let slides = generate_performance_report(&request.identifications);
        assert!(!wizard.complete_report(request.ticket, slides));
        assert!(!wizard.report_generated());
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut wizard = wizard_at_base(ClientType::Existing);
        wizard.advance().unwrap();
        wizard.add_identification("CC 1");
        let first = wizard.request_report().unwrap();
        let second = wizard.request_report().unwrap();

        assert!(!wizard.complete_report(first.ticket, Vec::new()));
        assert!(wizard.complete_report(second.ticket, generate_performance_report(&second.identifications)));
    }

    #[test]
    fn test_add_modes_return_to_review() {
        let mut wizard = existing_at_review();
        wizard.enter_add_product().unwrap();
        assert_eq!(wizard.advance(), Ok(Transition::ReturnedToReview));
        assert_eq!(wizard.current_step(), WizardStep::Review);

        wizard.enter_add_slide().unwrap();
        assert_eq!(wizard.retreat(), Transition::ReturnedToReview);
        assert_eq!(wizard.step5_mode(), Step5Mode::Review);

        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::Identifications);
    }

    #[test]
    fn test_add_mode_outside_review_is_invalid() {
        let mut wizard = wizard_at_base(ClientType::New);
        assert!(matches!(
            wizard.enter_add_product(),
            Err(ValidationError::InvalidAction { .. })
        ));
        assert!(matches!(
            wizard.upload_custom_slides(&[UploadFile::new("a.png", None)]),
            Err(ValidationError::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_upload_in_add_slide_mode() {
        let mut wizard = wizard_at_base(ClientType::New);
        wizard.advance().unwrap();
        wizard.enter_add_slide().unwrap();
        let outcome = wizard
            .upload_custom_slides(&[
                UploadFile::new("a.png", None),
                UploadFile::new("b.docx", None),
                UploadFile::new("c.svg", None),
            ])
            .unwrap();
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(wizard.summary().custom, 2);
        assert_eq!(wizard.deck().custom_slides()[1].id, SlideId::custom(2));
    }

    #[test]
    fn test_consolidate_resets_everything() {
        let mut wizard = existing_at_review();
        wizard.toggle_user_type();
        assert_eq!(wizard.user_type(), UserType::Db);
        wizard.advance().unwrap();

        let receipt = wizard.consolidate(&SimulatedExporter).unwrap();
        assert_eq!(receipt.slide_count, 9);
        assert_eq!(receipt.file_name, "presentation_ABC_Holdings.pdf");

        assert_eq!(wizard.current_step(), WizardStep::Welcome);
        assert_eq!(wizard.client_type(), None);
        assert_eq!(wizard.client_name(), "");
        assert_eq!(wizard.user_type(), UserType::Rm);
        assert!(wizard.identifications().is_empty());
        assert!(!wizard.report_generated());
        assert!(wizard.deck().is_empty());
    }

    #[test]
    fn test_failed_export_leaves_state_intact() {
        let mut wizard = existing_at_review();
        wizard.advance().unwrap();

        let mut exporter = MockDeckExporter::new();
        exporter
            .expect_export()
            .times(1)
            .returning(|_| Err(ExportError::Other("disk full".to_string())));

        let result = wizard.consolidate(&exporter);
        assert!(matches!(result, Err(ConsolidateError::Export(_))));
        assert_eq!(wizard.current_step(), WizardStep::Consolidate);
        assert_eq!(wizard.client_name(), "ABC Holdings");
        assert_eq!(wizard.deck().len(), 9);
    }

    #[test]
    fn test_consolidate_outside_final_step_is_invalid() {
        let mut wizard = existing_at_review();
        assert!(matches!(
            wizard.consolidate(&SimulatedExporter),
            Err(ConsolidateError::Validation(ValidationError::InvalidAction { .. }))
        ));
        assert_eq!(wizard.advance(), Ok(Transition::Moved {
            from: WizardStep::Review,
            to: WizardStep::Consolidate
        }));
        assert_eq!(wizard.advance(), Ok(Transition::Stayed));
    }

    #[test]
    fn test_export_request_follows_merged_order() {
        let mut wizard = wizard_at_base(ClientType::New);
        wizard.deck_mut().toggle_mark(SlideId::base(103)).unwrap();
        wizard.advance().unwrap();
        wizard.deck_mut().move_slide(0, 4).unwrap();
        wizard.advance().unwrap();

        let request = wizard.begin_consolidation().unwrap();
        let ids: Vec<u32> = request.slides.iter().map(|s| s.id.local).collect();
        assert_eq!(ids, vec![102, 104, 105, 106, 101]);
        assert_eq!(request.summary.base, 5);
        assert!(request.slides.iter().all(|s| s.category() == SlideCategory::Base));
    }

    #[test]
    fn test_switching_to_new_client_drops_identifications() {
        let mut wizard = existing_at_review();
        wizard.retreat();
        wizard.retreat();
        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::Welcome);

        wizard.select_client_type(ClientType::New, &MockCatalog::new()).unwrap();
        assert!(wizard.identifications().is_empty());
        assert_eq!(wizard.summary().performance, 0);
        assert_eq!(wizard.client_name(), "ABC Holdings");
    }
}
