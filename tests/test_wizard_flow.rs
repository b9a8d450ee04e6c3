// ABOUTME: Integration tests walking the wizard state machine through both client paths

use pretty_assertions::assert_eq;
use slide_picker::catalog::{generate_performance_report, MockCatalog};
use slide_picker::components::wizard::{Step5Mode, Transition, ValidationError, WizardState, WizardStep};
use slide_picker::export::{DeckExporter, ExportError, ExportReceipt, ExportRequest, SimulatedExporter};
use slide_picker::models::{ClientType, SelectionSet, SlideCategory, SlideId, UserType};
use slide_picker::upload::UploadFile;

fn wizard_at_base(client_type: ClientType) -> WizardState {
    let catalog = MockCatalog::new();
    let mut wizard = WizardState::new(UserType::Rm);
    wizard.select_client_type(client_type, &catalog).unwrap();
    wizard.set_client_name("ABC Holdings Inc.");
    wizard.advance().unwrap();
    assert_eq!(wizard.current_step(), WizardStep::BasePresentation);
    wizard
}

fn existing_wizard_with_report() -> WizardState {
    let mut wizard = wizard_at_base(ClientType::Existing);
    wizard.advance().unwrap();
    wizard.add_identification("CC 123456789");
    let request = wizard.request_report().unwrap();
    let slides = generate_performance_report(&request.identifications);
    assert!(wizard.complete_report(request.ticket, slides));
    wizard
}

struct FailingExporter;

impl DeckExporter for FailingExporter {
    fn export(&self, _request: &ExportRequest) -> Result<ExportReceipt, ExportError> {
        Err(ExportError::Other("disk full".to_string()))
    }
}

#[test]
fn test_new_client_path_skips_identifications() {
    let mut wizard = wizard_at_base(ClientType::New);

    assert_eq!(
        wizard.advance(),
        Ok(Transition::Moved {
            from: WizardStep::BasePresentation,
            to: WizardStep::Review,
        })
    );
    assert_eq!(
        wizard.visible_steps(),
        vec![
            WizardStep::Welcome,
            WizardStep::ClientName,
            WizardStep::BasePresentation,
            WizardStep::Review,
            WizardStep::Consolidate,
        ]
    );

    wizard.retreat();
    assert_eq!(wizard.current_step(), WizardStep::BasePresentation);
}

#[test]
fn test_whitespace_client_name_is_rejected() {
    let catalog = MockCatalog::new();
    let mut wizard = WizardState::new(UserType::Db);
    wizard.select_client_type(ClientType::New, &catalog).unwrap();
    wizard.set_client_name("   ");

    assert_eq!(wizard.advance(), Err(ValidationError::MissingClientName));
    assert_eq!(wizard.current_step(), WizardStep::ClientName);
}

#[test]
fn test_existing_client_needs_identifications_and_report() {
    let mut wizard = wizard_at_base(ClientType::Existing);
    wizard.advance().unwrap();
    assert_eq!(wizard.current_step(), WizardStep::Identifications);

    assert_eq!(wizard.advance(), Err(ValidationError::MissingIdentifications));

    assert!(wizard.add_identification("NIT 900123456"));
    assert_eq!(wizard.advance(), Err(ValidationError::ReportNotGenerated));

    let request = wizard.request_report().unwrap();
    let slides = generate_performance_report(&request.identifications);
    assert!(wizard.complete_report(request.ticket, slides));
    assert!(wizard.report_generated());

    wizard.advance().unwrap();
    assert_eq!(wizard.current_step(), WizardStep::Review);
}

#[test]
fn test_report_arriving_after_leaving_step_is_discarded() {
    let mut wizard = wizard_at_base(ClientType::Existing);
    wizard.advance().unwrap();
    wizard.add_identification("CC 1");
    let request = wizard.request_report().unwrap();

    wizard.retreat();
    wizard.advance().unwrap();

    let slides = generate_performance_report(&request.identifications);
    assert!(!wizard.complete_report(request.ticket, slides));
    assert!(!wizard.report_generated());
    assert!(wizard.deck().catalog(SlideCategory::PerformanceReport).is_empty());
}

#[test]
fn test_editing_identifications_invalidates_report() {
    let mut wizard = existing_wizard_with_report();
    assert_eq!(wizard.summary().performance, 3);

    wizard.add_identification("CC 2");
    assert!(!wizard.report_generated());
    assert_eq!(wizard.summary().performance, 0);
    assert_eq!(wizard.advance(), Err(ValidationError::ReportNotGenerated));
}

#[test]
fn test_deleted_base_slides_leave_the_merged_deck() {
    let mut wizard = wizard_at_base(ClientType::New);
    wizard.deck_mut().toggle_mark(SlideId::base(103)).unwrap();

    let ids: Vec<u32> = wizard.deck().merged_deck().iter().map(|s| s.id.local).collect();
    assert_eq!(ids, vec![101, 102, 104, 105, 106]);

    wizard.deck_mut().toggle_mark(SlideId::base(103)).unwrap();
    assert_eq!(wizard.deck().len(), 6);
}

#[test]
fn test_review_sub_modes_return_to_review() {
    let mut wizard = wizard_at_base(ClientType::New);
    wizard.advance().unwrap();

    wizard.enter_add_product().unwrap();
    assert_eq!(wizard.step5_mode(), Step5Mode::AddProduct);
    assert_eq!(wizard.advance(), Ok(Transition::ReturnedToReview));
    assert_eq!(wizard.current_step(), WizardStep::Review);

    wizard.enter_add_slide().unwrap();
    assert_eq!(wizard.retreat(), Transition::ReturnedToReview);
    assert_eq!(wizard.step5_mode(), Step5Mode::Review);
}

#[test]
fn test_products_and_uploads_extend_the_deck() {
    let catalog = slide_picker::catalog::default_product_catalog();
    let file = slide_picker::catalog::find_file(&catalog, "credit-gold").unwrap().clone();

    let mut wizard = wizard_at_base(ClientType::New);
    wizard.advance().unwrap();

    wizard.enter_add_product().unwrap();
    let selection: SelectionSet = file.slides.iter().map(|s| s.id).collect();
    assert_eq!(wizard.confirm_product_selection(&file.slides, &selection), Ok((3, 0)));
    wizard.advance().unwrap();

    wizard.enter_add_slide().unwrap();
    let outcome = wizard
        .upload_custom_slides(&[
            UploadFile::new("team.png", Some("image/png")),
            UploadFile::new("notes.pdf", None),
            UploadFile::new("chart.jpg", None),
        ])
        .unwrap();
    assert_eq!(outcome.slides.len(), 2);
    assert_eq!(
        outcome.rejected,
        vec![ValidationError::InvalidUploadType {
            file_name: "notes.pdf".to_string()
        }]
    );

    let summary = wizard.summary();
    assert_eq!((summary.base, summary.product, summary.custom, summary.total), (6, 3, 2, 11));
    let titles: Vec<&str> = wizard.deck().merged_deck().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles[6], "Gold Card");
    assert_eq!(titles[9..].to_vec(), vec!["team", "chart"]);
}

#[test]
fn test_consolidate_resets_after_export() {
    let mut wizard = existing_wizard_with_report();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.current_step(), WizardStep::Consolidate);

    let receipt = wizard.consolidate(&SimulatedExporter).unwrap();
    assert_eq!(receipt.slide_count, 9);
    assert_eq!(receipt.file_name, "presentation_ABC_Holdings_Inc.pdf");

    assert_eq!(wizard.current_step(), WizardStep::Welcome);
    assert_eq!(wizard.client_type(), None);
    assert!(wizard.client_name().is_empty());
    assert!(wizard.identifications().is_empty());
    assert!(wizard.deck().is_empty());
}

#[test]
fn test_failed_export_keeps_the_deck() {
    let mut wizard = existing_wizard_with_report();
    wizard.advance().unwrap();
    wizard.advance().unwrap();

    assert!(wizard.consolidate(&FailingExporter).is_err());
    assert_eq!(wizard.current_step(), WizardStep::Consolidate);
    assert_eq!(wizard.summary().total, 9);
    assert_eq!(wizard.client_name(), "ABC Holdings Inc.");
}

#[test]
fn test_consolidate_rejected_before_final_step() {
    let mut wizard = wizard_at_base(ClientType::New);
    assert!(matches!(
        wizard.begin_consolidation(),
        Err(ValidationError::InvalidAction { .. })
    ));
}

#[test]
fn test_consolidate_with_every_slide_deleted() {
    let mut wizard = wizard_at_base(ClientType::New);
    for local in 101..=106 {
        wizard.deck_mut().toggle_mark(SlideId::base(local)).unwrap();
    }
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.current_step(), WizardStep::Consolidate);
    assert_eq!(wizard.summary().total, 0);

    let receipt = wizard.consolidate(&SimulatedExporter).unwrap();
    assert_eq!(receipt.slide_count, 0);
    assert_eq!(wizard.current_step(), WizardStep::Welcome);
}

#[test]
fn test_setters_flow_into_the_export_request() {
    let mut wizard = wizard_at_base(ClientType::Existing);
    wizard.set_user_type(UserType::Db);
    wizard.advance().unwrap();

    wizard.set_identifications(vec!["CC 1".to_string(), "CC 2".to_string()]);
    let request = wizard.request_report().unwrap();
    let slides = generate_performance_report(&request.identifications);
    assert!(wizard.complete_report(request.ticket, slides));

    // Same list again keeps the report, a different one drops it
    wizard.set_identifications(vec!["CC 1".to_string(), "CC 2".to_string()]);
    assert!(wizard.report_generated());
    wizard.set_identifications(vec!["CC 1".to_string()]);
    assert!(!wizard.report_generated());

    let request = wizard.request_report().unwrap();
    let slides = generate_performance_report(&request.identifications);
    assert!(wizard.complete_report(request.ticket, slides));
    wizard.advance().unwrap();
    wizard.advance().unwrap();

    let export = wizard.begin_consolidation().unwrap();
    assert_eq!(export.user_type, UserType::Db);
    assert_eq!(export.summary.performance, 3);
    assert_eq!(export.slides.len(), 9);
}
