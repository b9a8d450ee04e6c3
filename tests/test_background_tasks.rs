// ABOUTME: Async tests for report generation and export running as background tasks
// Tasks are polled from AppState::tick exactly as the UI loop does

use pretty_assertions::assert_eq;
use slide_picker::app::{AppState, NotificationType};
use slide_picker::catalog::MockCatalog;
use slide_picker::components::wizard::WizardStep;
use slide_picker::config::AppConfig;
use slide_picker::export::{DeckExporter, ExportError, ExportReceipt, ExportRequest, ManifestExporter};
use slide_picker::models::{ClientType, SlideCategory};
use std::sync::Arc;
use std::time::Duration;

fn instant_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.simulation.report_delay_ms = 0;
    config.simulation.export_delay_ms = 0;
    config
}

fn state_at_identifications(config: AppConfig) -> AppState {
    let mut state = AppState::new(config);
    state.select_client_type(ClientType::Existing);
    state.wizard.set_client_name("XYZ Corporation Ltd.");
    state.advance();
    state.advance();
    assert_eq!(state.wizard.current_step(), WizardStep::Identifications);
    state.wizard.add_identification("NIT 900123456");
    state
}

/// Tick until `done` holds or give up after roughly a second
async fn tick_until(state: &mut AppState, done: impl Fn(&AppState) -> bool) {
    for _ in 0..200 {
        state.tick();
        if done(state) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("background task did not finish in time");
}

struct FailingExporter;

impl DeckExporter for FailingExporter {
    fn export(&self, _request: &ExportRequest) -> Result<ExportReceipt, ExportError> {
        Err(ExportError::Other("printer on fire".to_string()))
    }
}

#[tokio::test]
async fn test_report_generation_completes_on_tick() {
    let mut state = state_at_identifications(instant_config());

    state.generate_report();
    assert!(state.is_generating_report());

    tick_until(&mut state, |s| !s.is_generating_report()).await;

    assert!(state.wizard.report_generated());
    assert_eq!(state.wizard.deck().catalog(SlideCategory::PerformanceReport).len(), 3);

    state.advance();
    assert_eq!(state.wizard.current_step(), WizardStep::Review);
}

#[tokio::test]
async fn test_leaving_step_cancels_report() {
    let mut config = instant_config();
    config.simulation.report_delay_ms = 60_000;
    let mut state = state_at_identifications(config);

    state.generate_report();
    assert!(state.is_generating_report());

    state.retreat();
    assert!(!state.is_generating_report());

    state.advance();
    assert!(!state.wizard.report_generated());
    assert!(state.wizard.deck().catalog(SlideCategory::PerformanceReport).is_empty());
}

#[tokio::test]
async fn test_export_records_history_and_resets() {
    let mut state = state_at_identifications(instant_config());
    state.generate_report();
    tick_until(&mut state, |s| s.wizard.report_generated()).await;
    state.advance();
    state.advance();
    assert_eq!(state.wizard.current_step(), WizardStep::Consolidate);
    let history_before = state.history.len();

    state.consolidate();
    assert!(state.is_exporting());

    tick_until(&mut state, |s| !s.is_exporting()).await;

    assert_eq!(state.wizard.current_step(), WizardStep::Welcome);
    assert_eq!(state.history.len(), history_before + 1);
    let newest = state.history.newest_first()[0].clone();
    assert_eq!(newest.client_name, "XYZ Corporation Ltd.");
    assert_eq!(newest.slide_count, 9);
    assert!(state
        .notifications
        .iter()
        .any(|n| n.notification_type == NotificationType::Success && n.message.contains("exported")));
}

#[tokio::test]
async fn test_failed_export_keeps_the_deck() {
    let mut state = AppState::with_collaborators(
        instant_config(),
        Box::new(MockCatalog::new()),
        Arc::new(FailingExporter),
    );
    state.select_client_type(ClientType::New);
    state.wizard.set_client_name("John Perez");
    state.advance();
    state.advance();
    state.advance();
    assert_eq!(state.wizard.current_step(), WizardStep::Consolidate);

    state.consolidate();
    tick_until(&mut state, |s| !s.is_exporting()).await;

    assert_eq!(state.wizard.current_step(), WizardStep::Consolidate);
    assert_eq!(state.wizard.summary().total, 6);
    assert!(state
        .notifications
        .iter()
        .any(|n| n.notification_type == NotificationType::Error && n.message.contains("printer on fire")));
}

#[tokio::test]
async fn test_manifest_export_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = instant_config();
    config.export.output_dir = Some(dir.path().to_path_buf());

    let mut state = AppState::with_collaborators(
        config,
        Box::new(MockCatalog::new()),
        Arc::new(ManifestExporter::new(dir.path().to_path_buf())),
    );
    state.select_client_type(ClientType::New);
    state.wizard.set_client_name("John Perez");
    state.advance();
    state.advance();
    state.advance();

    state.consolidate();
    tick_until(&mut state, |s| !s.is_exporting()).await;

    let manifest = dir.path().join("presentation_John_Perez.json");
    let content = std::fs::read_to_string(&manifest).unwrap();
    let request: ExportRequest = serde_json::from_str(&content).unwrap();
    assert_eq!(request.client_name, "John Perez");
    assert_eq!(request.slides.len(), 6);
    assert_eq!(request.summary.total, 6);
}

#[tokio::test]
async fn test_quit_drops_pending_tasks() {
    let mut config = instant_config();
    config.simulation.report_delay_ms = 60_000;
    let mut state = state_at_identifications(config);

    state.generate_report();
    state.quit();

    assert!(state.should_quit);
    assert!(!state.is_generating_report());
}
