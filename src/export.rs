// ABOUTME: Export collaborator for consolidated decks
// Simulated exporter always succeeds; manifest exporter writes a JSON description of the deck

use crate::models::{ClientType, DeckSummary, Slide, UserType};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub client_name: String,
    pub client_type: ClientType,
    pub user_type: UserType,
    pub slides: Vec<Slide>,
    pub summary: DeckSummary,
}

impl ExportRequest {
    /// Output file name derived from the client name
    pub fn file_stem(&self) -> String {
        let cleaned: String = self
            .client_name
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        let cleaned = cleaned.trim_matches('_');
        if cleaned.is_empty() {
            "presentation".to_string()
        } else {
            format!("presentation_{cleaned}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub file_name: String,
    pub slide_count: usize,
    pub exported_at: DateTime<Local>,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Export failed: {0}")]
    Other(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait DeckExporter {
    fn export(&self, request: &ExportRequest) -> Result<ExportReceipt, ExportError>;
}

/// Pretends to render the deck
#[derive(Debug, Clone, Default)]
pub struct SimulatedExporter;

impl DeckExporter for SimulatedExporter {
    fn export(&self, request: &ExportRequest) -> Result<ExportReceipt, ExportError> {
        let receipt = ExportReceipt {
            file_name: format!("{}.pdf", request.file_stem()),
            slide_count: request.slides.len(),
            exported_at: Local::now(),
        };
        info!(
            "Simulated export of {} slide(s) as {}",
            receipt.slide_count, receipt.file_name
        );
        Ok(receipt)
    }
}

/// Writes `<stem>.json` describing the deck into `output_dir`
#[derive(Debug, Clone)]
pub struct ManifestExporter {
    output_dir: PathBuf,
}

impl ManifestExporter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl DeckExporter for ManifestExporter {
    fn export(&self, request: &ExportRequest) -> Result<ExportReceipt, ExportError> {
        fs::create_dir_all(&self.output_dir)?;

        let file_name = format!("{}.json", request.file_stem());
        let path = self.output_dir.join(&file_name);
        fs::write(&path, serde_json::to_string_pretty(request)?)?;

        info!("Wrote deck manifest to {}", path.display());
        Ok(ExportReceipt {
            file_name,
            slide_count: request.slides.len(),
            exported_at: Local::now(),
        })
    }
}
