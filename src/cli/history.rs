// ABOUTME: CLI history command - list presentations, newest first

use super::OutputFormat;
use crate::models::{PresentationHistory, PresentationRecord};
use anyhow::Result;

/// Execute the history command
pub fn execute(history: &PresentationHistory, format: OutputFormat) -> Result<()> {
    let records = history.newest_first();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => print!("{}", format_records(&records)),
    }

    Ok(())
}

fn format_records(records: &[&PresentationRecord]) -> String {
    if records.is_empty() {
        return "No presentations found.\n".to_string();
    }

    let mut out = format!("{:<32} {:<16} {:<5} {:<10} SLIDES\n", "CLIENT", "TYPE", "USER", "DATE");
    out.push_str(&"-".repeat(76));
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{:<32} {:<16} {:<5} {:<10} {}\n",
            truncate(&record.client_name, 32),
            record.client_type.label(),
            record.user_type.label(),
            record.created_at.format("%Y-%m-%d").to_string(),
            record.slide_count
        ));
    }
    out
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
