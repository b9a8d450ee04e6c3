// ABOUTME: Performance report generation for existing clients
// Produces one summary slide, one slide per identification and a closing outlook slide

use crate::models::{Slide, SlideId};
use std::time::Duration;
use tracing::info;

/// First local id used for report slides
pub const REPORT_FIRST_ID: u32 = 201;

pub fn generate_performance_report(identifications: &[String]) -> Vec<Slide> {
    let mut slides = Vec::with_capacity(identifications.len() + 2);
    let mut next = REPORT_FIRST_ID;
    let mut push = |title: String, description: String| {
        slides.push(Slide::new(SlideId::performance(next), title, description));
        next += 1;
    };

    push(
        "Performance Summary".to_string(),
        format!("Consolidated results for {} holder(s)", identifications.len()),
    );
    for identification in identifications {
        push(
            format!("Portfolio - {identification}"),
            format!("Positions and returns for {identification}"),
        );
    }
    push(
        "Outlook and Recommendations".to_string(),
        "Next steps based on the period's results".to_string(),
    );

    slides
}

/// Report generation with the simulated processing delay
pub async fn generate_performance_report_delayed(identifications: Vec<String>, delay: Duration) -> Vec<Slide> {
    tokio::time::sleep(delay).await;
    let slides = generate_performance_report(&identifications);
    info!(
        "Generated performance report with {} slide(s) for {} identification(s)",
        slides.len(),
        identifications.len()
    );
    slides
}
