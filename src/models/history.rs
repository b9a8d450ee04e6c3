// ABOUTME: In-session history of consolidated presentations ("My Presentations")
// Seeded with demo entries; nothing here is written to disk

use super::client::{ClientType, UserType};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRecord {
    pub id: Uuid,
    pub client_name: String,
    pub client_type: ClientType,
    pub user_type: UserType,
    pub created_at: NaiveDate,
    pub slide_count: usize,
}

impl PresentationRecord {
    pub fn new(client_name: String, client_type: ClientType, user_type: UserType, slide_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name,
            client_type,
            user_type,
            created_at: Local::now().date_naive(),
            slide_count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresentationHistory {
    records: Vec<PresentationRecord>,
}

impl PresentationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History pre-populated with a few demo presentations
    pub fn with_demo_entries() -> Self {
        let demo = [
            ("ABC Holdings Inc.", ClientType::Existing, (2025, 10, 15), 25),
            ("John Perez", ClientType::New, (2025, 10, 14), 18),
            ("XYZ Corporation Ltd.", ClientType::Existing, (2025, 10, 10), 32),
        ];

        let records = demo
            .into_iter()
            .filter_map(|(name, client_type, (y, m, d), slides)| {
                Some(PresentationRecord {
                    id: Uuid::new_v4(),
                    client_name: name.to_string(),
                    client_type,
                    user_type: UserType::Rm,
                    created_at: NaiveDate::from_ymd_opt(y, m, d)?,
                    slide_count: slides,
                })
            })
            .collect();

        Self { records }
    }

    pub fn record(&mut self, record: PresentationRecord) {
        self.records.push(record);
    }

    /// Records, newest first
    pub fn newest_first(&self) -> Vec<&PresentationRecord> {
        let mut records: Vec<&PresentationRecord> = self.records.iter().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
