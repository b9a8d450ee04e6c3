// ABOUTME: Client and user classification used to pick catalogs and wizard paths

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    New,
    Existing,
}

impl ClientType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New Client",
            Self::Existing => "Existing Client",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::New => "Start from a base deck for a client just beginning the relationship",
            Self::Existing => "Personalize the deck with the history of a current client",
        }
    }

    /// Existing clients go through the identification/report step
    pub fn needs_identifications(&self) -> bool {
        matches!(self, Self::Existing)
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::New => Self::Existing,
            Self::Existing => Self::New,
        }
    }
}

/// Who is building the presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserType {
    /// Relationship manager
    #[default]
    #[serde(rename = "RM")]
    Rm,
    #[serde(rename = "DB")]
    Db,
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rm => "RM",
            Self::Db => "DB",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Rm => Self::Db,
            Self::Db => Self::Rm,
        }
    }
}
