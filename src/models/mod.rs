// ABOUTME: Core data models for slides, selections, deck assembly and presentation history

pub mod client;
pub mod deck;
pub mod history;
pub mod navigator;
pub mod selection;
pub mod slide;

pub use client::{ClientType, UserType};
pub use deck::{DeckError, DeckSummary, PresentationDeck};
pub use history::{PresentationHistory, PresentationRecord};
pub use navigator::{ReorderEvent, SlideNavigator};
pub use selection::{MarkMode, SelectionSet};
pub use slide::{LocalIdAllocator, Slide, SlideCategory, SlideId};
