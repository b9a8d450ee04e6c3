// ABOUTME: Slide data model with category-scoped composite identifiers
// A slide id carries its owning category so ids from different sources never collide

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four sources a slide can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideCategory {
    Base,
    PerformanceReport,
    Product,
    Custom,
}

impl SlideCategory {
    /// All categories in default deck order
    pub fn all() -> &'static [SlideCategory] {
        &[
            Self::Base,
            Self::PerformanceReport,
            Self::Product,
            Self::Custom,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::PerformanceReport => "Performance",
            Self::Product => "Product",
            Self::Custom => "Custom",
        }
    }

    /// Whether removal works through a persistent deleted-set rather than splicing
    pub fn uses_deleted_set(&self) -> bool {
        matches!(self, Self::Base | Self::PerformanceReport)
    }

    fn short_tag(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::PerformanceReport => "perf",
            Self::Product => "product",
            Self::Custom => "custom",
        }
    }
}

/// Composite slide key: `local` is unique within its category's catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlideId {
    pub category: SlideCategory,
    pub local: u32,
}

impl SlideId {
    pub const fn new(category: SlideCategory, local: u32) -> Self {
        Self { category, local }
    }

    pub const fn base(local: u32) -> Self {
        Self::new(SlideCategory::Base, local)
    }

    pub const fn performance(local: u32) -> Self {
        Self::new(SlideCategory::PerformanceReport, local)
    }

    pub const fn product(local: u32) -> Self {
        Self::new(SlideCategory::Product, local)
    }

    pub const fn custom(local: u32) -> Self {
        Self::new(SlideCategory::Custom, local)
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.short_tag(), self.local)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(id: SlideId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn category(&self) -> SlideCategory {
        self.id.category
    }
}

/// Hands out local ids for slides created at runtime (custom uploads)
#[derive(Debug, Clone)]
pub struct LocalIdAllocator {
    category: SlideCategory,
    next: u32,
}

impl LocalIdAllocator {
    pub fn new(category: SlideCategory, first: u32) -> Self {
        Self {
            category,
            next: first,
        }
    }

    pub fn allocate(&mut self) -> SlideId {
        let id = SlideId::new(self.category, self.next);
        self.next += 1;
        id
    }
}
