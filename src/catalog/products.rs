// ABOUTME: Product catalog tree - categories, nested subcategories and presentation files
// Each file holds the slides a user can preview and pull into the deck

use crate::models::{Slide, SlideId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationFile {
    pub id: String,
    pub name: String,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PresentationFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<ProductCategory>,
}

impl ProductCategory {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            files: Vec::new(),
            subcategories: Vec::new(),
        }
    }

    fn with_files(mut self, files: Vec<PresentationFile>) -> Self {
        self.files = files;
        self
    }

    fn with_subcategories(mut self, subcategories: Vec<ProductCategory>) -> Self {
        self.subcategories = subcategories;
        self
    }

    /// Whether the category can be expanded at all
    pub fn has_children(&self) -> bool {
        !self.files.is_empty() || !self.subcategories.is_empty()
    }
}

fn file(id: &str, name: &str, slides: &[(u32, &str, &str)]) -> PresentationFile {
    PresentationFile {
        id: id.to_string(),
        name: name.to_string(),
        slides: slides
            .iter()
            .map(|(local, title, description)| Slide::new(SlideId::product(*local), *title, *description))
            .collect(),
    }
}

/// The demo product catalog
pub fn default_product_catalog() -> Vec<ProductCategory> {
    vec![
        ProductCategory::new("banking", "Banking Products").with_subcategories(vec![
            ProductCategory::new("savings", "Savings Accounts").with_files(vec![
                file(
                    "savings-basic",
                    "Basic Savings Account.pptx",
                    &[
                        (1, "Basic Savings Account - Intro", "Overview of the basic account"),
                        (2, "Basic Account Benefits", "Main benefits and features"),
                        (3, "Requirements and Fees", "Requirements and costs"),
                    ],
                ),
                file(
                    "savings-premium",
                    "Premium Savings Account.pptx",
                    &[
                        (4, "Premium Account - Introduction", "Account with exclusive benefits"),
                        (5, "Premium Advantages", "Preferential rates and services"),
                    ],
                ),
            ]),
            ProductCategory::new("credit", "Credit Cards").with_files(vec![
                file(
                    "credit-classic",
                    "Classic Card.pptx",
                    &[
                        (6, "Classic Card", "Classic card overview"),
                        (7, "Classic Card Benefits", "Points and included benefits"),
                    ],
                ),
                file(
                    "credit-gold",
                    "Gold Card.pptx",
                    &[
                        (8, "Gold Card", "Card with superior benefits"),
                        (9, "Rewards Program", "Double points and exclusive perks"),
                        (10, "Included Insurance", "Travel and purchase coverage"),
                    ],
                ),
            ]),
        ]),
        ProductCategory::new("investment-funds", "Collective Investment Funds").with_subcategories(vec![
            ProductCategory::new("conservative", "Conservative Funds").with_files(vec![file(
                "conservative-basic",
                "Basic Conservative Fund.pptx",
                &[
                    (11, "Conservative Fund - Introduction", "Low risk investment"),
                    (12, "Historical Returns", "Returns and projections"),
                    (13, "Investor Profile", "Who is this fund for?"),
                ],
            )]),
            ProductCategory::new("moderate", "Moderate Funds")
                .with_files(vec![file(
                    "moderate-balanced",
                    "Balanced Fund.pptx",
                    &[
                        (14, "Balanced Fund", "Balance between risk and return"),
                        (15, "Portfolio Composition", "Asset allocation"),
                    ],
                )])
                .with_subcategories(vec![ProductCategory::new("moderate-growth", "Moderate Growth").with_files(
                    vec![file(
                        "moderate-growth-file",
                        "Moderate Growth Fund.pptx",
                        &[
                            (16, "Growth Fund", "Higher return potential"),
                            (17, "Investment Strategy", "Focus on equities and bonds"),
                        ],
                    )],
                )]),
            ProductCategory::new("aggressive", "Aggressive Funds").with_files(vec![file(
                "aggressive-equity",
                "Equity Fund.pptx",
                &[
                    (18, "Equity Fund", "High growth potential"),
                    (19, "Risks and Opportunities", "Volatility and expected returns"),
                    (20, "Investment Horizon", "Long-term investing"),
                ],
            )]),
        ]),
    ]
}

/// Depth-first search for a file by id
pub fn find_file<'a>(categories: &'a [ProductCategory], file_id: &str) -> Option<&'a PresentationFile> {
    categories.iter().find_map(|category| {
        category
            .files
            .iter()
            .find(|f| f.id == file_id)
            .or_else(|| find_file(&category.subcategories, file_id))
    })
}

/// Every file in the tree, depth-first
pub fn all_files(categories: &[ProductCategory]) -> Vec<&PresentationFile> {
    let mut files = Vec::new();
    for category in categories {
        files.extend(all_files(&category.subcategories));
        files.extend(category.files.iter());
    }
    files
}
