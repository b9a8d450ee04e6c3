// ABOUTME: Slide catalog provider - read-only source of base, product and report slides
// The mock provider serves the demo catalogs bundled with the application

pub mod products;
pub mod report;

use crate::models::{ClientType, Slide, SlideId};

pub use products::{default_product_catalog, find_file, PresentationFile, ProductCategory};
pub use report::{generate_performance_report, generate_performance_report_delayed};

/// Source of the static slide catalogs
#[cfg_attr(test, mockall::automock)]
pub trait CatalogProvider {
    /// Base deck for a client type, in presentation order
    fn base_slides(&self, client_type: ClientType) -> Vec<Slide>;

    /// The product catalog tree
    fn product_catalog(&self) -> Vec<ProductCategory>;
}

#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<ProductCategory>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            products: default_product_catalog(),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for MockCatalog {
    fn base_slides(&self, client_type: ClientType) -> Vec<Slide> {
        let entries: &[(&str, &str)] = match client_type {
            ClientType::New => &[
                ("Welcome", "Introduction for new clients"),
                ("Our Company", "Who we are"),
                ("Services", "Our main services"),
                ("Value Proposition", "Why choose us"),
                ("Onboarding Process", "First steps"),
                ("Contact", "Contact information"),
            ],
            ClientType::Existing => &[
                ("Account Update", "Current status"),
                ("Current Services", "Contracted services"),
                ("New Opportunities", "Additional services"),
                ("Success Stories", "Results achieved"),
                ("Growth Plan", "Next steps"),
                ("Support", "Service channels"),
            ],
        };

        entries
            .iter()
            .zip(101..)
            .map(|((title, description), local)| Slide::new(SlideId::base(local), *title, *description))
            .collect()
    }

    fn product_catalog(&self) -> Vec<ProductCategory> {
        self.products.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_base_ids() {
        let slides = MockCatalog::new().base_slides(ClientType::New);
        let ids: Vec<u32> = slides.iter().map(|s| s.id.local).collect();
        assert_eq!(ids, vec![101, 102, 103, 104, 105, 106]);
        assert_eq!(slides[0].title, "Welcome");
    }

    #[test]
    fn test_existing_client_has_own_deck() {
        let catalog = MockCatalog::new();
        assert_ne!(
            catalog.base_slides(ClientType::New),
            catalog.base_slides(ClientType::Existing)
        );
    }
}
