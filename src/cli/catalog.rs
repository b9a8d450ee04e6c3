// ABOUTME: CLI catalog and products commands - print the base deck or the product tree
//
// Reads the same mock catalog the wizard uses

use super::{CatalogArgs, OutputFormat};
use crate::catalog::{CatalogProvider, ProductCategory};
use crate::models::Slide;
use anyhow::Result;

/// Execute the catalog command
pub fn execute_catalog(args: &CatalogArgs, format: OutputFormat, provider: &dyn CatalogProvider) -> Result<()> {
    let slides = provider.base_slides(args.client_type);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&slides)?),
        OutputFormat::Text => print!("{}", format_slides(args.client_type.label(), &slides)),
    }

    Ok(())
}

/// Execute the products command
pub fn execute_products(format: OutputFormat, provider: &dyn CatalogProvider) -> Result<()> {
    let catalog = provider.product_catalog();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
        OutputFormat::Text => print!("{}", format_product_tree(&catalog)),
    }

    Ok(())
}

fn format_slides(heading: &str, slides: &[Slide]) -> String {
    let mut out = format!("{heading} base deck ({} slides)\n", slides.len());
    out.push_str(&format!("{:<12} {:<24} DESCRIPTION\n", "ID", "TITLE"));
    out.push_str(&"-".repeat(72));
    out.push('\n');
    for slide in slides {
        out.push_str(&format!("{:<12} {:<24} {}\n", slide.id.to_string(), slide.title, slide.description));
    }
    out
}

fn format_product_tree(categories: &[ProductCategory]) -> String {
    let mut out = String::new();
    for category in categories {
        push_category(&mut out, category, 0);
    }
    out
}

fn push_category(out: &mut String, category: &ProductCategory, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}{}\n", category.name));
    for sub in &category.subcategories {
        push_category(out, sub, depth + 1);
    }
    for file in &category.files {
        out.push_str(&format!("{indent}  - {} ({} slides)\n", file.name, file.slides.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MockCatalog, MockCatalogProvider};
    use crate::models::{ClientType, SlideId};

    #[test]
    fn test_format_slides_lists_every_slide() {
        let slides = MockCatalog::new().base_slides(ClientType::New);
        let text = format_slides("New Client", &slides);
        assert!(text.starts_with("New Client base deck (6 slides)"));
        assert!(text.contains("base:101"));
        assert!(text.contains("Welcome"));
        assert!(text.contains("base:106"));
    }

    #[test]
    fn test_product_tree_indents_nested_categories() {
        let text = format_product_tree(&MockCatalog::new().product_catalog());
        let first = text.lines().next().unwrap_or_default();
        assert!(!first.starts_with(' '));
        assert!(text.lines().any(|line| line.starts_with("  ")));
        assert!(text.contains("slides)"));
    }

    #[test]
    fn test_catalog_command_reads_from_provider() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_base_slides()
            .withf(|ct| *ct == ClientType::Existing)
            .times(1)
            .returning(|_| vec![Slide::new(SlideId::base(101), "Account Update", "Current status")]);

        let args = CatalogArgs {
            client_type: ClientType::Existing,
        };
        assert!(execute_catalog(&args, OutputFormat::Json, &provider).is_ok());
    }
}
