// ABOUTME: Product picker for the review step - browse the catalog tree and preview files
// Confirming a preview hands the file and its selection back to the wizard

use crate::catalog::{find_file, PresentationFile, ProductCategory};
use crate::models::{MarkMode, SelectionSet, Slide, SlideNavigator};
use std::collections::HashSet;
use tracing::debug;

/// One visible line of the flattened catalog tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerRow {
    Category {
        id: String,
        name: String,
        depth: usize,
        expanded: bool,
        has_children: bool,
    },
    File {
        id: String,
        name: String,
        depth: usize,
        slide_count: usize,
        /// How many of the file's slides are already in the deck
        in_deck: usize,
    },
}

impl PickerRow {
    pub fn depth(&self) -> usize {
        match self {
            Self::Category { depth, .. } | Self::File { depth, .. } => *depth,
        }
    }
}

/// Slides of one file being chosen
#[derive(Debug, Clone)]
pub struct FilePreview {
    pub file: PresentationFile,
    pub selection: SelectionSet,
    pub navigator: SlideNavigator,
}

impl FilePreview {
    pub fn slides(&self) -> Vec<&Slide> {
        self.file.slides.iter().collect()
    }

    pub fn toggle_current(&mut self) -> Option<bool> {
        let slides: Vec<&Slide> = self.file.slides.iter().collect();
        self.navigator
            .toggle_current(&slides, &mut self.selection, MarkMode::Add)
    }

    /// Mark every slide, or clear them all when everything is already marked
    pub fn toggle_all(&mut self) {
        if self.selection.len() == self.file.slides.len() {
            self.selection.clear();
        } else {
            for slide in &self.file.slides {
                self.selection.mark(slide.id);
            }
        }
    }

    pub fn next(&mut self) -> bool {
        self.navigator.next(self.file.slides.len())
    }

    pub fn previous(&mut self) -> bool {
        self.navigator.previous()
    }
}

#[derive(Debug, Clone)]
pub struct ProductPicker {
    catalog: Vec<ProductCategory>,
    expanded: HashSet<String>,
    cursor: usize,
    preview: Option<FilePreview>,
}

impl ProductPicker {
    pub fn new(catalog: Vec<ProductCategory>) -> Self {
        Self {
            catalog,
            expanded: HashSet::new(),
            cursor: 0,
            preview: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn preview(&self) -> Option<&FilePreview> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut FilePreview> {
        self.preview.as_mut()
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// Visible rows given the expanded categories
    pub fn rows(&self, deck_products: &[Slide]) -> Vec<PickerRow> {
        let mut rows = Vec::new();
        self.push_rows(&self.catalog, 0, deck_products, &mut rows);
        rows
    }

    fn push_rows(
        &self,
        categories: &[ProductCategory],
        depth: usize,
        deck_products: &[Slide],
        rows: &mut Vec<PickerRow>,
    ) {
        for category in categories {
            let expanded = self.expanded.contains(&category.id);
            rows.push(PickerRow::Category {
                id: category.id.clone(),
                name: category.name.clone(),
                depth,
                expanded,
                has_children: category.has_children(),
            });
            if !expanded {
                continue;
            }
            self.push_rows(&category.subcategories, depth + 1, deck_products, rows);
            for file in &category.files {
                rows.push(PickerRow::File {
                    id: file.id.clone(),
                    name: file.name.clone(),
                    depth: depth + 1,
                    slide_count: file.slides.len(),
                    in_deck: file
                        .slides
                        .iter()
                        .filter(|s| deck_products.iter().any(|p| p.id == s.id))
                        .count(),
                });
            }
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, row_count: usize) {
        if self.cursor + 1 < row_count {
            self.cursor += 1;
        }
    }

    pub fn toggle_category(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Expand/collapse the category under the cursor or open the file under it
    pub fn activate(&mut self, deck_products: &[Slide]) {
        let rows = self.rows(deck_products);
        match rows.get(self.cursor) {
            Some(PickerRow::Category { id, .. }) => {
                self.toggle_category(id);
                let count = self.rows(deck_products).len();
                if self.cursor >= count {
                    self.cursor = count.saturating_sub(1);
                }
            }
            Some(PickerRow::File { id, .. }) => {
                let id = id.clone();
                self.open_file(&id, deck_products);
            }
            None => {}
        }
    }

    /// Open a preview whose selection starts with the file's slides already in the deck
    pub fn open_file(&mut self, file_id: &str, deck_products: &[Slide]) -> bool {
        let Some(file) = find_file(&self.catalog, file_id) else {
            return false;
        };
        let selection: SelectionSet = file
            .slides
            .iter()
            .filter(|s| deck_products.iter().any(|p| p.id == s.id))
            .map(|s| s.id)
            .collect();
        debug!("Previewing product file {}", file.name);
        self.preview = Some(FilePreview {
            file: file.clone(),
            selection,
            navigator: SlideNavigator::new(),
        });
        true
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    /// Take the preview for confirmation, leaving the tree visible
    pub fn take_preview(&mut self) -> Option<FilePreview> {
        self.preview.take()
    }

    /// Collapse everything and drop any preview
    pub fn reset(&mut self) {
        self.expanded.clear();
        self.cursor = 0;
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_product_catalog;
    use crate::models::SlideId;

    fn picker() -> ProductPicker {
        ProductPicker::new(default_product_catalog())
    }

    #[test]
    fn test_collapsed_tree_shows_top_level_only() {
        let rows = picker().rows(&[]);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.depth() == 0));
    }

    #[test]
    fn test_expand_nested_categories() {
        let mut picker = picker();
        picker.toggle_category("investment-funds");
        picker.toggle_category("moderate");
        let rows = picker.rows(&[]);

        let names: Vec<String> = rows
            .iter()
            .map(|r| match r {
                PickerRow::Category { name, .. } | PickerRow::File { name, .. } => name.clone(),
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "Banking Products",
                "Collective Investment Funds",
                "Conservative Funds",
                "Moderate Funds",
                "Moderate Growth",
                "Balanced Fund.pptx",
                "Aggressive Funds",
            ]
        );

        picker.toggle_category("investment-funds");
        assert_eq!(picker.rows(&[]).len(), 2);
    }

    #[test]
    fn test_activate_opens_file_with_deck_selection() {
        let mut picker = picker();
        picker.toggle_category("banking");
        picker.toggle_category("savings");
        // Banking, Savings, Basic Savings
        picker.cursor_down(10);
        picker.cursor_down(10);

        let in_deck = vec![Slide::new(SlideId::product(2), "Basic Account Benefits", "")];
        assert!(matches!(
            picker.rows(&in_deck)[2],
            PickerRow::File { in_deck: 1, slide_count: 3, .. }
        ));
        picker.activate(&in_deck);

        let preview = picker.preview().expect("file preview");
        assert_eq!(preview.file.id, "savings-basic");
        assert!(preview.selection.is_marked(SlideId::product(2)));
        assert_eq!(preview.selection.len(), 1);
    }

    #[test]
    fn test_toggle_all_then_clear() {
        let mut picker = picker();
        assert!(picker.open_file("credit-gold", &[]));
        let preview = picker.preview_mut().unwrap();

        preview.toggle_all();
        assert_eq!(preview.selection.len(), 3);
        preview.toggle_all();
        assert!(preview.selection.is_empty());

        preview.next();
        assert_eq!(preview.toggle_current(), Some(true));
        assert!(preview.selection.is_marked(SlideId::product(9)));
    }

    #[test]
    fn test_collapsing_keeps_cursor_in_range() {
        let mut picker = picker();
        picker.toggle_category("investment-funds");
        for _ in 0..4 {
            picker.cursor_down(5);
        }
        assert_eq!(picker.cursor(), 4);
        picker.toggle_category("investment-funds");
        picker.cursor_up();
        picker.cursor_up();
        picker.cursor_up();
        picker.activate(&[]);
        assert_eq!(picker.rows(&[]).len(), 5);
        assert!(!picker.is_previewing());
    }
}
