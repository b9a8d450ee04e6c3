// ABOUTME: Presentation assembly - merges category slide lists into one ordered deck
// Once reordered, the recorded order is authoritative and categories only decide membership

use super::selection::SelectionSet;
use super::slide::{LocalIdAllocator, Slide, SlideCategory, SlideId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Slide {0} is not part of the deck")]
    UnknownSlide(SlideId),

    #[error("Reorder must list every deck slide exactly once (deck has {expected}, got {got})")]
    NotAPermutation { expected: usize, got: usize },

    #[error("Index {index} is out of bounds for {len} slide(s)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("{} slides cannot be marked for deletion", .0.label())]
    NotMarkable(SlideCategory),
}

/// Slide counts per category for the consolidation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckSummary {
    pub base: usize,
    pub performance: usize,
    pub product: usize,
    pub custom: usize,
    pub total: usize,
}

impl DeckSummary {
    pub fn new(base: usize, performance: usize, product: usize, custom: usize) -> Self {
        Self {
            base,
            performance,
            product,
            custom,
            total: base + performance + product + custom,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PresentationDeck {
    base: Vec<Slide>,
    base_deleted: SelectionSet,
    performance: Vec<Slide>,
    performance_deleted: SelectionSet,
    product: Vec<Slide>,
    custom: Vec<Slide>,
    custom_ids: LocalIdAllocator,
    /// Authoritative order after the first reorder. May still list slides that
    /// are currently deleted so a restored slide returns to its old position.
    order: Option<Vec<SlideId>>,
}

impl Default for PresentationDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationDeck {
    pub fn new() -> Self {
        Self {
            base: Vec::new(),
            base_deleted: SelectionSet::new(),
            performance: Vec::new(),
            performance_deleted: SelectionSet::new(),
            product: Vec::new(),
            custom: Vec::new(),
            custom_ids: LocalIdAllocator::new(SlideCategory::Custom, 1),
            order: None,
        }
    }

    /// Replace the base catalog. Clears base deletions and any custom order,
    /// since the previous order referred to another catalog.
    pub fn load_base(&mut self, slides: Vec<Slide>) {
        self.base = slides;
        self.base_deleted.clear();
        self.order = None;
    }

    pub fn load_performance(&mut self, slides: Vec<Slide>) {
        self.clear_performance();
        self.performance = slides;
    }

    pub fn clear_performance(&mut self) {
        self.performance.clear();
        self.performance_deleted.clear();
        if let Some(order) = self.order.as_mut() {
            order.retain(|id| id.category != SlideCategory::PerformanceReport);
        }
    }

    /// Full catalog of a category, including deleted slides
    pub fn catalog(&self, category: SlideCategory) -> &[Slide] {
        match category {
            SlideCategory::Base => &self.base,
            SlideCategory::PerformanceReport => &self.performance,
            SlideCategory::Product => &self.product,
            SlideCategory::Custom => &self.custom,
        }
    }

    /// Deleted-set of a category, if the category removes through marking
    pub fn deleted(&self, category: SlideCategory) -> Option<&SelectionSet> {
        match category {
            SlideCategory::Base => Some(&self.base_deleted),
            SlideCategory::PerformanceReport => Some(&self.performance_deleted),
            SlideCategory::Product | SlideCategory::Custom => None,
        }
    }

    fn deleted_mut(&mut self, category: SlideCategory) -> Option<&mut SelectionSet> {
        match category {
            SlideCategory::Base => Some(&mut self.base_deleted),
            SlideCategory::PerformanceReport => Some(&mut self.performance_deleted),
            SlideCategory::Product | SlideCategory::Custom => None,
        }
    }

    fn contains_in_catalog(&self, id: SlideId) -> bool {
        self.catalog(id.category).iter().any(|s| s.id == id)
    }

    /// Flip the delete mark of a base or performance slide
    pub fn toggle_mark(&mut self, id: SlideId) -> Result<bool, DeckError> {
        if !id.category.uses_deleted_set() {
            return Err(DeckError::NotMarkable(id.category));
        }
        if !self.contains_in_catalog(id) {
            return Err(DeckError::UnknownSlide(id));
        }
        let marked = self
            .deleted_mut(id.category)
            .map(|set| set.toggle(id))
            .unwrap_or(false);
        debug!("Toggled delete mark on {} -> {}", id, marked);
        Ok(marked)
    }

    pub fn is_marked(&self, id: SlideId) -> bool {
        self.deleted(id.category)
            .map(|set| set.is_marked(id))
            .unwrap_or(false)
    }

    /// Slides of one category that currently belong to the deck
    pub fn active_slides(&self, category: SlideCategory) -> Vec<&Slide> {
        let deleted = self.deleted(category);
        self.catalog(category)
            .iter()
            .filter(|slide| !deleted.is_some_and(|set| set.is_marked(slide.id)))
            .collect()
    }

    fn default_order(&self) -> Vec<&Slide> {
        SlideCategory::all()
            .iter()
            .flat_map(|category| self.active_slides(*category))
            .collect()
    }

    /// Every catalog slide in category order, deleted ones included
    fn catalog_order(&self) -> Vec<SlideId> {
        SlideCategory::all()
            .iter()
            .flat_map(|category| self.catalog(*category).iter().map(|s| s.id))
            .collect()
    }

    /// The deck in presentation order
    pub fn merged_deck(&self) -> Vec<&Slide> {
        let members = self.default_order();
        let Some(order) = &self.order else {
            return members;
        };

        let by_id: HashMap<SlideId, &Slide> = members.iter().map(|s| (s.id, *s)).collect();
        let ordered: HashSet<SlideId> = order.iter().copied().collect();

        let mut deck: Vec<&Slide> = order.iter().filter_map(|id| by_id.get(id).copied()).collect();
        deck.extend(members.into_iter().filter(|s| !ordered.contains(&s.id)));
        deck
    }

    pub fn merged_ids(&self) -> Vec<SlideId> {
        self.merged_deck().iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.merged_deck().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_reordered(&self) -> bool {
        self.order.is_some()
    }

    /// Replace the presentation order. `new_order` must be a permutation of the
    /// current deck; on error nothing changes.
    pub fn reorder(&mut self, new_order: Vec<SlideId>) -> Result<(), DeckError> {
        let current = self.merged_ids();
        let expected: HashSet<SlideId> = current.iter().copied().collect();
        let given: HashSet<SlideId> = new_order.iter().copied().collect();

        if new_order.len() != current.len() || given.len() != new_order.len() || given != expected {
            return Err(DeckError::NotAPermutation {
                expected: current.len(),
                got: new_order.len(),
            });
        }

        // Hidden (deleted) slides from the previous order stay in front of their
        // old successor so restoring one puts it back where it was.
        let previous = self.order.take().unwrap_or_else(|| self.catalog_order());
        let mut merged = new_order;
        for (pos, id) in previous.iter().enumerate() {
            if expected.contains(id) || merged.contains(id) {
                continue;
            }
            let anchor = previous[pos + 1..]
                .iter()
                .find_map(|next| merged.iter().position(|m| m == next));
            match anchor {
                Some(idx) => merged.insert(idx, *id),
                None => merged.push(*id),
            }
        }

        self.order = Some(merged);
        Ok(())
    }

    /// Move the slide at `from` so it ends up at `to`
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<(), DeckError> {
        let mut ids = self.merged_ids();
        let len = ids.len();
        if from >= len {
            return Err(DeckError::IndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(DeckError::IndexOutOfBounds { index: to, len });
        }
        let id = ids.remove(from);
        ids.insert(to, id);
        self.reorder(ids)
    }

    /// Remove a slide from the presentation, routing to its owning category
    pub fn remove_from_deck(&mut self, id: SlideId) -> Result<(), DeckError> {
        match id.category {
            SlideCategory::Base | SlideCategory::PerformanceReport => {
                if !self.contains_in_catalog(id) || self.is_marked(id) {
                    return Err(DeckError::UnknownSlide(id));
                }
                if let Some(set) = self.deleted_mut(id.category) {
                    set.mark(id);
                }
            }
            SlideCategory::Product | SlideCategory::Custom => {
                let list = if id.category == SlideCategory::Product {
                    &mut self.product
                } else {
                    &mut self.custom
                };
                let Some(pos) = list.iter().position(|s| s.id == id) else {
                    return Err(DeckError::UnknownSlide(id));
                };
                list.remove(pos);
                if let Some(order) = self.order.as_mut() {
                    order.retain(|o| *o != id);
                }
            }
        }
        debug!("Removed {} from deck", id);
        Ok(())
    }

    pub fn product_slides(&self) -> &[Slide] {
        &self.product
    }

    pub fn custom_slides(&self) -> &[Slide] {
        &self.custom
    }

    /// Append product slides not already in the deck. Returns how many were added.
    pub fn add_product_slides(&mut self, slides: impl IntoIterator<Item = Slide>) -> usize {
        let mut added = 0;
        for slide in slides {
            if !self.product.iter().any(|s| s.id == slide.id) {
                self.product.push(slide);
                added += 1;
            }
        }
        added
    }

    /// Make the deck hold exactly the `selected` slides of one product file.
    /// Returns (added, removed).
    pub fn sync_product_file(&mut self, file_slides: &[Slide], selected: &SelectionSet) -> (usize, usize) {
        let to_add: Vec<Slide> = file_slides
            .iter()
            .filter(|s| selected.is_marked(s.id))
            .cloned()
            .collect();
        let to_remove: Vec<SlideId> = file_slides
            .iter()
            .filter(|s| !selected.is_marked(s.id) && self.product.iter().any(|p| p.id == s.id))
            .map(|s| s.id)
            .collect();

        let added = self.add_product_slides(to_add);
        for id in &to_remove {
            // Present by construction of to_remove
            let _ = self.remove_from_deck(*id);
        }
        (added, to_remove.len())
    }

    pub fn add_custom_slides(&mut self, slides: impl IntoIterator<Item = Slide>) -> usize {
        let before = self.custom.len();
        for slide in slides {
            if !self.custom.iter().any(|s| s.id == slide.id) {
                self.custom.push(slide);
            }
        }
        self.custom.len() - before
    }

    /// Allocator for ids of slides created from uploads
    pub fn custom_ids(&mut self) -> &mut LocalIdAllocator {
        &mut self.custom_ids
    }

    pub fn summary(&self) -> DeckSummary {
        DeckSummary::new(
            self.active_slides(SlideCategory::Base).len(),
            self.active_slides(SlideCategory::PerformanceReport).len(),
            self.product.len(),
            self.custom.len(),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slides(category: SlideCategory, ids: &[u32]) -> Vec<Slide> {
        ids.iter()
            .map(|local| Slide::new(SlideId::new(category, *local), format!("Slide {local}"), ""))
            .collect()
    }

    fn sample_deck() -> PresentationDeck {
        let mut deck = PresentationDeck::new();
        deck.load_base(slides(SlideCategory::Base, &[101, 102, 103, 104, 105, 106]));
        deck.load_performance(slides(SlideCategory::PerformanceReport, &[201, 202]));
        deck.add_product_slides(slides(SlideCategory::Product, &[1, 2, 3]));
        deck.add_custom_slides(slides(SlideCategory::Custom, &[1, 2]));
        deck
    }

    #[test]
    fn test_merged_length_is_sum_of_active_categories() {
        let mut deck = sample_deck();
        deck.toggle_mark(SlideId::base(102)).unwrap();
        deck.toggle_mark(SlideId::performance(201)).unwrap();

        let expected = SlideCategory::all()
            .iter()
            .map(|c| deck.active_slides(*c).len())
            .sum::<usize>();
        assert_eq!(deck.merged_deck().len(), expected);
        assert_eq!(expected, 5 + 1 + 3 + 2);
    }

    #[test]
    fn test_default_order_follows_categories() {
        let deck = sample_deck();
        let ids = deck.merged_ids();
        assert_eq!(ids[0], SlideId::base(101));
        assert_eq!(ids[6], SlideId::performance(201));
        assert_eq!(ids[8], SlideId::product(1));
        assert_eq!(ids[11], SlideId::custom(1));
    }

    #[test]
    fn test_mark_and_restore_base_slide() {
        let mut deck = sample_deck();
        assert!(deck.toggle_mark(SlideId::base(103)).unwrap());
        let active = deck.active_slides(SlideCategory::Base);
        assert_eq!(active.len(), 5);
        assert!(active.iter().all(|s| s.id != SlideId::base(103)));

        assert!(!deck.toggle_mark(SlideId::base(103)).unwrap());
        assert_eq!(deck.active_slides(SlideCategory::Base).len(), 6);
    }

    #[test]
    fn test_product_slides_are_not_markable() {
        let mut deck = sample_deck();
        assert_eq!(
            deck.toggle_mark(SlideId::product(1)),
            Err(DeckError::NotMarkable(SlideCategory::Product))
        );
    }

    #[test]
    fn test_reorder_is_authoritative() {
        let mut deck = sample_deck();
        let mut ids = deck.merged_ids();
        ids.reverse();
        deck.reorder(ids.clone()).unwrap();
        assert_eq!(deck.merged_ids(), ids);
        assert!(deck.is_reordered());
    }

    #[test]
    fn test_reorder_rejects_non_permutation() {
        let mut deck = sample_deck();
        let before = deck.merged_ids();

        let mut missing = before.clone();
        missing.pop();
        assert!(matches!(deck.reorder(missing), Err(DeckError::NotAPermutation { .. })));

        let mut duplicated = before.clone();
        duplicated[1] = duplicated[0];
        assert!(deck.reorder(duplicated).is_err());

        assert_eq!(deck.merged_ids(), before);
        assert!(!deck.is_reordered());
    }

    #[test]
    fn test_move_slide_interleaves_categories() {
        let mut deck = sample_deck();
        let custom_index = deck.merged_ids().len() - 1;
        deck.move_slide(custom_index, 0).unwrap();
        let ids = deck.merged_ids();
        assert_eq!(ids[0], SlideId::custom(2));
        assert_eq!(ids[1], SlideId::base(101));
    }

    #[test]
    fn test_remove_after_reorder_keeps_order_of_others() {
        let mut deck = sample_deck();
        deck.move_slide(0, 3).unwrap();
        deck.remove_from_deck(SlideId::product(2)).unwrap();
        deck.remove_from_deck(SlideId::base(103)).unwrap();

        let ids = deck.merged_ids();
        assert!(!ids.contains(&SlideId::product(2)));
        assert!(!ids.contains(&SlideId::base(103)));
        assert_eq!(&ids[..3], &[SlideId::base(102), SlideId::base(104), SlideId::base(101)]);
    }

    #[test]
    fn test_restored_slide_returns_to_recorded_position() {
        let mut deck = sample_deck();
        deck.move_slide(0, 2).unwrap();
        let reordered = deck.merged_ids();

        deck.toggle_mark(SlideId::base(104)).unwrap();
        deck.toggle_mark(SlideId::base(104)).unwrap();
        assert_eq!(deck.merged_ids(), reordered);
    }

    #[test]
    fn test_hidden_slide_keeps_position_across_second_reorder() {
        let mut deck = sample_deck();
        deck.move_slide(0, 1).unwrap(); // 102, 101, 103, ...
        deck.toggle_mark(SlideId::base(103)).unwrap();
        deck.move_slide(0, 1).unwrap(); // 101, 102, (103 hidden), 104, ...
        deck.toggle_mark(SlideId::base(103)).unwrap();
        assert_eq!(
            &deck.merged_ids()[..4],
            &[SlideId::base(101), SlideId::base(102), SlideId::base(103), SlideId::base(104)]
        );
    }

    #[test]
    fn test_slide_hidden_before_first_reorder_keeps_position() {
        let mut deck = sample_deck();
        deck.toggle_mark(SlideId::base(103)).unwrap();
        deck.move_slide(0, 1).unwrap(); // 102, 101, (103 hidden), 104, ...
        deck.toggle_mark(SlideId::base(103)).unwrap();
        assert_eq!(
            &deck.merged_ids()[..4],
            &[SlideId::base(102), SlideId::base(101), SlideId::base(103), SlideId::base(104)]
        );
    }

    #[test]
    fn test_slides_added_after_reorder_are_appended() {
        let mut deck = sample_deck();
        deck.move_slide(0, 1).unwrap();
        deck.add_custom_slides(slides(SlideCategory::Custom, &[3]));
        assert_eq!(deck.merged_ids().last(), Some(&SlideId::custom(3)));
    }

    #[test]
    fn test_remove_routes_by_category() {
        let mut deck = sample_deck();
        deck.remove_from_deck(SlideId::base(101)).unwrap();
        assert!(deck.is_marked(SlideId::base(101)));
        assert_eq!(deck.catalog(SlideCategory::Base).len(), 6);

        deck.remove_from_deck(SlideId::custom(1)).unwrap();
        assert_eq!(deck.custom_slides().len(), 1);

        assert_eq!(
            deck.remove_from_deck(SlideId::custom(1)),
            Err(DeckError::UnknownSlide(SlideId::custom(1)))
        );
        assert_eq!(
            deck.remove_from_deck(SlideId::base(101)),
            Err(DeckError::UnknownSlide(SlideId::base(101)))
        );
    }

    #[test]
    fn test_sync_product_file_adds_and_removes() {
        let mut deck = sample_deck();
        let file = slides(SlideCategory::Product, &[3, 4, 5]);
        let selected: SelectionSet = [SlideId::product(4), SlideId::product(5)].into_iter().collect();

        let (added, removed) = deck.sync_product_file(&file, &selected);
        assert_eq!((added, removed), (2, 1));
        let ids: Vec<SlideId> = deck.product_slides().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SlideId::product(1), SlideId::product(2), SlideId::product(4), SlideId::product(5)]);
    }

    #[test]
    fn test_summary_total() {
        assert_eq!(DeckSummary::new(5, 0, 3, 2).total, 10);

        let mut deck = sample_deck();
        deck.toggle_mark(SlideId::base(106)).unwrap();
        let summary = deck.summary();
        assert_eq!(summary, DeckSummary::new(5, 2, 3, 2));
        assert_eq!(summary.total, deck.len());
    }

    #[test]
    fn test_load_base_resets_order_and_marks() {
        let mut deck = sample_deck();
        deck.toggle_mark(SlideId::base(101)).unwrap();
        deck.move_slide(0, 1).unwrap();
        deck.load_base(slides(SlideCategory::Base, &[101, 102]));
        assert!(!deck.is_reordered());
        assert!(!deck.is_marked(SlideId::base(101)));
    }
}
