// ABOUTME: Slide selection model tracking which slide ids are marked
// Marking intent (delete vs add) lives in MarkMode, the set itself only knows marked/unmarked

use super::slide::SlideId;
use std::collections::BTreeSet;

/// What a mark means for the viewer currently showing a slide list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkMode {
    /// Marked slides will be dropped from the deck
    Delete,
    /// Marked slides will be added to the deck
    Add,
    /// Read-only browsing, toggles are ignored
    View,
}

impl MarkMode {
    pub fn allows_toggle(&self) -> bool {
        !matches!(self, Self::View)
    }

    /// Label for the per-slide checkbox
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Add => "Add",
            Self::View => "",
        }
    }

    /// Label for the marked-count footer (e.g. "3 to delete")
    pub fn count_label(&self) -> &'static str {
        match self {
            Self::Delete => "to delete",
            Self::Add => "to add",
            Self::View => "marked",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    marked: BTreeSet<SlideId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add if absent, remove if present. Returns whether the id is marked afterwards.
    pub fn toggle(&mut self, id: SlideId) -> bool {
        if self.marked.remove(&id) {
            false
        } else {
            self.marked.insert(id);
            true
        }
    }

    pub fn mark(&mut self, id: SlideId) -> bool {
        self.marked.insert(id)
    }

    pub fn unmark(&mut self, id: SlideId) -> bool {
        self.marked.remove(&id)
    }

    pub fn is_marked(&self, id: SlideId) -> bool {
        self.marked.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideId> {
        self.marked.iter()
    }
}

impl FromIterator<SlideId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = SlideId>>(iter: I) -> Self {
        Self {
            marked: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut set: SelectionSet = [SlideId::base(101), SlideId::base(104)].into_iter().collect();
        let original = set.clone();

        for id in [SlideId::base(101), SlideId::base(102), SlideId::product(7)] {
            set.toggle(id);
            set.toggle(id);
            assert_eq!(set, original);
        }
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut set = SelectionSet::new();
        assert!(set.toggle(SlideId::base(103)));
        assert!(set.is_marked(SlideId::base(103)));
        assert!(!set.toggle(SlideId::base(103)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_view_mode_disallows_toggle() {
        assert!(!MarkMode::View.allows_toggle());
        assert!(MarkMode::Delete.allows_toggle());
        assert!(MarkMode::Add.allows_toggle());
    }
}
