// ABOUTME: Viewer/navigator cursor over an ordered slide sequence
// Keeps the current index consistent across paging, jumps and drag reorders

use super::deck::DeckError;
use super::selection::{MarkMode, SelectionSet};
use super::slide::Slide;

/// A drag-reorder gesture expressed in deck indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderEvent {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideNavigator {
    current: usize,
}

impl SlideNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Advance one slide; no-op on the last slide
    pub fn next(&mut self, len: usize) -> bool {
        if self.current + 1 < len {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one slide; no-op on the first slide
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn jump_to(&mut self, index: usize, len: usize) -> Result<(), DeckError> {
        if index >= len {
            return Err(DeckError::IndexOutOfBounds { index, len });
        }
        self.current = index;
        Ok(())
    }

    pub fn first(&mut self) {
        self.current = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.current = len.saturating_sub(1);
    }

    /// Keep the cursor valid after the sequence shrank
    pub fn clamp(&mut self, len: usize) {
        if self.current >= len {
            self.current = len.saturating_sub(1);
        }
    }

    /// Follow a reorder so the cursor stays on the same slide
    pub fn apply_reorder(&mut self, event: ReorderEvent) {
        let ReorderEvent { from, to } = event;
        if from == self.current {
            self.current = to;
        } else if from < self.current && to >= self.current {
            self.current -= 1;
        } else if from > self.current && to <= self.current {
            self.current += 1;
        }
    }

    pub fn current_slide<'a>(&self, slides: &[&'a Slide]) -> Option<&'a Slide> {
        slides.get(self.current).copied()
    }

    /// Toggle the current slide in `selection`. Returns the new mark state,
    /// or None when the mode is read-only or the sequence is empty.
    pub fn toggle_current(
        &self,
        slides: &[&Slide],
        selection: &mut SelectionSet,
        mode: MarkMode,
    ) -> Option<bool> {
        if !mode.allows_toggle() {
            return None;
        }
        let slide = self.current_slide(slides)?;
        Some(selection.toggle(slide.id))
    }
}
