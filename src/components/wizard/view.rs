// ABOUTME: Per-screen UI state for the wizard - cursors, drafts and viewer positions
// Holds nothing the wizard owns; drafts only become wizard data when submitted

use super::product_picker::ProductPicker;
use super::state::WizardStep;
use crate::catalog::ProductCategory;
use crate::models::{ClientType, SlideNavigator};

/// Single-line text draft with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Text split around the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_index(self.cursor))
    }

    /// Empty the draft and return what it held
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }
}

/// Focus areas within the identification step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentificationFocus {
    #[default]
    Input,
    List,
    Report,
}

impl IdentificationFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Input => Self::List,
            Self::List => Self::Report,
            Self::Report => Self::Input,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WizardView {
    /// Highlighted option on the welcome step
    pub client_choice: ClientType,
    pub identification_input: TextInput,
    pub identification_focus: IdentificationFocus,
    pub selected_identification: usize,
    pub upload_input: TextInput,
    pub base_viewer: SlideNavigator,
    pub report_viewer: SlideNavigator,
    pub review_viewer: SlideNavigator,
    pub product_picker: ProductPicker,
    pub show_cursor: bool,
}

impl WizardView {
    pub fn new(product_catalog: Vec<ProductCategory>) -> Self {
        Self {
            client_choice: ClientType::New,
            identification_input: TextInput::new(),
            identification_focus: IdentificationFocus::Input,
            selected_identification: 0,
            upload_input: TextInput::new(),
            base_viewer: SlideNavigator::new(),
            report_viewer: SlideNavigator::new(),
            review_viewer: SlideNavigator::new(),
            product_picker: ProductPicker::new(product_catalog),
            show_cursor: true,
        }
    }

    /// Whether typed characters go to a text field on this step
    pub fn is_typing(&self, step: WizardStep, adding_slides: bool) -> bool {
        match step {
            WizardStep::ClientName => true,
            WizardStep::Identifications => self.identification_focus == IdentificationFocus::Input,
            WizardStep::Review => adding_slides,
            _ => false,
        }
    }

    pub fn toggle_cursor(&mut self) {
        self.show_cursor = !self.show_cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::new();
        for c in "CC 12".chars() {
            input.input_char(c);
        }
        input.cursor_home();
        input.delete();
        input.input_char('N');
        assert_eq!(input.value(), "NC 12");

        input.cursor_end();
        input.backspace();
        input.cursor_left();
        assert_eq!(input.split_at_cursor(), ("NC ", "1"));

        assert_eq!(input.take(), "NC 1");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_text_input_handles_multibyte_chars() {
        let mut input = TextInput::new();
        for c in "Peña".chars() {
            input.input_char(c);
        }
        input.cursor_left();
        input.backspace();
        assert_eq!(input.value(), "Pea");
    }

    #[test]
    fn test_focus_cycles() {
        let focus = IdentificationFocus::Input;
        assert_eq!(focus.next().next().next(), IdentificationFocus::Input);
    }
}
