// ABOUTME: Event handling system for keyboard input and app actions

use crate::app::{state::View, AppState};
use crate::components::wizard::{IdentificationFocus, Step5Mode, WizardStep};
use crate::models::ClientType;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    // Step navigation
    Advance,
    Retreat,
    // Welcome and client details
    ToggleClientChoice,
    SelectClientType(ClientType),
    SelectHighlightedClientType,
    ToggleUserType,
    // Text input
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputCursorLeft,
    InputCursorRight,
    InputCursorHome,
    InputCursorEnd,
    // Identifications
    SubmitIdentification,
    CycleIdentificationFocus,
    IdentificationUp,
    IdentificationDown,
    RemoveIdentification,
    GenerateReport,
    // Slide viewer
    SlideNext,
    SlidePrevious,
    SlideFirst,
    SlideLast,
    SlideJump(usize),
    ToggleSlideMark,
    MoveSlideLeft,
    MoveSlideRight,
    RemoveSlide,
    // Review sub-modes
    EnterAddProduct,
    EnterAddSlide,
    PickerUp,
    PickerDown,
    PickerActivate,
    PickerToggleAll,
    PickerConfirm,
    PickerClosePreview,
    SubmitUpload,
    Consolidate,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        if state.show_help {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        let typing = state.is_typing();
        match key_event.code {
            KeyCode::F(1) => return Some(AppEvent::ToggleHelp),
            KeyCode::F(2) => return Some(AppEvent::ToggleHistory),
            KeyCode::Char('?') if !typing => return Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') if !typing => return Some(AppEvent::Quit),
            _ => {}
        }

        if state.current_view == View::History {
            return Self::handle_history_keys(key_event);
        }

        // The deck is frozen while the export runs
        if state.is_exporting() {
            return None;
        }

        match state.wizard.current_step() {
            WizardStep::Welcome => Self::handle_welcome_keys(key_event),
            WizardStep::ClientName => Self::handle_client_name_keys(key_event),
            WizardStep::BasePresentation => Self::handle_viewer_keys(key_event, true),
            WizardStep::Identifications => Self::handle_identification_keys(key_event, state),
            WizardStep::Review => match state.wizard.step5_mode() {
                Step5Mode::Review => Self::handle_review_keys(key_event),
                Step5Mode::AddProduct => Self::handle_product_picker_keys(key_event, state),
                Step5Mode::AddSlide => Self::handle_text_keys(key_event, AppEvent::SubmitUpload),
            },
            WizardStep::Consolidate => match key_event.code {
                KeyCode::Enter => Some(AppEvent::Consolidate),
                KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::Retreat),
                _ => None,
            },
        }
    }

    fn handle_history_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::HistoryUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::HistoryDown),
            KeyCode::Esc | KeyCode::Char('h') => Some(AppEvent::ToggleHistory),
            _ => None,
        }
    }

    fn handle_welcome_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                Some(AppEvent::ToggleClientChoice)
            }
            KeyCode::Char('1') | KeyCode::Char('n') => Some(AppEvent::SelectClientType(ClientType::New)),
            KeyCode::Char('2') | KeyCode::Char('e') => Some(AppEvent::SelectClientType(ClientType::Existing)),
            KeyCode::Char('u') => Some(AppEvent::ToggleUserType),
            KeyCode::Char('h') => Some(AppEvent::ToggleHistory),
            KeyCode::Enter => Some(AppEvent::SelectHighlightedClientType),
            _ => None,
        }
    }

    fn handle_client_name_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Tab => Some(AppEvent::ToggleUserType),
            KeyCode::Enter => Some(AppEvent::Advance),
            KeyCode::Esc => Some(AppEvent::Retreat),
            KeyCode::Backspace => Some(AppEvent::InputBackspace),
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            _ => None,
        }
    }

    /// Single-line text field; `submit` is sent on Enter
    fn handle_text_keys(key_event: KeyEvent, submit: AppEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter => Some(submit),
            KeyCode::Esc => Some(AppEvent::Retreat),
            KeyCode::Backspace => Some(AppEvent::InputBackspace),
            KeyCode::Delete => Some(AppEvent::InputDelete),
            KeyCode::Left => Some(AppEvent::InputCursorLeft),
            KeyCode::Right => Some(AppEvent::InputCursorRight),
            KeyCode::Home => Some(AppEvent::InputCursorHome),
            KeyCode::End => Some(AppEvent::InputCursorEnd),
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            _ => None,
        }
    }

    /// Paging keys shared by every slide viewer
    fn viewer_navigation(key_event: &KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::SlidePrevious),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::SlideNext),
            KeyCode::Home => Some(AppEvent::SlideFirst),
            KeyCode::End => Some(AppEvent::SlideLast),
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| AppEvent::SlideJump(d as usize - 1)),
            _ => None,
        }
    }

    fn handle_viewer_keys(key_event: KeyEvent, markable: bool) -> Option<AppEvent> {
        if let Some(event) = Self::viewer_navigation(&key_event) {
            return Some(event);
        }
        match key_event.code {
            KeyCode::Char(' ') | KeyCode::Char('x') if markable => Some(AppEvent::ToggleSlideMark),
            KeyCode::Enter => Some(AppEvent::Advance),
            KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::Retreat),
            _ => None,
        }
    }

    fn handle_identification_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let generate = key_event.code == KeyCode::F(5)
            || (key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('r'));
        if generate {
            return Some(AppEvent::GenerateReport);
        }
        if key_event.code == KeyCode::Tab {
            return Some(AppEvent::CycleIdentificationFocus);
        }

        match state.view.identification_focus {
            IdentificationFocus::Input => Self::handle_text_keys(key_event, AppEvent::SubmitIdentification),
            IdentificationFocus::List => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::IdentificationUp),
                KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::IdentificationDown),
                KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => Some(AppEvent::RemoveIdentification),
                KeyCode::Char('g') => Some(AppEvent::GenerateReport),
                KeyCode::Enter => Some(AppEvent::Advance),
                KeyCode::Esc => Some(AppEvent::Retreat),
                _ => None,
            },
            IdentificationFocus::Report => match key_event.code {
                KeyCode::Char('g') => Some(AppEvent::GenerateReport),
                _ => Self::handle_viewer_keys(key_event, true),
            },
        }
    }

    fn handle_review_keys(key_event: KeyEvent) -> Option<AppEvent> {
        let shifted = key_event.modifiers.contains(KeyModifiers::SHIFT);
        match key_event.code {
            KeyCode::Left if shifted => return Some(AppEvent::MoveSlideLeft),
            KeyCode::Right if shifted => return Some(AppEvent::MoveSlideRight),
            KeyCode::Char('<') | KeyCode::Char(',') => return Some(AppEvent::MoveSlideLeft),
            KeyCode::Char('>') | KeyCode::Char('.') => return Some(AppEvent::MoveSlideRight),
            KeyCode::Char('d') | KeyCode::Delete => return Some(AppEvent::RemoveSlide),
            KeyCode::Char('p') => return Some(AppEvent::EnterAddProduct),
            KeyCode::Char('a') => return Some(AppEvent::EnterAddSlide),
            _ => {}
        }
        Self::handle_viewer_keys(key_event, false)
    }

    fn handle_product_picker_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.view.product_picker.is_previewing() {
            if let Some(event) = Self::viewer_navigation(&key_event) {
                return Some(event);
            }
            return match key_event.code {
                KeyCode::Char(' ') | KeyCode::Char('x') => Some(AppEvent::ToggleSlideMark),
                KeyCode::Char('a') => Some(AppEvent::PickerToggleAll),
                KeyCode::Enter => Some(AppEvent::PickerConfirm),
                KeyCode::Esc => Some(AppEvent::PickerClosePreview),
                _ => None,
            };
        }
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::PickerUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::PickerDown),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => Some(AppEvent::PickerActivate),
            KeyCode::Esc | KeyCode::Left => Some(AppEvent::Retreat),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event: {:?}", event);
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::ToggleHistory => state.toggle_history(),
            AppEvent::HistoryUp => state.history_up(),
            AppEvent::HistoryDown => state.history_down(),
            AppEvent::Advance => state.advance(),
            AppEvent::Retreat => state.retreat(),
            AppEvent::ToggleClientChoice => state.toggle_client_choice(),
            AppEvent::SelectClientType(client_type) => state.select_client_type(client_type),
            AppEvent::SelectHighlightedClientType => state.select_highlighted_client_type(),
            AppEvent::ToggleUserType => state.toggle_user_type(),
            AppEvent::InputChar(c) => state.input_char(c),
            AppEvent::InputBackspace => state.backspace(),
            AppEvent::InputDelete => state.delete_char(),
            AppEvent::InputCursorLeft => state.cursor_left(),
            AppEvent::InputCursorRight => state.cursor_right(),
            AppEvent::InputCursorHome => state.cursor_home(),
            AppEvent::InputCursorEnd => state.cursor_end(),
            AppEvent::SubmitIdentification => state.submit_identification(),
            AppEvent::CycleIdentificationFocus => state.cycle_identification_focus(),
            AppEvent::IdentificationUp => state.identification_up(),
            AppEvent::IdentificationDown => state.identification_down(),
            AppEvent::RemoveIdentification => state.remove_selected_identification(),
            AppEvent::GenerateReport => state.generate_report(),
            AppEvent::SlideNext => state.slide_next(),
            AppEvent::SlidePrevious => state.slide_previous(),
            AppEvent::SlideFirst => state.slide_first(),
            AppEvent::SlideLast => state.slide_last(),
            AppEvent::SlideJump(index) => state.slide_jump(index),
            AppEvent::ToggleSlideMark => state.toggle_current_mark(),
            AppEvent::MoveSlideLeft => state.move_current_slide(false),
            AppEvent::MoveSlideRight => state.move_current_slide(true),
            AppEvent::RemoveSlide => state.remove_current_slide(),
            AppEvent::EnterAddProduct => state.enter_add_product(),
            AppEvent::EnterAddSlide => state.enter_add_slide(),
            AppEvent::PickerUp => state.picker_up(),
            AppEvent::PickerDown => state.picker_down(),
            AppEvent::PickerActivate => state.picker_activate(),
            AppEvent::PickerToggleAll => state.picker_toggle_all(),
            AppEvent::PickerConfirm => state.picker_confirm(),
            AppEvent::PickerClosePreview => state.picker_close_preview(),
            AppEvent::SubmitUpload => state.submit_upload(),
            AppEvent::Consolidate => state.consolidate(),
        }
        state.ui_needs_refresh = true;
    }
}
