//! Terminal-independent application state.
//!
//! `App` owns the shared board store, the action panel wired to it, and
//! which panel control (if any) has focus. Key events are translated into
//! board edits or panel triggers here so that the terminal layer only draws.

use crate::actions::{Activation, BoardActions, Focusable, PanelControl};
use crate::board::BoardState;
use crate::solver::rank_words;
use crate::store::{BoardSettings, PuzzleStore};
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Which panel control currently holds focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    focused: Option<PanelControl>,
}

impl FocusRing {
    pub fn focused(&self) -> Option<PanelControl> {
        self.focused
    }

    /// None -> Reset Board -> Exclude All -> None
    pub fn cycle(&mut self) {
        self.focused = match self.focused {
            None => Some(PanelControl::ResetBoard),
            Some(PanelControl::ResetBoard) => Some(PanelControl::ExcludeAll),
            Some(PanelControl::ExcludeAll) => None,
        };
    }
}

/// A single focused control, used as the origin of an activation.
struct ControlHandle<'a> {
    ring: &'a mut FocusRing,
    control: PanelControl,
}

impl Focusable for ControlHandle<'_> {
    fn release_focus(&mut self) {
        if self.ring.focused == Some(self.control) {
            self.ring.focused = None;
        }
    }
}

pub struct App {
    store: Rc<RefCell<BoardState>>,
    actions: BoardActions<BoardState>,
    focus: FocusRing,
    wordbank: WordBank,
    status: String,
    error_message: String,
}

impl App {
    pub fn new(settings: BoardSettings, wordbank: WordBank) -> Self {
        Self::with_store(Rc::new(RefCell::new(BoardState::new(settings))), wordbank)
    }

    pub fn with_store(store: Rc<RefCell<BoardState>>, wordbank: WordBank) -> Self {
        let actions = BoardActions::new(&store);
        Self {
            store,
            actions,
            focus: FocusRing::default(),
            wordbank,
            status: "Ready".to_string(),
            error_message: String::new(),
        }
    }

    pub fn board(&self) -> Ref<'_, BoardState> {
        self.store.borrow()
    }

    pub fn controls(&self) -> [PanelControl; 2] {
        self.actions.controls()
    }

    pub fn focused(&self) -> Option<PanelControl> {
        self.focus.focused()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Viable words for the current board, best first.
    pub fn viable_words(&self) -> Vec<String> {
        let board = self.store.borrow();
        let Some(settings) = board.settings() else {
            return Vec::new();
        };
        rank_words(
            self.wordbank.words_of_length(settings.word_length),
            &board.restrictions(),
            settings.word_length,
        )
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        debug_log!(
            "handle_key() - code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => self.focus.cycle(),
            KeyCode::Char('r' | 'R') if ctrl => self.activate(PanelControl::ResetBoard, false),
            KeyCode::Char('x' | 'X') if ctrl => self.activate(PanelControl::ExcludeAll, false),
            KeyCode::Char(c) if alt && c.is_ascii_alphabetic() => {
                self.error_message.clear();
                if self.store.borrow_mut().toggle_letter(c) {
                    let available = self.store.borrow().is_available(c);
                    self.status = format!(
                        "{} is now {}",
                        c.to_ascii_uppercase(),
                        if available { "available" } else { "unavailable" }
                    );
                }
            }
            KeyCode::Char(' ') => {
                self.store.borrow_mut().cycle_mark_at_cursor();
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                self.error_message.clear();
                if !self.store.borrow_mut().type_letter(c) && !c.is_ascii_alphabetic() {
                    self.error_message =
                        format!("Only letters are allowed! ('{c}' is not a letter)");
                }
            }
            KeyCode::Backspace => {
                self.store.borrow_mut().backspace();
            }
            KeyCode::Left => self.store.borrow_mut().move_cursor(-1),
            KeyCode::Right => self.store.borrow_mut().move_cursor(1),
            KeyCode::Enter => match self.focus.focused() {
                Some(control) => self.activate(control, true),
                None => {
                    if !self.store.borrow_mut().next_row() {
                        self.error_message = "Fill the current row first".to_string();
                    }
                }
            },
            _ => {}
        }
        AppAction::Continue
    }

    /// Fire a panel control, from the focused control or from a shortcut.
    fn activate(&mut self, control: PanelControl, from_focus: bool) {
        let result = if from_focus {
            let mut origin = ControlHandle {
                ring: &mut self.focus,
                control,
            };
            self.actions
                .trigger(control, Some(Activation::from_origin(&mut origin)))
        } else {
            self.actions.trigger(control, None)
        };

        match result {
            Ok(()) => {
                info_log!("activate() - {:?} succeeded", control);
                self.error_message.clear();
                self.status = format!("{}: {}", control.label(), control.description());
            }
            Err(e) => {
                log::error!("{} failed: {e}", control.label());
                self.error_message = format!("{} failed: {e}", control.label());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellMark;
    use crate::wordbank::load_wordbank_from_str;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(
            BoardSettings::default(),
            load_wordbank_from_str("crane\nslate\nbrick\npious\n"),
        )
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(app().handle_key(key(KeyCode::Esc)), AppAction::Quit);
    }

    #[test]
    fn test_typing_fills_board() {
        let mut app = app();
        type_word(&mut app, "crane");
        let board = app.board();
        let letters: String = board.rows()[0].iter().filter_map(|c| c.letter).collect();
        assert_eq!(letters, "CRANE");
    }

    #[test]
    fn test_non_letter_sets_error() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('7')));
        assert!(app.error_message().contains("not a letter"));
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = app();
        assert_eq!(app.focused(), None);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focused(), Some(PanelControl::ResetBoard));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focused(), Some(PanelControl::ExcludeAll));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focused(), None);
    }

    #[test]
    fn test_enter_on_focused_reset_clears_board_and_focus() {
        let mut app = app();
        type_word(&mut app, "crane");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.focused(), None);
        assert!(app.board().rows().iter().flatten().all(|c| c.letter.is_none()));
        assert_eq!(app.status(), "Reset Board: clear all letters from the board");
    }

    #[test]
    fn test_enter_on_focused_exclude_all() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.focused(), None);
        assert_eq!(app.board().available_letters(), "");
        assert!(app.viable_words().is_empty());
    }

    #[test]
    fn test_shortcuts_trigger_without_touching_focus() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(ctrl('x'));
        assert_eq!(app.board().available_letters(), "");
        assert_eq!(app.focused(), Some(PanelControl::ResetBoard));

        app.handle_key(ctrl('r'));
        assert_eq!(app.board().available_letters().len(), 26);
        assert_eq!(app.focused(), Some(PanelControl::ResetBoard));
    }

    #[test]
    fn test_reset_failure_reported_and_focus_kept() {
        let store = Rc::new(RefCell::new(BoardState::unconfigured()));
        let mut app = App::with_store(store, WordBank::default());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.error_message().contains("Reset Board failed"));
        assert_eq!(app.focused(), Some(PanelControl::ResetBoard));
    }

    #[test]
    fn test_enter_without_focus_advances_row() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.error_message().is_empty());
        type_word(&mut app, "crane");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.board().cursor(), (1, 0));
    }

    #[test]
    fn test_alt_letter_toggles_availability() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::ALT));
        assert!(!app.board().is_available('C'));
        assert_eq!(app.status(), "C is now unavailable");
        assert_eq!(app.viable_words(), ["PIOUS", "SLATE"]);
    }

    #[test]
    fn test_space_marks_cell_and_filters_words() {
        let mut app = app();
        type_word(&mut app, "brick");
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(app.board().rows()[0][2].mark, CellMark::Absent);
        assert!(!app.viable_words().contains(&"PIOUS".to_string()));
        assert!(app.viable_words().contains(&"CRANE".to_string()));
    }

    #[test]
    fn test_backspace_removes_letter() {
        let mut app = app();
        type_word(&mut app, "cr");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.board().cursor(), (0, 1));
    }
}
