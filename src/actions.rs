//! Board action panel: "Reset Board" and "Exclude All".
//!
//! The panel owns nothing. It holds a weak handle to the shared store, reads
//! the published settings at trigger time, performs exactly one store
//! mutation and then releases focus from the control that fired it.

use crate::error::ActionError;
use crate::store::PuzzleStore;
use crate::{debug_log, info_log};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Something that can hold input focus.
pub trait Focusable {
    fn release_focus(&mut self);
}

/// A user activation of one of the panel controls.
///
/// `origin` is the control the activation came from, if any. Keyboard
/// shortcuts activate without one.
pub struct Activation<'a> {
    pub origin: Option<&'a mut dyn Focusable>,
}

impl<'a> Activation<'a> {
    pub fn from_origin(origin: &'a mut dyn Focusable) -> Self {
        Self {
            origin: Some(origin),
        }
    }

    pub fn without_origin() -> Self {
        Self { origin: None }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Informational,
    Destructive,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelControl {
    ResetBoard,
    ExcludeAll,
}

impl PanelControl {
    pub const ALL: [Self; 2] = [Self::ResetBoard, Self::ExcludeAll];

    pub fn label(self) -> &'static str {
        match self {
            Self::ResetBoard => "Reset Board",
            Self::ExcludeAll => "Exclude All",
        }
    }

    /// Human-readable description of the control's effect.
    pub fn description(self) -> &'static str {
        match self {
            Self::ResetBoard => "clear all letters from the board",
            Self::ExcludeAll => "set all letters unavailable",
        }
    }

    /// Exclude All cannot be undone within a session and is framed as destructive.
    pub fn severity(self) -> Severity {
        match self {
            Self::ResetBoard => Severity::Informational,
            Self::ExcludeAll => Severity::Destructive,
        }
    }
}

pub struct BoardActions<S: PuzzleStore> {
    store: Weak<RefCell<S>>,
}

impl<S: PuzzleStore> BoardActions<S> {
    pub fn new(store: &Rc<RefCell<S>>) -> Self {
        Self {
            store: Rc::downgrade(store),
        }
    }

    pub fn controls(&self) -> [PanelControl; 2] {
        PanelControl::ALL
    }

    pub fn trigger(
        &self,
        control: PanelControl,
        event: Option<Activation<'_>>,
    ) -> Result<(), ActionError> {
        match control {
            PanelControl::ResetBoard => self.click_reset(event),
            PanelControl::ExcludeAll => self.exclude_all(event),
        }
    }

    /// Rebuild the board using the store's current dimensions.
    pub fn click_reset(&self, event: Option<Activation<'_>>) -> Result<(), ActionError> {
        let handle = self.store()?;
        let mut store = handle
            .try_borrow_mut()
            .map_err(|_| ActionError::StoreUnavailable)?;

        let settings = match store.settings() {
            Some(settings) if settings.attempts > 0 && settings.word_length > 0 => settings,
            Some(settings) => {
                log::warn!("Reset refused: malformed board settings {settings:?}");
                return Err(ActionError::InvalidState(format!(
                    "attempts={} word_length={}",
                    settings.attempts, settings.word_length
                )));
            }
            None => {
                log::warn!("Reset refused: board settings are missing");
                return Err(ActionError::InvalidState("settings are missing".to_string()));
            }
        };

        store.reset_board(settings.attempts, settings.word_length)?;
        drop(store);
        info_log!(
            "click_reset() - board reset to {} x {}",
            settings.attempts,
            settings.word_length
        );
        release_focus(event);
        Ok(())
    }

    /// Mark every letter unavailable.
    pub fn exclude_all(&self, event: Option<Activation<'_>>) -> Result<(), ActionError> {
        self.store()?
            .try_borrow_mut()
            .map_err(|_| ActionError::StoreUnavailable)?
            .set_all_unavailable()?;
        info_log!("exclude_all() - all letters set unavailable");
        release_focus(event);
        Ok(())
    }

    fn store(&self) -> Result<Rc<RefCell<S>>, ActionError> {
        self.store.upgrade().ok_or_else(|| {
            log::error!("Board action triggered after the puzzle store was dropped");
            ActionError::StoreUnavailable
        })
    }
}

fn release_focus(event: Option<Activation<'_>>) {
    if let Some(origin) = event.and_then(|e| e.origin) {
        debug_log!("release_focus() - clearing focus from trigger origin");
        origin.release_focus();
    }
}
