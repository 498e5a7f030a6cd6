//! Modal forms drawn over the active page.
//!
//! An open overlay receives every key first. Its handler returns an
//! `OverlayUpdate` saying whether to stay open and which mutations to apply.

mod comedian_form;
pub mod render_utils;
mod show_form;
mod venue_form;

pub use comedian_form::{ComedianFormMode, ComedianFormState};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use show_form::ShowFormState;
pub use venue_form::VenueFormState;

use crate::mutations::StateMutation;
use crate::state::TuiState;

/// Asks the reducer to open a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    AddComedian,
    /// Opens the form on `Session::edited_comedian`.
    EditComedian,
    AddVenue,
    ScheduleShow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
            mutations: Vec::new(),
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
            mutations: Vec::new(),
        }
    }

    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }
}

#[derive(Debug, Clone)]
pub enum Overlay {
    ComedianForm(ComedianFormState),
    VenueForm(VenueFormState),
    ShowForm(ShowFormState),
}

impl Overlay {
    /// Builds the overlay for `request`; `None` if an edit has no target.
    pub fn open(request: OverlayRequest, tui: &TuiState) -> Option<Self> {
        let overlay = match request {
            OverlayRequest::AddComedian => Overlay::ComedianForm(ComedianFormState::open_add()),
            OverlayRequest::EditComedian => {
                let (index, comedian) = tui.session.edited_comedian()?;
                Overlay::ComedianForm(ComedianFormState::open_edit(index, comedian))
            }
            OverlayRequest::AddVenue => Overlay::VenueForm(VenueFormState::open()),
            OverlayRequest::ScheduleShow => Overlay::ShowForm(ShowFormState::open(tui)),
        };
        Some(overlay)
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::ComedianForm(form) => form.handle_key(tui, key),
            Overlay::VenueForm(form) => form.handle_key(key),
            Overlay::ShowForm(form) => form.handle_key(tui, key),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::ComedianForm(form) => form.render(frame, area),
            Overlay::VenueForm(form) => form.render(frame, area),
            Overlay::ShowForm(form) => form.render(frame, area),
        }
    }
}

/// Routes a key to the open overlay and closes it when asked.
///
/// Returns `None` when no overlay is open.
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<Vec<StateMutation>> {
    let update = overlay.as_mut()?.handle_key(tui, key);
    if update.transition == OverlayTransition::Close {
        *overlay = None;
    }
    Some(update.mutations)
}
