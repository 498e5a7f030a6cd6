use crossterm::event::{KeyCode, KeyEvent};
use standup_core::session::Session;

use super::VenuesState;
use crate::common::step_selection;
use crate::features::{KeyOutcome, nothing};
use crate::overlays::OverlayRequest;

pub fn handle_key(state: &mut VenuesState, session: &Session, key: KeyEvent) -> KeyOutcome {
    let len = session.store.venues.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = step_selection(state.selected, len, -1);
            nothing()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = step_selection(state.selected, len, 1);
            nothing()
        }
        KeyCode::Char('a' | 'n') => (Vec::new(), Vec::new(), Some(OverlayRequest::AddVenue)),
        _ => nothing(),
    }
}
