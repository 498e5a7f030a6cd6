use crossterm::event::{KeyCode, KeyEvent};
use standup_core::session::{Action, Session};

use super::ShowsState;
use crate::common::step_selection;
use crate::effects::UiEffect;
use crate::features::{KeyOutcome, nothing};
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;

pub fn handle_key(state: &mut ShowsState, session: &Session, key: KeyEvent) -> KeyOutcome {
    let len = session.store.shows.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = step_selection(state.selected, len, -1);
            nothing()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = step_selection(state.selected, len, 1);
            nothing()
        }
        KeyCode::Char('a' | 'n') => (Vec::new(), Vec::new(), Some(OverlayRequest::ScheduleShow)),
        KeyCode::Char('s' | 't') => match state.selected_id(session) {
            Some(show) => (vec![UiEffect::DrawTickets { show }], Vec::new(), None),
            None => nothing(),
        },
        KeyCode::Char('c' | 'x') | KeyCode::Delete => match state.selected_id(session) {
            Some(show) => {
                state.selected = step_selection(state.selected, len.saturating_sub(1), 0);
                (
                    Vec::new(),
                    vec![StateMutation::Session(Action::CancelShow { show })],
                    None,
                )
            }
            None => nothing(),
        },
        _ => nothing(),
    }
}
