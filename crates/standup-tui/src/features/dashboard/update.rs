use crossterm::event::{KeyCode, KeyEvent};
use standup_core::session::Action;

use super::{DashboardState, QUICK_ACTIONS};
use crate::common::step_selection;
use crate::features::{KeyOutcome, nothing};
use crate::mutations::StateMutation;

pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
            state.action = step_selection(state.action, QUICK_ACTIONS.len(), -1);
            nothing()
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => {
            state.action = step_selection(state.action, QUICK_ACTIONS.len(), 1);
            nothing()
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let (_, page) = QUICK_ACTIONS[state.action.min(QUICK_ACTIONS.len() - 1)];
            (
                Vec::new(),
                vec![StateMutation::Session(Action::Navigate(page))],
                None,
            )
        }
        _ => nothing(),
    }
}
