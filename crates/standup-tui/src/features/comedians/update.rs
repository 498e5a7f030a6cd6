use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use standup_core::session::{Action, Session};

use super::ComediansState;
use crate::common::step_selection;
use crate::features::{KeyOutcome, nothing};
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;

pub fn handle_key(state: &mut ComediansState, session: &Session, key: KeyEvent) -> KeyOutcome {
    if state.searching {
        handle_search_key(state, key);
        return nothing();
    }

    let matches = session.store.search_comedians(&state.search);
    let selected = matches
        .get(state.selected.min(matches.len().saturating_sub(1)))
        .map(|(index, _)| *index);

    match key.code {
        KeyCode::Char('/') => {
            state.searching = true;
            nothing()
        }
        KeyCode::Esc if !state.search.is_empty() => {
            state.search.clear();
            state.selected = 0;
            nothing()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = step_selection(state.selected, matches.len(), -1);
            nothing()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = step_selection(state.selected, matches.len(), 1);
            nothing()
        }
        KeyCode::Char('a' | 'n') => (Vec::new(), Vec::new(), Some(OverlayRequest::AddComedian)),
        KeyCode::Char('e') | KeyCode::Enter => match selected {
            Some(index) => (
                Vec::new(),
                vec![StateMutation::Session(Action::BeginEditComedian { index })],
                Some(OverlayRequest::EditComedian),
            ),
            None => nothing(),
        },
        KeyCode::Char('d') | KeyCode::Delete => match selected {
            Some(index) => {
                if matches.len() > 1 && state.selected + 1 >= matches.len() {
                    state.selected = matches.len() - 2;
                }
                (
                    Vec::new(),
                    vec![StateMutation::Session(Action::RemoveComedian { index })],
                    None,
                )
            }
            None => nothing(),
        },
        _ => nothing(),
    }
}

fn handle_search_key(state: &mut ComediansState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            state.searching = false;
        }
        KeyCode::Backspace => {
            state.search.pop();
            state.selected = 0;
        }
        KeyCode::Char('u') if ctrl => {
            state.search.clear();
            state.selected = 0;
        }
        KeyCode::Char(c) if !ctrl => {
            state.search.push(c);
            state.selected = 0;
        }
        _ => {}
    }
}
