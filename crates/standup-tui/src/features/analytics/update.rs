use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::features::KeyOutcome;
use crate::mutations::StateMutation;

/// Every key handled here redraws the forecast; `r` also says so.
pub fn handle_key(key: KeyEvent) -> KeyOutcome {
    let mutations = match key.code {
        KeyCode::Char('r') => vec![StateMutation::Notice("Forecast refreshed".to_string())],
        _ => Vec::new(),
    };
    (vec![UiEffect::DrawForecast], mutations, None)
}
