//! Add and edit form for comedians.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use standup_core::models::{COMEDIAN_FEE, Comedian, RATING};
use standup_core::session::Action;

use super::OverlayUpdate;
use super::render_utils::{FORM_HINTS, FormRow, OverlayConfig, render_form_rows, render_overlay};
use crate::common::{FocusRing, FormField, FormKey, Slider, Stepper, TextField, Unit};
use crate::mutations::StateMutation;
use crate::state::TuiState;

const DEFAULT_RATING: f64 = 4.0;
const DEFAULT_FEE: u32 = 5_000;
const LABELS: [&str; 4] = ["Name", "Rating", "Booking Fee", "Specialty"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComedianFormMode {
    Add,
    /// Editing the comedian at this storage index.
    Edit { index: usize },
}

#[derive(Debug, Clone)]
pub struct ComedianFormState {
    pub mode: ComedianFormMode,
    focus: FocusRing,
    pub name: TextField,
    pub rating: Slider,
    pub fee: Stepper,
    pub specialty: TextField,
}

impl ComedianFormState {
    pub fn open_add() -> Self {
        Self {
            mode: ComedianFormMode::Add,
            focus: FocusRing::new(LABELS.len()),
            name: TextField::default(),
            rating: Slider::new(DEFAULT_RATING, RATING),
            fee: Stepper::new(DEFAULT_FEE, COMEDIAN_FEE, Unit::Dollars),
            specialty: TextField::default(),
        }
    }

    /// Pre-fills the form from the record being edited.
    pub fn open_edit(index: usize, comedian: &Comedian) -> Self {
        Self {
            mode: ComedianFormMode::Edit { index },
            focus: FocusRing::new(LABELS.len()),
            name: TextField::with_value(&comedian.name),
            rating: Slider::new(comedian.rating, RATING),
            fee: Stepper::new(comedian.fee, COMEDIAN_FEE, Unit::Dollars),
            specialty: TextField::with_value(&comedian.specialty),
        }
    }

    fn field_mut(&mut self) -> &mut dyn FormField {
        match self.focus.index() {
            0 => &mut self.name,
            1 => &mut self.rating,
            2 => &mut self.fee,
            _ => &mut self.specialty,
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match FormKey::from_key(key) {
            FormKey::Cancel => match self.mode {
                ComedianFormMode::Add => OverlayUpdate::close(),
                ComedianFormMode::Edit { .. } => OverlayUpdate::close()
                    .with_mutations(vec![StateMutation::Session(Action::CancelEdit)]),
            },
            FormKey::Submit => self.submit(),
            FormKey::Next => {
                self.focus.next();
                OverlayUpdate::stay()
            }
            FormKey::Previous => {
                self.focus.previous();
                OverlayUpdate::stay()
            }
            other => {
                self.field_mut().apply(other);
                OverlayUpdate::stay()
            }
        }
    }

    /// A blank name keeps the form open and changes nothing.
    fn submit(&self) -> OverlayUpdate {
        let Ok(comedian) = Comedian::new(
            &self.name.value,
            self.rating.value(),
            self.fee.value(),
            &self.specialty.value,
        ) else {
            return OverlayUpdate::stay();
        };
        let action = match self.mode {
            ComedianFormMode::Add => Action::AddComedian(comedian),
            ComedianFormMode::Edit { index } => Action::SaveComedian { index, comedian },
        };
        OverlayUpdate::close().with_mutations(vec![StateMutation::Session(action)])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (title, accent) = match self.mode {
            ComedianFormMode::Add => ("Add New Comedian", Color::Magenta),
            ComedianFormMode::Edit { .. } => ("Edit Comedian", Color::Yellow),
        };
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title,
                border_color: accent,
                width: 60,
                height: 9,
                hints: &FORM_HINTS,
            },
        );
        let values = [
            (self.name.display(), true),
            (self.rating.display(), false),
            (self.fee.display(), false),
            (self.specialty.display(), true),
        ];
        let rows: Vec<FormRow> = LABELS
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (&label, (value, text)))| FormRow {
                label,
                value,
                focused: i == self.focus.index(),
                text,
            })
            .collect();
        let body = Rect::new(
            layout.body.x,
            layout.body.y + 1,
            layout.body.width,
            layout.body.height.saturating_sub(1),
        );
        render_form_rows(frame, body, &rows, accent);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};
    use standup_core::config::Config;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn tui() -> TuiState {
        let now = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        TuiState::new(Config::default(), now)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_add_submits_defaults() {
        let tui = tui();
        let mut form = ComedianFormState::open_add();
        for c in "Maria Bamford".chars() {
            form.handle_key(&tui, press(KeyCode::Char(c)));
        }
        let update = form.handle_key(&tui, press(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        let expected = Comedian::new("Maria Bamford", 4.0, 5_000, "").unwrap();
        assert_eq!(
            update.mutations,
            [StateMutation::Session(Action::AddComedian(expected))]
        );
    }

    #[test]
    fn test_blank_name_stays_open() {
        let tui = tui();
        let mut form = ComedianFormState::open_add();
        form.handle_key(&tui, press(KeyCode::Char(' ')));
        let update = form.handle_key(&tui, press(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_edit_prefills_and_saves_by_index() {
        let tui = tui();
        let original = &tui.session.store.comedians[1];
        let mut form = ComedianFormState::open_edit(1, original);
        assert_eq!(form.name.value, "Ali Wong");

        form.handle_key(&tui, press(KeyCode::Tab));
        form.handle_key(&tui, press(KeyCode::Right));
        form.handle_key(&tui, press(KeyCode::Tab));
        form.handle_key(&tui, press(KeyCode::Char('+')));
        let update = form.handle_key(&tui, press(KeyCode::Enter));

        let expected = Comedian::new("Ali Wong", 4.8, 10_500, "Family life").unwrap();
        assert_eq!(
            update.mutations,
            [StateMutation::Session(Action::SaveComedian {
                index: 1,
                comedian: expected
            })]
        );
    }

    #[test]
    fn test_edit_cancel_clears_edit_state() {
        let tui = tui();
        let mut form = ComedianFormState::open_edit(0, &tui.session.store.comedians[0]);
        let update = form.handle_key(&tui, press(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(
            update.mutations,
            [StateMutation::Session(Action::CancelEdit)]
        );
    }
}
