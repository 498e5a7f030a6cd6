use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use standup_core::models::{RENTAL_FEE, VENUE_CAPACITY, Venue};
use standup_core::session::Action;

use super::OverlayUpdate;
use super::render_utils::{FORM_HINTS, FormRow, OverlayConfig, render_form_rows, render_overlay};
use crate::common::{FocusRing, FormField, FormKey, Stepper, TextField, Unit};
use crate::mutations::StateMutation;

const DEFAULT_CAPACITY: u32 = 200;
const DEFAULT_RENTAL_FEE: u32 = 2_000;
const LABELS: [&str; 3] = ["Name", "Capacity", "Rental Fee"];

#[derive(Debug, Clone)]
pub struct VenueFormState {
    focus: FocusRing,
    pub name: TextField,
    pub capacity: Stepper,
    pub rental_fee: Stepper,
}

impl VenueFormState {
    pub fn open() -> Self {
        Self {
            focus: FocusRing::new(LABELS.len()),
            name: TextField::default(),
            capacity: Stepper::new(DEFAULT_CAPACITY, VENUE_CAPACITY, Unit::Count),
            rental_fee: Stepper::new(DEFAULT_RENTAL_FEE, RENTAL_FEE, Unit::Dollars),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match FormKey::from_key(key) {
            FormKey::Cancel => OverlayUpdate::close(),
            FormKey::Submit => {
                match Venue::new(
                    &self.name.value,
                    self.capacity.value(),
                    self.rental_fee.value(),
                ) {
                    Ok(venue) => OverlayUpdate::close()
                        .with_mutations(vec![StateMutation::Session(Action::AddVenue(venue))]),
                    Err(_) => OverlayUpdate::stay(),
                }
            }
            FormKey::Next => {
                self.focus.next();
                OverlayUpdate::stay()
            }
            FormKey::Previous => {
                self.focus.previous();
                OverlayUpdate::stay()
            }
            other => {
                match self.focus.index() {
                    0 => self.name.apply(other),
                    1 => self.capacity.apply(other),
                    _ => self.rental_fee.apply(other),
                };
                OverlayUpdate::stay()
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let accent = Color::Cyan;
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Add New Venue",
                border_color: accent,
                width: 56,
                height: 8,
                hints: &FORM_HINTS,
            },
        );
        let focus = self.focus.index();
        let rows = [
            FormRow {
                label: LABELS[0],
                value: self.name.display(),
                focused: focus == 0,
                text: true,
            },
            FormRow {
                label: LABELS[1],
                value: self.capacity.display(),
                focused: focus == 1,
                text: false,
            },
            FormRow {
                label: LABELS[2],
                value: self.rental_fee.display(),
                focused: focus == 2,
                text: false,
            },
        ];
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
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::overlays::OverlayTransition;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_submit_with_adjusted_capacity() {
        let mut form = VenueFormState::open();
        for c in "The Cellar".chars() {
            form.handle_key(press(KeyCode::Char(c)));
        }
        form.handle_key(press(KeyCode::Tab));
        form.handle_key(press(KeyCode::Right));
        form.handle_key(press(KeyCode::Right));
        let update = form.handle_key(press(KeyCode::Enter));

        assert!(matches!(update.transition, OverlayTransition::Close));
        let expected = Venue::new("The Cellar", 220, 2_000).unwrap();
        assert_eq!(
            update.mutations,
            [StateMutation::Session(Action::AddVenue(expected))]
        );
    }

    #[test]
    fn test_capacity_clamps_at_minimum() {
        let mut form = VenueFormState::open();
        form.handle_key(press(KeyCode::Tab));
        for _ in 0..50 {
            form.handle_key(press(KeyCode::Left));
        }
        assert_eq!(form.capacity.value(), VENUE_CAPACITY.min);
    }

    #[test]
    fn test_empty_name_stays_open() {
        let mut form = VenueFormState::open();
        let update = form.handle_key(press(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert!(update.mutations.is_empty());
    }
}
