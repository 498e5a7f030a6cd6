use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use standup_core::models::{Show, ShowRequest};
use standup_core::session::Action;

use super::OverlayUpdate;
use super::render_utils::{
    FormRow, InputHint, OverlayConfig, render_form_rows, render_overlay,
};
use crate::common::{
    Choice, DateField, FocusRing, FormField, FormKey, MultiChoice, TextField, TimeField,
};
use crate::mutations::StateMutation;
use crate::state::TuiState;

const LABELS: [&str; 5] = ["Title", "Date", "Time", "Venue", "Comedians"];
const COMEDIANS: usize = 4;
const DAYS_AHEAD: i64 = 7;

/// Default show time, 8 PM.
fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 0, 0).unwrap_or(NaiveTime::MIN)
}

#[derive(Debug, Clone)]
pub struct ShowFormState {
    focus: FocusRing,
    pub title: TextField,
    pub date: DateField,
    pub time: TimeField,
    pub venue: Choice,
    pub comedians: MultiChoice,
}

impl ShowFormState {
    /// Opens the form a week after `tui.now`, offering the current venues
    /// and roster.
    pub fn open(tui: &TuiState) -> Self {
        let store = &tui.session.store;
        let date = tui
            .now
            .date()
            .checked_add_signed(TimeDelta::days(DAYS_AHEAD))
            .unwrap_or(tui.now.date());
        Self {
            focus: FocusRing::new(LABELS.len()),
            title: TextField::default(),
            date: DateField { value: date },
            time: TimeField {
                value: default_time(),
            },
            venue: Choice::new(store.venues.iter().map(|v| v.name.clone()).collect()),
            comedians: MultiChoice::new(store.comedians.iter().map(|c| c.name.clone()).collect()),
        }
    }

    pub fn request(&self) -> ShowRequest {
        ShowRequest {
            title: self.title.value.clone(),
            date: NaiveDateTime::new(self.date.value, self.time.value),
            venue: self.venue.value().map(str::to_string),
            comedians: self.comedians.selected(),
        }
    }

    fn field_mut(&mut self) -> &mut dyn FormField {
        match self.focus.index() {
            0 => &mut self.title,
            1 => &mut self.date,
            2 => &mut self.time,
            3 => &mut self.venue,
            _ => &mut self.comedians,
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match FormKey::from_key(key) {
            FormKey::Cancel => OverlayUpdate::close(),
            FormKey::Submit => {
                let request = self.request();
                let venue = request
                    .venue
                    .as_deref()
                    .and_then(|name| tui.session.store.find_venue(name));
                if Show::schedule(&request, venue).is_err() {
                    return OverlayUpdate::stay();
                }
                OverlayUpdate::close()
                    .with_mutations(vec![StateMutation::Session(Action::ScheduleShow(request))])
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
                self.field_mut().apply(other);
                OverlayUpdate::stay()
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let accent = Color::Green;
        let hints = [
            InputHint::new("Tab", "next"),
            InputHint::new("←/→", "adjust"),
            InputHint::new("Space", "pick"),
            InputHint::new("Enter", "schedule"),
            InputHint::new("Esc", "cancel"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Schedule New Show",
                border_color: accent,
                width: 70,
                height: 14,
                hints: &hints,
            },
        );

        let focus = self.focus.index();
        let values = [
            (self.title.display(), true),
            (self.date.display(), false),
            (self.time.display(), false),
            (self.venue.display(), false),
            (self.comedians.display(), false),
        ];
        let rows: Vec<FormRow> = LABELS
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (&label, (value, text)))| FormRow {
                label,
                value,
                focused: i == focus,
                text,
            })
            .collect();
        let body = Rect::new(
            layout.body.x,
            layout.body.y + 1,
            layout.body.width,
            layout.body.height.saturating_sub(1),
        );
        let used = render_form_rows(frame, body, &rows, accent);

        let options_area = Rect::new(
            body.x + 2,
            body.y + used + 1,
            body.width.saturating_sub(2),
            body.height.saturating_sub(used + 1),
        );
        let mut spans = Vec::new();
        for (name, picked, under_cursor) in self.comedians.entries() {
            let mark = if picked { "[x]" } else { "[ ]" };
            let mut style = if picked {
                Style::default().fg(accent)
            } else {
                Style::default().fg(Color::Gray)
            };
            if under_cursor && focus == COMEDIANS {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{mark} {name}"), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
            options_area,
        );
    }
}
