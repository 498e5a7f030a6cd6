//! Form widgets used by the add/edit/schedule overlays.
//!
//! Every numeric widget clamps to its declared range, so a submitted form
//! never carries an out-of-range value.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use standup_core::format;
use standup_core::models::Limits;

/// Key input reduced to what form widgets care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Next,
    Previous,
    Decrease,
    Increase,
    Char(char),
    Backspace,
    Submit,
    Cancel,
    Other,
}

impl FormKey {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => FormKey::Cancel,
            KeyCode::Esc => FormKey::Cancel,
            KeyCode::Enter => FormKey::Submit,
            KeyCode::Tab | KeyCode::Down => FormKey::Next,
            KeyCode::BackTab | KeyCode::Up => FormKey::Previous,
            KeyCode::Left => FormKey::Decrease,
            KeyCode::Right => FormKey::Increase,
            KeyCode::Backspace => FormKey::Backspace,
            KeyCode::Char(c) if !ctrl => FormKey::Char(c),
            _ => FormKey::Other,
        }
    }

    fn step(self) -> Option<i64> {
        match self {
            FormKey::Decrease | FormKey::Char('-') => Some(-1),
            FormKey::Increase | FormKey::Char('+' | '=') => Some(1),
            _ => None,
        }
    }
}

/// A single editable form value.
pub trait FormField {
    /// Applies a key; returns `false` when the widget ignores it.
    fn apply(&mut self, key: FormKey) -> bool;

    /// Current value as shown in the form.
    fn display(&self) -> String;
}

/// Tracks which of `len` fields has focus; wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    len: usize,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
}

impl TextField {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl FormField for TextField {
    fn apply(&mut self, key: FormKey) -> bool {
        match key {
            FormKey::Char(c) => {
                self.value.push(c);
                true
            }
            FormKey::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }

    fn display(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Count,
    Dollars,
}

/// Whole-number input stepped by `limits.step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stepper {
    value: u32,
    limits: Limits<u32>,
    unit: Unit,
}

impl Stepper {
    pub fn new(value: u32, limits: Limits<u32>, unit: Unit) -> Self {
        Self {
            value: limits.clamp(value),
            limits,
            unit,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl FormField for Stepper {
    fn apply(&mut self, key: FormKey) -> bool {
        let Some(direction) = key.step() else {
            return false;
        };
        let next = if direction < 0 {
            self.value.saturating_sub(self.limits.step)
        } else {
            self.value.saturating_add(self.limits.step)
        };
        self.value = self.limits.clamp(next);
        true
    }

    fn display(&self) -> String {
        match self.unit {
            Unit::Count => self.value.to_string(),
            Unit::Dollars => format::dollars(u64::from(self.value)),
        }
    }
}

/// One-decimal slider. Kept in tenths so repeated steps do not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    tenths: i64,
    min: i64,
    max: i64,
    step: i64,
}

impl Slider {
    pub fn new(value: f64, limits: Limits<f64>) -> Self {
        let to_tenths = |v: f64| (v * 10.0).round() as i64;
        let (min, max) = (to_tenths(limits.min), to_tenths(limits.max));
        Self {
            tenths: to_tenths(value).clamp(min, max),
            min,
            max,
            step: to_tenths(limits.step).max(1),
        }
    }

    pub fn value(&self) -> f64 {
        self.tenths as f64 / 10.0
    }
}

impl FormField for Slider {
    fn apply(&mut self, key: FormKey) -> bool {
        let Some(direction) = key.step() else {
            return false;
        };
        self.tenths = (self.tenths + direction * self.step).clamp(self.min, self.max);
        true
    }

    fn display(&self) -> String {
        let filled = ((self.tenths - self.min) * 20 / (self.max - self.min).max(1)) as usize;
        format!(
            "{:.1}  {}{}",
            self.value(),
            "━".repeat(filled),
            "─".repeat(20 - filled.min(20))
        )
    }
}

/// Single selection from a list of names; cycles with Left/Right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    options: Vec<String>,
    selected: usize,
}

impl Choice {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    /// `None` when there is nothing to choose from.
    pub fn value(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }
}

impl FormField for Choice {
    fn apply(&mut self, key: FormKey) -> bool {
        let len = self.options.len();
        if len == 0 {
            return false;
        }
        match key.step() {
            Some(-1) => self.selected = (self.selected + len - 1) % len,
            Some(_) => self.selected = (self.selected + 1) % len,
            None => return false,
        }
        true
    }

    fn display(&self) -> String {
        match self.value() {
            Some(value) => format!("◀ {value} ▶"),
            None => "(none available)".to_string(),
        }
    }
}

/// Multiple selection; Left/Right move the cursor, Space toggles.
///
/// Picks are kept in the order they were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiChoice {
    options: Vec<String>,
    cursor: usize,
    picked: Vec<usize>,
}

impl MultiChoice {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            cursor: 0,
            picked: Vec::new(),
        }
    }

    pub fn selected(&self) -> Vec<String> {
        self.picked
            .iter()
            .filter_map(|&i| self.options.get(i).cloned())
            .collect()
    }

    /// `(name, picked, under cursor)` for each option.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool, bool)> + '_ {
        self.options.iter().enumerate().map(|(i, name)| {
            (name.as_str(), self.picked.contains(&i), i == self.cursor)
        })
    }

    fn toggle(&mut self) {
        if self.cursor >= self.options.len() {
            return;
        }
        if let Some(pos) = self.picked.iter().position(|&i| i == self.cursor) {
            self.picked.remove(pos);
        } else {
            self.picked.push(self.cursor);
        }
    }
}

impl FormField for MultiChoice {
    fn apply(&mut self, key: FormKey) -> bool {
        let len = self.options.len();
        if len == 0 {
            return false;
        }
        match key {
            FormKey::Char(' ') => self.toggle(),
            FormKey::Decrease => self.cursor = (self.cursor + len - 1) % len,
            FormKey::Increase => self.cursor = (self.cursor + 1) % len,
            _ => return false,
        }
        true
    }

    fn display(&self) -> String {
        let selected = self.selected();
        if selected.is_empty() {
            "(none selected)".to_string()
        } else {
            selected.join(", ")
        }
    }
}

/// Calendar date stepped one day at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateField {
    pub value: NaiveDate,
}

impl FormField for DateField {
    fn apply(&mut self, key: FormKey) -> bool {
        let Some(direction) = key.step() else {
            return false;
        };
        if let Some(next) = self
            .value
            .checked_add_signed(TimeDelta::days(direction))
        {
            self.value = next;
        }
        true
    }

    fn display(&self) -> String {
        self.value.format("%B %d, %Y").to_string()
    }
}

/// Time of day stepped in quarter hours; wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeField {
    pub value: NaiveTime,
}

impl TimeField {
    const STEP_MINUTES: i64 = 15;
}

impl FormField for TimeField {
    fn apply(&mut self, key: FormKey) -> bool {
        let Some(direction) = key.step() else {
            return false;
        };
        let (next, _) = self
            .value
            .overflowing_add_signed(TimeDelta::minutes(direction * Self::STEP_MINUTES));
        self.value = next;
        true
    }

    fn display(&self) -> String {
        self.value.format("%I:%M %p").to_string()
    }
}
