//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Session          (records, current page, edit index)
//! │   ├── config: Config
//! │   ├── dashboard / comedians / shows / venues / analytics
//! │   │                             (per-page view state)
//! │   └── notice: Option<Notice>    (transient status-bar message)
//! └── overlay: Option<Overlay>      (open form, if any)
//! ```
//!
//! The overlay is kept beside `TuiState` so a form's key handler can hold
//! `&mut self` while reading the rest of the state.

use std::time::Instant;

use chrono::NaiveDateTime;
use standup_core::config::Config;
use standup_core::navigator::Page;
use standup_core::session::Session;

use crate::features::{AnalyticsState, ComediansState, DashboardState, ShowsState, VenuesState};
use crate::overlays::Overlay;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Seeds a session relative to `now` and opens `config.ui.start_page`.
    pub fn new(config: Config, now: NaiveDateTime) -> Self {
        Self {
            tui: TuiState::new(config, now),
            overlay: None,
        }
    }
}

/// A confirmation shown in the status bar until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub shown_at: Instant,
}

pub struct TuiState {
    pub should_quit: bool,
    pub session: Session,
    pub config: Config,
    /// Startup time; seeds the show dates and the schedule-form defaults.
    pub now: NaiveDateTime,
    pub dashboard: DashboardState,
    pub comedians: ComediansState,
    pub shows: ShowsState,
    pub venues: VenuesState,
    pub analytics: AnalyticsState,
    pub notice: Option<Notice>,
}

impl TuiState {
    pub fn new(config: Config, now: NaiveDateTime) -> Self {
        let session = Session::new(now, config.ui.start_page);
        Self {
            should_quit: false,
            session,
            config,
            now,
            dashboard: DashboardState::default(),
            comedians: ComediansState::default(),
            shows: ShowsState::default(),
            venues: VenuesState::default(),
            analytics: AnalyticsState::default(),
            notice: None,
        }
    }

    pub fn page(&self) -> Page {
        self.session.page()
    }

    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drops the notice once `ui.notice_ms` has passed.
    pub fn expire_notice(&mut self) {
        let ttl = self.config.ui.notice();
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.shown_at.elapsed() >= ttl)
        {
            self.notice = None;
        }
    }
}
