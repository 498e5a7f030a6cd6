//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary. The reducer stays pure and returns
//! effects; this module performs them, including every random draw.
//!
//! ## Inbox
//!
//! Effect results are queued as `UiEvent`s in `inbox` and drained at the
//! start of the next loop iteration, ahead of terminal input.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::NaiveDateTime;
use crossterm::event;
use rand::rngs::StdRng;
use standup_core::config::Config;
use standup_core::random::{self, draw_ticket_request, rng_from_seed};
use tracing::{debug, info};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, DashboardTerminal};
use crate::{render, update};

/// Full-screen dashboard runtime.
///
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: DashboardTerminal,
    pub state: AppState,
    inbox: VecDeque<UiEvent>,
    rng: StdRng,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Takes over the terminal and seeds the session relative to `now`.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn new(config: Config, now: NaiveDateTime) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;
        let rng = rng_from_seed(config.rng_seed);
        info!(seed = ?config.rng_seed, page = %config.ui.start_page, "dashboard starting");

        Ok(Self {
            terminal,
            state: AppState::new(config, now),
            inbox: VecDeque::from([UiEvent::Started]),
            rng,
            last_tick: Instant::now(),
        })
    }

    /// Runs until the user quits.
    ///
    /// # Errors
    /// Returns an error if reading input or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        info!("dashboard stopped");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;
            for event in events {
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Drains the inbox, then waits for input until the next tick is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events: Vec<UiEvent> = self.inbox.drain(..).collect();

        let tick_interval = self.state.tui.config.ui.tick();
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            // Ticks only matter while a notice is waiting to expire.
            if self.state.tui.notice.is_some() {
                events.push(UiEvent::Tick);
            }
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::DrawTickets { show } => {
                let requested = draw_ticket_request(&mut self.rng, &self.state.tui.config.sales);
                debug!(%show, requested, "ticket request drawn");
                self.inbox.push_back(UiEvent::TicketsDrawn { show, requested });
            }
            UiEffect::DrawForecast => {
                let points = random::forecast(
                    &mut self.rng,
                    self.state.tui.now.date(),
                    &self.state.tui.config.forecast,
                );
                debug!(points = points.len(), "forecast drawn");
                self.inbox.push_back(UiEvent::ForecastDrawn(points));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
