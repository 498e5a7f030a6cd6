//! TUI reducer (update function).
//!
//! All state changes happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use standup_core::navigator::Page;
use standup_core::session::{Action, Outcome};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{analytics, comedians, dashboard, shows, venues};
use crate::mutations::StateMutation;
use crate::overlays::{self, Overlay};
use crate::state::{AppState, TuiState};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Started => forecast_if_analytics(&app.tui),
        UiEvent::Tick => {
            app.tui.expire_notice();
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::TicketsDrawn { show, requested } => apply_mutations(
            &mut app.tui,
            vec![StateMutation::Session(Action::SellTickets { show, requested })],
        ),
        UiEvent::ForecastDrawn(points) => {
            app.tui.analytics.forecast = points;
            vec![]
        }
    }
}

fn forecast_if_analytics(tui: &TuiState) -> Vec<UiEffect> {
    if tui.page() == Page::Analytics {
        vec![UiEffect::DrawForecast]
    } else {
        vec![]
    }
}

/// Applies mutations; returns effects triggered by page changes.
fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for mutation in mutations {
        match mutation {
            StateMutation::Session(action) => {
                let quiet = matches!(
                    action,
                    Action::Navigate(_) | Action::BeginEditComedian { .. } | Action::CancelEdit
                );
                let before = tui.page();
                if let Outcome::Changed(message) = tui.session.dispatch(action)
                    && !quiet
                {
                    tui.show_notice(message);
                }
                if tui.page() != before {
                    effects.extend(forecast_if_analytics(tui));
                }
            }
            StateMutation::Notice(text) => tui.show_notice(text),
        }
    }
    effects
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if let Some(mutations) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        return apply_mutations(&mut app.tui, mutations);
    }

    let tui = &mut app.tui;
    let page = tui.page();
    let typing = page == Page::Comedians && tui.comedians.captures_text();
    if !typing && let Some(effects) = handle_global_key(tui, key) {
        return effects;
    }

    let (mut effects, mutations, request) = match page {
        Page::Dashboard => dashboard::handle_key(&mut tui.dashboard, key),
        Page::Comedians => comedians::handle_key(&mut tui.comedians, &tui.session, key),
        Page::Shows => shows::handle_key(&mut tui.shows, &tui.session, key),
        Page::Venues => venues::handle_key(&mut tui.venues, &tui.session, key),
        Page::Analytics => analytics::handle_key(key),
    };
    effects.extend(apply_mutations(tui, mutations));
    if let Some(request) = request {
        app.overlay = Overlay::open(request, &app.tui);
    }
    effects
}

/// Quit and page navigation; `None` when the key is not global.
fn handle_global_key(tui: &mut TuiState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    let target = match key.code {
        KeyCode::Char('q') => return Some(vec![UiEffect::Quit]),
        KeyCode::Char(c) => Page::from_digit(c)?,
        KeyCode::Tab => {
            let mut navigator = tui.session.navigator.clone();
            navigator.next();
            navigator.current()
        }
        KeyCode::BackTab => {
            let mut navigator = tui.session.navigator.clone();
            navigator.previous();
            navigator.current()
        }
        _ => return None,
    };
    Some(apply_mutations(
        tui,
        vec![StateMutation::Session(Action::Navigate(target))],
    ))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use standup_core::config::Config;
    use standup_core::random::{ForecastPoint, PointKind};

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn app() -> AppState {
        AppState::new(Config::default(), now())
    }

    fn key(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digits_and_tab_navigate() {
        let mut app = app();
        key(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tui.page(), Page::Shows);
        key(&mut app, KeyCode::Tab);
        assert_eq!(app.tui.page(), Page::Venues);
        key(&mut app, KeyCode::BackTab);
        key(&mut app, KeyCode::BackTab);
        assert_eq!(app.tui.page(), Page::Comedians);
    }

    #[test]
    fn test_entering_analytics_draws_forecast() {
        let mut app = app();
        assert!(update(&mut app, UiEvent::Started).is_empty());
        assert_eq!(key(&mut app, KeyCode::Char('5')), [UiEffect::DrawForecast]);
        // Staying on the page still redraws on any key.
        assert_eq!(key(&mut app, KeyCode::Down), [UiEffect::DrawForecast]);
    }

    #[test]
    fn test_started_on_analytics_draws_forecast() {
        let mut config = Config::default();
        config.ui.start_page = Page::Analytics;
        let mut app = AppState::new(config, now());
        assert_eq!(update(&mut app, UiEvent::Started), [UiEffect::DrawForecast]);
    }

    #[test]
    fn test_forecast_drawn_is_stored() {
        let mut app = app();
        let points = vec![ForecastPoint {
            date: now().date(),
            revenue: 7_000,
            kind: PointKind::Actual,
        }];
        update(&mut app, UiEvent::ForecastDrawn(points.clone()));
        assert_eq!(app.tui.analytics.forecast, points);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(key(&mut app, KeyCode::Char('q')), [UiEffect::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            update(&mut app, UiEvent::Terminal(Event::Key(ctrl_c))),
            [UiEffect::Quit]
        );
    }

    #[test]
    fn test_search_swallows_global_keys() {
        let mut app = app();
        key(&mut app, KeyCode::Char('2'));
        key(&mut app, KeyCode::Char('/'));
        assert!(key(&mut app, KeyCode::Char('q')).is_empty());
        type_text(&mut app, "3");
        assert_eq!(app.tui.page(), Page::Comedians);
        assert_eq!(app.tui.comedians.search, "q3");
    }

    #[test]
    fn test_add_comedian_through_form() {
        let mut app = app();
        key(&mut app, KeyCode::Char('2'));
        key(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.overlay, Some(Overlay::ComedianForm(_))));

        // Global keys go to the form while it is open.
        type_text(&mut app, "Taylor Tomlinson 1");
        key(&mut app, KeyCode::Enter);

        assert!(app.overlay.is_none());
        let last = app.tui.session.store.comedians.last().unwrap();
        assert_eq!(last.name, "Taylor Tomlinson 1");
        assert_eq!(app.tui.page(), Page::Comedians);
        assert_eq!(
            app.tui.notice.as_ref().map(|n| n.text.as_str()),
            Some("Added Taylor Tomlinson 1 to the roster!")
        );
    }

    #[test]
    fn test_edit_comedian_prefills_and_cancels() {
        let mut app = app();
        key(&mut app, KeyCode::Char('2'));
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Char('e'));
        assert_eq!(app.tui.session.editing_comedian, Some(1));
        match &app.overlay {
            Some(Overlay::ComedianForm(form)) => assert_eq!(form.name.value, "Ali Wong"),
            _ => panic!("edit form not open"),
        }

        key(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.session.editing_comedian, None);
        assert!(app.tui.notice.is_none());
    }

    #[test]
    fn test_sell_tickets_round_trip() {
        let mut app = app();
        key(&mut app, KeyCode::Char('3'));
        let effects = key(&mut app, KeyCode::Char('s'));
        let [UiEffect::DrawTickets { show }] = effects.as_slice() else {
            panic!("expected a ticket draw, got {effects:?}");
        };
        let show = *show;
        let before = app.tui.session.store.show(show).unwrap().tickets_sold;

        update(&mut app, UiEvent::TicketsDrawn { show, requested: 12 });

        let after = app.tui.session.store.show(show).unwrap().tickets_sold;
        assert_eq!(after, before + 12);
        assert_eq!(
            app.tui.notice.as_ref().map(|n| n.text.as_str()),
            Some("Sold 12 more tickets!")
        );
    }

    #[test]
    fn test_schedule_form_adds_show() {
        let mut app = app();
        key(&mut app, KeyCode::Char('3'));
        key(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Open Mic");
        for _ in 0..4 {
            key(&mut app, KeyCode::Tab);
        }
        key(&mut app, KeyCode::Char(' '));
        key(&mut app, KeyCode::Enter);

        assert!(app.overlay.is_none());
        let shows = &app.tui.session.store.shows;
        assert_eq!(shows.len(), 4);
        let added = shows.last().unwrap();
        assert_eq!(added.title, "Open Mic");
        assert_eq!(added.venue, "Laugh Factory");
        assert_eq!(added.capacity, 200);
        assert_eq!(added.comedians, ["Dave Chappelle"]);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        update(&mut app, UiEvent::Terminal(Event::Key(release)));
        assert_eq!(app.tui.page(), Page::Dashboard);
    }
}
