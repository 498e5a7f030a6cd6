//! Top-level view: sidebar, active page, status bar and overlay.
//!
//! Rendering is pure: it reads `AppState` and never mutates it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use standup_core::navigator::Page;

use crate::features::{analytics, comedians, dashboard, shows, venues};
use crate::overlays::render_utils::{InputHint, render_hints};
use crate::state::{AppState, TuiState};

pub const SIDEBAR_WIDTH: u16 = 24;

pub fn render(app: &AppState, frame: &mut Frame) {
    let [body, status] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
    let [sidebar, page] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)]).areas(body);

    render_sidebar(frame, sidebar, app.tui.page());

    let page_area = Rect::new(
        page.x + 1,
        page.y,
        page.width.saturating_sub(2),
        page.height,
    );
    match app.tui.page() {
        Page::Dashboard => dashboard::render(frame, page_area, &app.tui),
        Page::Comedians => comedians::render(frame, page_area, &app.tui),
        Page::Shows => shows::render(frame, page_area, &app.tui),
        Page::Venues => venues::render(frame, page_area, &app.tui),
        Page::Analytics => analytics::render(frame, page_area, &app.tui),
    }

    render_status_line(frame, status, &app.tui);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, frame.area());
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, current: Page) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, nav] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                " 🎭 StandUp Pro",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " Navigation",
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        title,
    );

    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|&page| {
            let text = format!(" {} {} {}", page.index() + 1, page.icon(), page.title());
            let style = if page == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::styled(text, style))
        })
        .collect();
    frame.render_widget(List::new(items), nav);
}

fn render_status_line(frame: &mut Frame, area: Rect, tui: &TuiState) {
    if let Some(notice) = &tui.notice {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" ✓ {}", notice.text),
                Style::default().fg(Color::Green),
            ))),
            area,
        );
        return;
    }
    render_hints(frame, area, &page_hints(tui), Color::Magenta);
}

fn page_hints(tui: &TuiState) -> Vec<InputHint<'static>> {
    let mut hints = match tui.page() {
        Page::Dashboard => vec![
            InputHint::new("←/→", "select"),
            InputHint::new("Enter", "open"),
        ],
        Page::Comedians if tui.comedians.captures_text() => {
            return vec![
                InputHint::new("Enter", "done"),
                InputHint::new("Ctrl+U", "clear"),
            ];
        }
        Page::Comedians => vec![
            InputHint::new("/", "search"),
            InputHint::new("a", "add"),
            InputHint::new("e", "edit"),
            InputHint::new("d", "delete"),
        ],
        Page::Shows => vec![
            InputHint::new("a", "schedule"),
            InputHint::new("s", "sell tickets"),
            InputHint::new("c", "cancel show"),
        ],
        Page::Venues => vec![InputHint::new("a", "add venue")],
        Page::Analytics => vec![InputHint::new("r", "refresh forecast")],
    };
    hints.push(InputHint::new("1-5/Tab", "pages"));
    hints.push(InputHint::new("q", "quit"));
    hints
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use standup_core::config::Config;

    use super::*;
    use crate::overlays::{Overlay, OverlayRequest};

    fn app() -> AppState {
        let now = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        AppState::new(Config::default(), now)
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_dashboard_shows_metrics() {
        let text = draw(&app());
        assert!(text.contains("StandUp Pro Dashboard"));
        assert!(text.contains("Total Comedians"));
        assert!(text.contains("450"));
        assert!(text.contains("60%"));
    }

    #[test]
    fn test_sidebar_lists_every_page() {
        let text = draw(&app());
        for page in Page::ALL {
            assert!(text.contains(page.title()), "missing {}", page.title());
        }
    }

    #[test]
    fn test_every_page_renders() {
        let mut app = app();
        for page in Page::ALL {
            app.tui.session.navigator.go(page);
            draw(&app);
        }
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut app = app();
        assert!(draw(&app).contains("quit"));
        app.tui.show_notice("Added Venue X to venues!");
        assert!(draw(&app).contains("Added Venue X to venues!"));
    }

    #[test]
    fn test_overlay_is_drawn_on_top() {
        let mut app = app();
        app.overlay = Overlay::open(OverlayRequest::AddVenue, &app.tui);
        let text = draw(&app);
        assert!(text.contains("Add New Venue"));
        assert!(text.contains("Rental Fee"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.overlay = Overlay::open(OverlayRequest::ScheduleShow, &app.tui);
        for page in Page::ALL {
            app.tui.session.navigator.go(page);
            let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
            terminal.draw(|frame| render(&app, frame)).unwrap();
        }
    }
}
