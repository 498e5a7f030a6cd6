use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use standup_core::aggregate::DashboardMetrics;
use standup_core::format;
use standup_core::models::Show;

use super::QUICK_ACTIONS;
use crate::common::{join_names, truncate_with_ellipsis};
use crate::features::{CARD_HEIGHT, render_heading, render_metric_cards};
use crate::state::TuiState;

/// Rows used by one show in the upcoming list.
const SHOW_ROWS: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let [heading, cards, shows, actions] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(SHOW_ROWS + 2),
        Constraint::Length(3),
    ])
    .areas(area);

    render_heading(
        frame,
        heading,
        "🎭 StandUp Pro Dashboard",
        "Manage your comedy empire",
    );

    let metrics = DashboardMetrics::compute(&tui.session.store);
    render_metric_cards(
        frame,
        cards,
        &[
            ("Total Comedians", metrics.comedians.to_string()),
            ("Upcoming Shows", metrics.upcoming_shows.to_string()),
            ("Tickets Sold", metrics.tickets_sold.to_string()),
            ("Occupancy Rate", format!("{}%", metrics.occupancy_percent)),
        ],
    );

    render_upcoming(frame, shows, &tui.session.store.shows);
    render_actions(frame, actions, tui.dashboard.action);
}

fn render_upcoming(frame: &mut Frame, area: Rect, shows: &[Show]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" 📅 Upcoming Shows ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if shows.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No shows scheduled.",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let visible = (inner.height / SHOW_ROWS) as usize;
    let width = inner.width as usize;
    for (i, show) in shows.iter().take(visible).enumerate() {
        let y = inner.y + i as u16 * SHOW_ROWS;
        let text = Rect::new(inner.x, y, inner.width, 2);
        let gauge = Rect::new(inner.x, y + 2, inner.width, 1);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    show.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", format::show_date(show.date)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::styled(
                truncate_with_ellipsis(
                    &format!("📍 {}  🎤 {}", show.venue, join_names(&show.comedians)),
                    width,
                ),
                Style::default().fg(Color::Gray),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), text);
        frame.render_widget(
            Gauge::default()
                .ratio(show.progress())
                .label(format!("{}/{} tickets", show.tickets_sold, show.capacity))
                .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black)),
            gauge,
        );
    }
}

fn render_actions(frame: &mut Frame, area: Rect, selected: usize) {
    let areas = Layout::horizontal([Constraint::Fill(1); QUICK_ACTIONS.len()]).split(area);
    for (i, ((label, _), button)) in QUICK_ACTIONS.iter().zip(areas.iter()).enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta)
        };
        frame.render_widget(
            Paragraph::new(Line::styled(*label, style))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Magenta)),
                ),
            *button,
        );
    }
}
