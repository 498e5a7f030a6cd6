use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState};
use standup_core::format;

use crate::common::join_names;
use crate::features::render_heading;
use crate::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let [heading, table_area, detail] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(4),
        Constraint::Length(5),
    ])
    .areas(area);

    render_heading(
        frame,
        heading,
        "🗓 Show Management",
        "a schedule • s sell tickets • c cancel show",
    );

    let sorted = tui.session.store.shows_by_date();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Upcoming Shows ");

    if sorted.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No shows scheduled. Press a to schedule one.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block),
            table_area,
        );
        return;
    }

    let rows = sorted.iter().map(|show| {
        Row::new(vec![
            Cell::from(show.title.clone()),
            Cell::from(format::show_date_time(show.date)),
            Cell::from(show.venue.clone()),
            Cell::from(join_names(&show.comedians)),
            Cell::from(format!("{}/{}", show.tickets_sold, show.capacity)),
        ])
    });
    let header = Row::new(["Show", "Date", "Venue", "Comedians", "Tickets"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(28),
            Constraint::Fill(1),
            Constraint::Fill(2),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
    .highlight_symbol("▌ ");

    let selected = tui.shows.selected.min(sorted.len() - 1);
    let mut table_state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, table_area, &mut table_state);

    let show = sorted[selected];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", show.title));
    let inner = block.inner(detail);
    frame.render_widget(block, detail);
    let [summary, gauge] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(vec![
            Line::raw(format!(
                "📍 {}  •  {}",
                show.venue,
                format::show_date_time(show.date)
            )),
            Line::styled(
                format!("{} seats remaining", show.remaining()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        summary,
    );
    frame.render_widget(
        Gauge::default()
            .ratio(show.progress())
            .label(format!(
                "Tickets sold: {}/{}",
                show.tickets_sold, show.capacity
            ))
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black)),
        gauge,
    );
}
