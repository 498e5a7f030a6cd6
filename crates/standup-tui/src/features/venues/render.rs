use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, TableState};
use standup_core::aggregate::{self, VenueRow};
use standup_core::format;

use crate::common::palette::{normalize, viridis};
use crate::common::truncate_with_ellipsis;
use crate::features::render_heading;
use crate::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let [heading, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    render_heading(frame, heading, "🏢 Venue Management", "a add venue");

    let rows = aggregate::venue_rows(&tui.session.store);
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No venues yet. Press a to add one.",
                Style::default().fg(Color::DarkGray),
            )),
            body,
        );
        return;
    }

    let [table_area, chart_area] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);
    render_table(frame, table_area, &rows, tui.venues.selected);
    render_capacity_chart(frame, chart_area, &rows);
}

fn render_table(frame: &mut Frame, area: Rect, rows: &[VenueRow], selected: usize) {
    let header = Row::new(["Name", "Capacity", "Rental Fee", "Cost per Seat"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let body = rows.iter().map(|venue| {
        Row::new(vec![
            venue.name.clone(),
            venue.capacity.to_string(),
            format::dollars_cents(f64::from(venue.rental_fee)),
            format::dollars_cents(venue.cost_per_seat),
        ])
    });
    let table = Table::new(
        body,
        [
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Venues "),
    )
    .row_highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
    .highlight_symbol("▌ ");
    let mut state = TableState::default().with_selected(Some(selected.min(rows.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Capacity per venue; bar color follows rental fee on a viridis scale.
fn render_capacity_chart(frame: &mut Frame, area: Rect, rows: &[VenueRow]) {
    let fees = rows.iter().map(|v| f64::from(v.rental_fee));
    let min_fee = fees.clone().fold(f64::INFINITY, f64::min);
    let max_fee = fees.fold(f64::NEG_INFINITY, f64::max);

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / rows.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(3, 14);

    let bars: Vec<Bar> = rows
        .iter()
        .map(|venue| {
            let color = viridis(normalize(f64::from(venue.rental_fee), min_fee, max_fee));
            Bar::default()
                .value(u64::from(venue.capacity))
                .label(Line::from(truncate_with_ellipsis(
                    &venue.name,
                    bar_width as usize,
                )))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Venue Capacities (color: rental fee) "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}
