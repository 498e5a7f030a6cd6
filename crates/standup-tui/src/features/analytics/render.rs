use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph,
};
use standup_core::aggregate::{self, Analytics, OCCUPANCY_THRESHOLD, ShowStats};
use standup_core::format;
use standup_core::random::{ForecastPoint, PointKind};

use crate::common::palette::{band_color, red_yellow_green};
use crate::common::truncate_with_ellipsis;
use crate::features::{CARD_HEIGHT, render_heading, render_metric_cards};
use crate::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let [heading, cards, upper, lower] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_heading(
        frame,
        heading,
        "📈 Analytics & Insights",
        "r refresh forecast",
    );

    let analytics = Analytics::compute(&tui.session.store, tui.config.ticket_price);
    render_metric_cards(
        frame,
        cards,
        &[
            (
                "Total Revenue",
                format::dollars_cents(analytics.total_revenue as f64),
            ),
            (
                "Avg. Occupancy",
                format::percent_or_na(analytics.average_occupancy),
            ),
            ("Total Shows", analytics.total_shows.to_string()),
            ("Tickets Sold", analytics.tickets_sold.to_string()),
        ],
    );

    let [revenue, popularity] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(upper);
    let [gauges, forecast] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .areas(lower);

    render_revenue(frame, revenue, &analytics.shows);
    render_popularity(frame, popularity, tui);
    render_gauges(frame, gauges, &analytics.shows);
    render_forecast(frame, forecast, &tui.analytics.forecast, tui);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
}

fn empty(frame: &mut Frame, area: Rect, block: Block<'_>, message: &str) {
    frame.render_widget(
        Paragraph::new(Line::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .block(block),
        area,
    );
}

/// Revenue per show, colored red to green by occupancy.
fn render_revenue(frame: &mut Frame, area: Rect, shows: &[ShowStats]) {
    let block = panel("Revenue per Show");
    if shows.is_empty() {
        empty(frame, area, block, "No shows to chart.");
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / shows.len() as u16)
        .saturating_sub(1)
        .clamp(3, 16);
    let bars: Vec<Bar> = shows
        .iter()
        .map(|show| {
            let color = red_yellow_green(show.occupancy_rate / 100.0);
            Bar::default()
                .value(show.revenue)
                .text_value(format::dollars(show.revenue))
                .label(Line::from(truncate_with_ellipsis(
                    &show.title,
                    bar_width as usize,
                )))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    frame.render_widget(
        BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1),
        area,
    );
}

/// Share of appearances per comedian as horizontal proportion bars.
fn render_popularity(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let block = panel("Comedian Popularity");
    let popularity = aggregate::comedian_popularity(&tui.session.store.shows);
    if popularity.is_empty() {
        empty(frame, area, block, "No comedian data available yet.");
        return;
    }

    let bars: Vec<Bar> = popularity
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let color = PIE_COLORS[i % PIE_COLORS.len()];
            Bar::default()
                .value((entry.share * 1_000.0).round() as u64)
                .text_value(format!(
                    "{} ({})",
                    format::percent(entry.share * 100.0),
                    entry.shows
                ))
                .label(Line::from(entry.name.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    frame.render_widget(
        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(0)
            .max(1_000),
        area,
    );
}

const PIE_COLORS: [Color; 6] = [
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
];

/// One occupancy gauge per show, with a marker at the target occupancy.
fn render_gauges(frame: &mut Frame, area: Rect, shows: &[ShowStats]) {
    let block = panel("Show Occupancy");
    if shows.is_empty() {
        empty(frame, area, block, "No shows scheduled.");
        return;
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let legend = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("┃", Style::default().fg(Color::White)),
            Span::styled(
                format!(" target {OCCUPANCY_THRESHOLD:.0}%"),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        legend,
    );

    let marker_x = inner.x + (f64::from(inner.width) * OCCUPANCY_THRESHOLD / 100.0) as u16;
    for (i, show) in shows.iter().enumerate() {
        let y = inner.y + 1 + i as u16 * 2;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(
            Gauge::default()
                .ratio((show.occupancy_rate / 100.0).clamp(0.0, 1.0))
                .label(format!(
                    "{} {}",
                    truncate_with_ellipsis(&show.title, 18),
                    format::percent(show.occupancy_rate)
                ))
                .gauge_style(
                    Style::default()
                        .fg(band_color(show.band()))
                        .bg(Color::Black),
                ),
            row,
        );
        if marker_x < inner.x + inner.width
            && let Some(cell) = frame.buffer_mut().cell_mut((marker_x, y))
        {
            cell.set_symbol("┃")
                .set_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        }
    }
}

/// Weekly mock revenue; actual and forecast segments share the joining point.
fn render_forecast(frame: &mut Frame, area: Rect, points: &[ForecastPoint], tui: &TuiState) {
    let block = panel("Revenue Forecast");
    if points.is_empty() {
        empty(frame, area, block, "Press r to draw a forecast.");
        return;
    }

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.revenue)))
        .collect();
    let split = points
        .iter()
        .position(|p| p.kind == PointKind::Forecast)
        .unwrap_or(points.len());
    let actual = &coords[..split];
    let forecast = &coords[split.saturating_sub(1)..];

    let mut datasets = vec![
        Dataset::default()
            .name(PointKind::Actual.label())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(actual),
    ];
    if split < points.len() {
        datasets.push(
            Dataset::default()
                .name(PointKind::Forecast.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(forecast),
        );
    }

    let last = points.len() - 1;
    let x_labels = vec![
        points[0].date.format("%b %d").to_string(),
        points[last].date.format("%b %d").to_string(),
    ];
    let y_max = f64::from(tui.config.forecast.max_revenue.max(1));
    let y_labels = vec![
        "$0".to_string(),
        format::dollars(u64::from(tui.config.forecast.max_revenue)),
    ];

    frame.render_widget(
        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .bounds([0.0, last.max(1) as f64])
                    .labels(x_labels)
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_max])
                    .labels(y_labels)
                    .style(Style::default().fg(Color::DarkGray)),
            ),
        area,
    );
}
