//! Plain-text and JSON metrics report for `standup report`.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use crate::aggregate::{self, Analytics, DashboardMetrics, Popularity, VenueRow};
use crate::format;
use crate::store::Store;

const REPORT_WIDTH: u16 = 100;

/// Snapshot of every derived metric for a store.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub ticket_price: u32,
    pub dashboard: DashboardMetrics,
    pub analytics: Analytics,
    pub popularity: Vec<Popularity>,
    pub venues: Vec<VenueRow>,
}

impl Report {
    pub fn build(store: &Store, ticket_price: u32) -> Self {
        Self {
            ticket_price,
            dashboard: DashboardMetrics::compute(store),
            analytics: Analytics::compute(store, ticket_price),
            popularity: aggregate::comedian_popularity(&store.shows),
            venues: aggregate::venue_rows(store),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Human-readable tables.
    pub fn to_text(&self) -> String {
        let mut sections = Vec::new();

        let d = &self.dashboard;
        sections.push(section(
            "Dashboard",
            &["Comedians", "Upcoming Shows", "Tickets Sold", "Occupancy"],
            vec![vec![
                d.comedians.to_string(),
                d.upcoming_shows.to_string(),
                d.tickets_sold.to_string(),
                format!("{}%", d.occupancy_percent),
            ]],
        ));

        let a = &self.analytics;
        sections.push(section(
            "Analytics",
            &["Total Revenue", "Avg. Occupancy", "Total Shows", "Tickets Sold"],
            vec![vec![
                format::dollars_cents(a.total_revenue as f64),
                format::percent_or_na(a.average_occupancy),
                a.total_shows.to_string(),
                a.tickets_sold.to_string(),
            ]],
        ));

        sections.push(section(
            "Shows",
            &["Show", "Sold", "Capacity", "Occupancy", "Revenue"],
            a.shows
                .iter()
                .map(|s| {
                    vec![
                        s.title.clone(),
                        s.tickets_sold.to_string(),
                        s.capacity.to_string(),
                        format::percent(s.occupancy_rate),
                        format::dollars_cents(s.revenue as f64),
                    ]
                })
                .collect(),
        ));

        sections.push(section(
            "Comedian Popularity",
            &["Comedian", "Shows", "Share"],
            self.popularity
                .iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        p.shows.to_string(),
                        format::percent(p.share * 100.0),
                    ]
                })
                .collect(),
        ));

        sections.push(section(
            "Venues",
            &["Name", "Capacity", "Rental Fee", "Cost per Seat"],
            self.venues
                .iter()
                .map(|v| {
                    vec![
                        v.name.clone(),
                        v.capacity.to_string(),
                        format::dollars_cents(f64::from(v.rental_fee)),
                        format::dollars_cents(v.cost_per_seat),
                    ]
                })
                .collect(),
        ));

        sections.join("\n\n")
    }
}

fn section(title: &str, header: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return format!("{title}\n(no data)");
    }

    let mut table = Table::new();
    table.set_width(REPORT_WIDTH);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    format!("{title}\n{table}")
}
