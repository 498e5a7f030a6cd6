//! Metrics derived from the store.
//!
//! Everything here is recomputed from scratch on each render; the lists are
//! small and nothing is cached.

use serde::Serialize;

use crate::models::{Show, ShowId, Venue};
use crate::store::Store;

/// Occupancy above which a gauge shows its threshold marker as reached.
pub const OCCUPANCY_THRESHOLD: f64 = 90.0;

/// Headline numbers on the Dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub comedians: usize,
    pub upcoming_shows: usize,
    pub tickets_sold: u64,
    pub total_capacity: u64,
    /// Whole percent, rounded down; 0 when there is no capacity.
    pub occupancy_percent: u64,
}

impl DashboardMetrics {
    pub fn compute(store: &Store) -> Self {
        let tickets_sold: u64 = store.shows.iter().map(|s| u64::from(s.tickets_sold)).sum();
        let total_capacity: u64 = store.shows.iter().map(|s| u64::from(s.capacity)).sum();
        let occupancy_percent = (tickets_sold * 100).checked_div(total_capacity).unwrap_or(0);
        Self {
            comedians: store.comedians.len(),
            upcoming_shows: store.shows.len(),
            tickets_sold,
            total_capacity,
            occupancy_percent,
        }
    }
}

/// Per-show analytics row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowStats {
    #[serde(skip)]
    pub id: ShowId,
    pub title: String,
    pub capacity: u32,
    pub tickets_sold: u32,
    pub occupancy_rate: f64,
    pub revenue: u64,
}

impl ShowStats {
    pub fn compute(show: &Show, ticket_price: u32) -> Self {
        Self {
            id: show.id,
            title: show.title.clone(),
            capacity: show.capacity,
            tickets_sold: show.tickets_sold,
            occupancy_rate: show.occupancy_rate(),
            revenue: u64::from(show.tickets_sold) * u64::from(ticket_price),
        }
    }

    pub fn band(&self) -> OccupancyBand {
        OccupancyBand::of(self.occupancy_rate)
    }
}

/// Analytics page summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub shows: Vec<ShowStats>,
    pub total_revenue: u64,
    /// Mean occupancy across shows; `None` when there are no shows.
    pub average_occupancy: Option<f64>,
    pub total_shows: usize,
    pub tickets_sold: u64,
}

impl Analytics {
    pub fn compute(store: &Store, ticket_price: u32) -> Self {
        let shows: Vec<ShowStats> = store
            .shows
            .iter()
            .map(|show| ShowStats::compute(show, ticket_price))
            .collect();
        let total_revenue = shows.iter().map(|s| s.revenue).sum();
        let tickets_sold = shows.iter().map(|s| u64::from(s.tickets_sold)).sum();
        let average_occupancy = if shows.is_empty() {
            None
        } else {
            Some(shows.iter().map(|s| s.occupancy_rate).sum::<f64>() / shows.len() as f64)
        };
        Self {
            total_shows: shows.len(),
            shows,
            total_revenue,
            average_occupancy,
            tickets_sold,
        }
    }
}

/// Gauge color band for an occupancy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyBand {
    /// Below 50%.
    Low,
    /// 50% up to 75%.
    Medium,
    /// 75% and above.
    High,
}

impl OccupancyBand {
    pub fn of(occupancy: f64) -> Self {
        if occupancy < 50.0 {
            OccupancyBand::Low
        } else if occupancy < 75.0 {
            OccupancyBand::Medium
        } else {
            OccupancyBand::High
        }
    }
}

/// How many shows one comedian appears in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popularity {
    pub name: String,
    pub shows: usize,
    /// Share of all comedian appearances, `0.0..=1.0`.
    pub share: f64,
}

/// Show counts per comedian name, in order of first appearance.
///
/// Names are taken from the shows as-is, so removed comedians still count.
/// Returns an empty list when no show lists a comedian.
pub fn comedian_popularity(shows: &[Show]) -> Vec<Popularity> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for name in shows.iter().flat_map(|show| show.comedians.iter()) {
        match counts.iter_mut().find(|(seen, _)| seen == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.clone(), 1)),
        }
    }
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    counts
        .into_iter()
        .map(|(name, shows)| Popularity {
            name,
            shows,
            share: shows as f64 / total as f64,
        })
        .collect()
}

/// Venue table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueRow {
    pub name: String,
    pub capacity: u32,
    pub rental_fee: u32,
    pub cost_per_seat: f64,
}

impl From<&Venue> for VenueRow {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            capacity: venue.capacity,
            rental_fee: venue.rental_fee,
            cost_per_seat: venue.cost_per_seat(),
        }
    }
}

pub fn venue_rows(store: &Store) -> Vec<VenueRow> {
    store.venues.iter().map(VenueRow::from).collect()
}
