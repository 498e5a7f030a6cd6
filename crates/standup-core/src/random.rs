//! Random draws: ticket sales and the mock revenue forecast.
//!
//! Every function takes the generator as a parameter so tests can use a
//! seeded `StdRng` and assert exact values.

use chrono::{NaiveDate, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::{ForecastConfig, SalesConfig};

/// Seeded generator when `seed` is set, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Number of tickets a "sell tickets" click asks for.
///
/// Uniform over `min_tickets..=max_tickets`. The show clamps the request
/// to its remaining capacity.
pub fn draw_ticket_request<R: Rng>(rng: &mut R, sales: &SalesConfig) -> u32 {
    rng.random_range(sales.min_tickets..=sales.max_tickets)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointKind {
    Actual,
    Forecast,
}

impl PointKind {
    pub fn label(self) -> &'static str {
        match self {
            PointKind::Actual => "Actual",
            PointKind::Forecast => "Forecast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub revenue: u32,
    pub kind: PointKind,
}

/// Weekly mock revenue starting at `start`.
///
/// Not derived from any record: the first `actual_weeks` points are
/// labelled actual, the rest forecast, and every revenue is a fresh draw.
pub fn forecast<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    config: &ForecastConfig,
) -> Vec<ForecastPoint> {
    (0..config.weeks)
        .map(|week| ForecastPoint {
            date: start + TimeDelta::weeks(i64::from(week)),
            revenue: rng.random_range(config.min_revenue..=config.max_revenue),
            kind: if week < config.actual_weeks {
                PointKind::Actual
            } else {
                PointKind::Forecast
            },
        })
        .collect()
}
