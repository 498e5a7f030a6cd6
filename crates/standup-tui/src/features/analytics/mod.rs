//! Analytics page: revenue, occupancy, comedian popularity and a mock
//! revenue forecast.
//!
//! The forecast is random data. It is redrawn whenever the user enters the
//! page or presses a key on it, never on a timer.

mod render;
mod update;

pub use render::render;
use standup_core::random::ForecastPoint;
pub use update::handle_key;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnalyticsState {
    pub forecast: Vec<ForecastPoint>,
}
