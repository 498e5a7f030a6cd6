//! UI events consumed by the reducer.

use standup_core::models::ShowId;
use standup_core::random::ForecastPoint;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Sent once before the first frame.
    Started,
    /// Poll interval elapsed with no other input.
    Tick,
    /// Raw crossterm input.
    Terminal(crossterm::event::Event),
    /// The runtime drew a ticket request for a "sell tickets" action.
    TicketsDrawn { show: ShowId, requested: u32 },
    /// The runtime drew a fresh revenue forecast.
    ForecastDrawn(Vec<ForecastPoint>),
}
