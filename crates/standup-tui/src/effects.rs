//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! Random draws live here so the reducer never touches the generator: the
//! runtime draws and feeds the result back as a `UiEvent`.

use standup_core::models::ShowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Draw a ticket request for `show`; answered with `UiEvent::TicketsDrawn`.
    DrawTickets { show: ShowId },

    /// Draw a new revenue forecast; answered with `UiEvent::ForecastDrawn`.
    DrawForecast,
}
