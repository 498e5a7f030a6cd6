//! Shows page: date-sorted schedule with ticket sales and cancellation.
//!
//! Rows are displayed in date order but every action resolves the
//! selected row to its `ShowId`, so storage order never matters.

mod render;
mod update;

pub use render::render;
use standup_core::models::ShowId;
use standup_core::session::Session;
pub use update::handle_key;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShowsState {
    /// Position in the date-sorted list.
    pub selected: usize,
}

impl ShowsState {
    /// Id of the highlighted show, clamped to the current list.
    pub fn selected_id(&self, session: &Session) -> Option<ShowId> {
        let sorted = session.store.shows_by_date();
        let last = sorted.len().checked_sub(1)?;
        sorted.get(self.selected.min(last)).map(|show| show.id)
    }
}
