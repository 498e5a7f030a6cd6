//! Venues page: venue table, capacity chart and the add form.

mod render;
mod update;

pub use render::render;
pub use update::handle_key;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VenuesState {
    pub selected: usize,
}
