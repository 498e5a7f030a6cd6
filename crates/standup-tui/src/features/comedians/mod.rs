//! Comedians page: searchable roster with add, edit and delete.

mod render;
mod update;

pub use render::render;
pub use update::handle_key;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComediansState {
    /// Case-insensitive name filter.
    pub search: String,
    /// Keys go to the search field instead of page shortcuts.
    pub searching: bool,
    /// Position in the filtered list.
    pub selected: usize,
}

impl ComediansState {
    /// True while the search field swallows printable keys.
    pub fn captures_text(&self) -> bool {
        self.searching
    }
}
