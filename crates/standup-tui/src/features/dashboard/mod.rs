//! Dashboard page: headline metrics, upcoming shows and quick actions.

mod render;
mod update;

pub use render::render;
use standup_core::navigator::Page;
pub use update::handle_key;

/// Quick-action buttons and the page each one opens.
pub const QUICK_ACTIONS: [(&str, Page); 3] = [
    ("➕ Add New Show", Page::Shows),
    ("🎤 Manage Comedians", Page::Comedians),
    ("📊 View Analytics", Page::Analytics),
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// Highlighted quick action.
    pub action: usize,
}
