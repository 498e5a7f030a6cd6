//! Cross-slice state mutations.
//!
//! Page handlers own their slice mutably but only see the rest of the
//! state through a context; changes to the session or the status bar come
//! back as mutations that the reducer applies.

use standup_core::session::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum StateMutation {
    /// Run an action through the session.
    Session(Action),
    /// Show a transient message in the status bar.
    Notice(String),
}
