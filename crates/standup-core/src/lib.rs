//! Core StandUp Pro library (records, session, metrics, config).

pub mod aggregate;
pub mod config;
pub mod format;
pub mod logging;
pub mod models;
pub mod navigator;
pub mod random;
pub mod report;
pub mod session;
pub mod store;
