//! Full-screen booking dashboard for StandUp Pro.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stdout};

use anyhow::Result;
use chrono::Local;
pub use runtime::TuiRuntime;
use standup_core::config::Config;
use standup_core::navigator::Page;

/// Runs the interactive dashboard until the user quits.
///
/// `start` and `seed` override `ui.start_page` and `rng_seed` from the
/// config.
///
/// # Errors
/// Fails when stdout is not a terminal or the terminal cannot be driven.
pub fn run_dashboard(mut config: Config, start: Option<Page>, seed: Option<u64>) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `standup report` for non-interactive output."
        );
    }

    if let Some(page) = start {
        config.ui.start_page = page;
    }
    if seed.is_some() {
        config.rng_seed = seed;
    }

    let now = Local::now().naive_local();
    {
        let mut runtime = TuiRuntime::new(config, now)?;
        runtime.run()?;
    }

    // Terminal is restored once the runtime is dropped.
    writeln!(stdout(), "Goodbye!")?;
    Ok(())
}
