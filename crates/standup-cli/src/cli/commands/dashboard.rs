//! Interactive dashboard (the default command).

use anyhow::Result;
use standup_core::config::Config;
use standup_core::logging;
use standup_core::navigator::Page;
use tracing::info;

pub fn run(config: Config, page: Option<Page>, seed: Option<u64>) -> Result<()> {
    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init(&config.log)?;
    info!(version = env!("CARGO_PKG_VERSION"), "standup starting");
    standup_tui::run_dashboard(config, page, seed)
}
