//! `standup report`: metrics for freshly seeded records, no terminal UI.

use anyhow::Result;
use chrono::Local;
use standup_core::config::Config;
use standup_core::report::Report;
use standup_core::store::Store;

pub fn run(config: &Config, json: bool) -> Result<()> {
    let store = Store::seeded(Local::now().naive_local());
    let report = Report::build(&store, config.ticket_price);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
