//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use standup_core::config::Config;
use standup_core::navigator::Page;

mod commands;

#[derive(Parser)]
#[command(name = "standup")]
#[command(version)]
#[command(about = "StandUp Pro: book comedians, venues and shows from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page to open first (dashboard, comedians, shows, venues, analytics)
    #[arg(long, global = true, value_name = "PAGE")]
    page: Option<Page>,

    /// Seed for ticket sales and the revenue forecast
    #[arg(long, global = true, value_name = "N")]
    seed: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print dashboard and analytics metrics for the seed data
    Report {
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print a fresh config generated from defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = Config::load()?;
            commands::dashboard::run(config, cli.page, cli.seed)
        }
        Some(Commands::Report { json }) => {
            let config = Config::load()?;
            commands::report::run(&config, json)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
