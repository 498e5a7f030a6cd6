//! Configuration management for StandUp Pro.
//!
//! Loads settings from ${STANDUP_HOME}/config.toml with sensible defaults.
//! The file holds settings only; records are never written to disk.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::navigator::Page;

pub mod paths {
    //! Path resolution for configuration and log directories.
    //!
    //! STANDUP_HOME resolution order:
    //! 1. STANDUP_HOME environment variable (if set)
    //! 2. ~/.config/standup (default)

    use std::path::PathBuf;

    /// Returns the StandUp home directory.
    pub fn standup_home() -> PathBuf {
        if let Ok(home) = std::env::var("STANDUP_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("standup"))
            .unwrap_or_else(|| PathBuf::from(".standup"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        standup_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        standup_home().join("logs")
    }
}

/// Ticket-sale simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SalesConfig {
    /// Smallest batch a "sell tickets" click can draw.
    pub min_tickets: u32,
    /// Largest batch a "sell tickets" click can draw.
    pub max_tickets: u32,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            min_tickets: 5,
            max_tickets: 20,
        }
    }
}

/// Mock revenue forecast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ForecastConfig {
    pub weeks: u32,
    /// Leading points labelled "Actual".
    pub actual_weeks: u32,
    pub min_revenue: u32,
    pub max_revenue: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            weeks: 8,
            actual_weeks: 3,
            min_revenue: 5_000,
            max_revenue: 15_000,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Page shown at startup.
    pub start_page: Page,
    /// Event poll interval in milliseconds.
    pub tick_ms: u64,
    /// How long confirmation notices stay visible, in milliseconds.
    pub notice_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Dashboard,
            tick_ms: 100,
            notice_ms: 2_000,
        }
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }

    pub fn notice(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

/// Log file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Write logs to ${STANDUP_HOME}/logs/standup.log.
    pub enabled: bool,
    /// Tracing filter directive; STANDUP_LOG overrides it.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filter: "info".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Flat ticket price used for revenue, in whole dollars.
    pub ticket_price: u32,

    /// Fixed random seed for ticket sales and the forecast (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,

    #[serde(default)]
    pub sales: SalesConfig,

    #[serde(default)]
    pub forecast: ForecastConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticket_price: Self::DEFAULT_TICKET_PRICE,
            rng_seed: None,
            sales: SalesConfig::default(),
            forecast: ForecastConfig::default(),
            ui: UiConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

impl Config {
    const DEFAULT_TICKET_PRICE: u32 = 25;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Rejects settings the random draws and aggregations cannot use.
    ///
    /// # Errors
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.ticket_price == 0 {
            anyhow::bail!("ticket_price must be greater than 0");
        }
        if self.sales.min_tickets == 0 || self.sales.min_tickets > self.sales.max_tickets {
            anyhow::bail!(
                "sales.min_tickets ({}) must be between 1 and sales.max_tickets ({})",
                self.sales.min_tickets,
                self.sales.max_tickets
            );
        }
        if self.forecast.actual_weeks > self.forecast.weeks {
            anyhow::bail!(
                "forecast.actual_weeks ({}) cannot exceed forecast.weeks ({})",
                self.forecast.actual_weeks,
                self.forecast.weeks
            );
        }
        if self.forecast.min_revenue > self.forecast.max_revenue {
            anyhow::bail!(
                "forecast.min_revenue ({}) cannot exceed forecast.max_revenue ({})",
                self.forecast.min_revenue,
                self.forecast.max_revenue
            );
        }
        Ok(())
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    ///
    /// # Errors
    /// Returns an error if serialization or template parsing fails.
    pub fn generate() -> Result<String> {
        use toml_edit::{DocumentMut, Item};

        fn merge(target: &mut toml_edit::Table, source: &toml_edit::Table) {
            for (key, value) in source {
                match value {
                    Item::Value(v) => {
                        target[key] = Item::Value(v.clone());
                    }
                    Item::Table(src_table) => {
                        if let Some(Item::Table(target_table)) = target.get_mut(key) {
                            merge(target_table, src_table);
                        } else {
                            target[key] = Item::Table(src_table.clone());
                        }
                    }
                    Item::ArrayOfTables(arr) => {
                        target[key] = Item::ArrayOfTables(arr.clone());
                    }
                    Item::None => {}
                }
            }
        }

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        // Parse template as base (preserves comments)
        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
