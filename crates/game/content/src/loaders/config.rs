//! Battle configuration loader.

use std::path::Path;

use arena_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
///
/// Every key is optional; missing keys keep their defaults.
///
/// ```toml
/// starting_health = 100
/// time_budget_secs = 60
/// turn_delay_ms = 1000
/// start_delay_ms = 500
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.starting_health == 0 {
            anyhow::bail!("starting_health must be positive");
        }
        if config.time_budget_secs == 0 {
            anyhow::bail!("time_budget_secs must be positive");
        }
        Ok(config)
    }
}
