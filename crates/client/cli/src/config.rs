//! CLI configuration structures and loaders.
//!
//! Layering, lowest to highest precedence:
//! 1. built-in defaults
//! 2. TOML file (`--config` or `ARENA_CONFIG`)
//! 3. environment variables
//! 4. command-line flags (applied by the commands themselves)
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use arena_content::ConfigLoader;
use arena_runtime::RuntimeConfig;

/// Configuration assembled before any command runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
    /// RON roster replacing the built-in opponents.
    pub roster_path: Option<PathBuf>,
    /// Directory for the log file; stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from the optional file and the process environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with(config_path, |key| env::var(key).ok())
    }

    /// Same as [`CliConfig::load`] with an injectable variable lookup.
    ///
    /// Environment variables:
    /// - `ARENA_CONFIG` - TOML battle config, when `--config` is not given
    /// - `ARENA_TURN_DELAY_MS` - Delay between turns (default: 1000)
    /// - `ARENA_START_DELAY_MS` - Delay before the first turn (default: 500)
    /// - `ARENA_TIME_BUDGET_SECS` - Battle time budget (default: 60)
    /// - `ARENA_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `ARENA_ROSTER` - RON roster file (default: built-in roster)
    /// - `ARENA_LOG_DIR` - Also log to `<dir>/arena.log`
    pub fn load_with<F>(config_path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let file = config_path
            .map(Path::to_path_buf)
            .or_else(|| lookup("ARENA_CONFIG").map(PathBuf::from));
        if let Some(path) = file {
            config.runtime.battle = ConfigLoader::load(&path)?;
        }

        let battle = &mut config.runtime.battle;
        if let Some(delay) = read_var::<u64, _>(&lookup, "ARENA_TURN_DELAY_MS") {
            battle.turn_delay_ms = delay;
        }
        if let Some(delay) = read_var::<u64, _>(&lookup, "ARENA_START_DELAY_MS") {
            battle.start_delay_ms = delay;
        }
        if let Some(budget) = read_var::<u32, _>(&lookup, "ARENA_TIME_BUDGET_SECS") {
            battle.time_budget_secs = budget.max(1);
        }
        if let Some(capacity) = read_var::<usize, _>(&lookup, "ARENA_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        config.roster_path = lookup("ARENA_ROSTER").map(PathBuf::from);
        config.log_dir = lookup("ARENA_LOG_DIR").map(PathBuf::from);

        Ok(config)
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let config = CliConfig::load_with(None, vars(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.runtime.battle.turn_delay_ms, 1000);
        assert_eq!(config.runtime.event_buffer_size, 100);
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "turn_delay_ms = 200\ntime_budget_secs = 30").unwrap();

        let config = CliConfig::load_with(
            Some(file.path()),
            vars(&[("ARENA_TURN_DELAY_MS", "0"), ("ARENA_EVENT_BUFFER", "16")]),
        )
        .unwrap();

        assert_eq!(config.runtime.battle.turn_delay_ms, 0);
        assert_eq!(config.runtime.battle.time_budget_secs, 30);
        assert_eq!(config.runtime.battle.start_delay_ms, 500);
        assert_eq!(config.runtime.event_buffer_size, 16);
    }

    #[test]
    fn config_file_can_come_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_delay_ms = 0").unwrap();
        let path = file.path().display().to_string();

        let config =
            CliConfig::load_with(None, vars(&[("ARENA_CONFIG", path.as_str())])).unwrap();
        assert_eq!(config.runtime.battle.start_delay_ms, 0);
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = CliConfig::load_with(
            None,
            vars(&[("ARENA_TIME_BUDGET_SECS", "soon"), ("ARENA_LOG_DIR", "/tmp/arena")]),
        )
        .unwrap();
        assert_eq!(config.runtime.battle.time_budget_secs, 60);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/arena")));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("arena.toml");
        assert!(CliConfig::load_with(Some(&missing), vars(&[])).is_err());
    }
}
