/// Battle pacing and budget parameters.
///
/// The engine itself only reads `starting_health` and `time_budget_secs`;
/// the delays are consumed by whoever drives the turns (the runtime worker or
/// [`crate::BattleEngine::simulate`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Health both combatants start with.
    pub starting_health: u32,
    /// Wall-clock budget in whole seconds before the battle is decided on health.
    pub time_budget_secs: u32,
    /// Delay between two resolved turns, in milliseconds. Zero for headless runs.
    pub turn_delay_ms: u64,
    /// Delay between the start of the battle and the first turn, in milliseconds.
    pub start_delay_ms: u64,
}

impl BattleConfig {
    pub const DEFAULT_STARTING_HEALTH: u32 = 100;
    pub const DEFAULT_TIME_BUDGET_SECS: u32 = 60;
    pub const DEFAULT_TURN_DELAY_MS: u64 = 1_000;
    pub const DEFAULT_START_DELAY_MS: u64 = 500;

    pub fn new() -> Self {
        Self {
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            time_budget_secs: Self::DEFAULT_TIME_BUDGET_SECS,
            turn_delay_ms: Self::DEFAULT_TURN_DELAY_MS,
            start_delay_ms: Self::DEFAULT_START_DELAY_MS,
        }
    }

    /// Configuration with every delay collapsed to zero.
    pub fn headless() -> Self {
        Self {
            turn_delay_ms: 0,
            start_delay_ms: 0,
            ..Self::new()
        }
    }

    pub fn with_turn_delay_ms(mut self, turn_delay_ms: u64) -> Self {
        self.turn_delay_ms = turn_delay_ms;
        self
    }

    pub fn with_time_budget_secs(mut self, time_budget_secs: u32) -> Self {
        self.time_budget_secs = time_budget_secs;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_arena_rules() {
        let config = BattleConfig::default();
        assert_eq!(config.starting_health, 100);
        assert_eq!(config.time_budget_secs, 60);
        assert_eq!(config.turn_delay_ms, 1_000);
        assert_eq!(config.start_delay_ms, 500);
    }

    #[test]
    fn headless_keeps_budget_but_drops_delays() {
        let config = BattleConfig::headless();
        assert_eq!(config.turn_delay_ms, 0);
        assert_eq!(config.start_delay_ms, 0);
        assert_eq!(config.time_budget_secs, 60);
    }
}
