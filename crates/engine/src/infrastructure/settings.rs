//! Progression tuning loaded from the environment.
//!
//! The web layer embedding this engine configures it through `ARISE_*`
//! variables (or a repo-root `.env` file); anything unset falls back to
//! the shipped defaults. Curve shape beyond these scalars (rank table,
//! stat set) is code-level config on [`ProgressionConfig`].

use arise_domain::ProgressionConfig;

/// Environment-tunable progression knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionSettings {
    pub base_xp_to_next_level: u64,
    pub growth_rate_percent: u64,
    pub stats_per_level: u64,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        let config = ProgressionConfig::default();
        Self {
            base_xp_to_next_level: config.base_xp_to_next_level,
            growth_rate_percent: config.growth_rate_percent,
            stats_per_level: config.stats_per_level,
        }
    }
}

impl ProgressionSettings {
    /// Read settings from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        // Pick up a .env at the repo root, if present.
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            base_xp_to_next_level: env_u64("ARISE_BASE_XP", defaults.base_xp_to_next_level),
            growth_rate_percent: env_u64(
                "ARISE_XP_GROWTH_PERCENT",
                defaults.growth_rate_percent,
            ),
            stats_per_level: env_u64("ARISE_STATS_PER_LEVEL", defaults.stats_per_level),
        }
    }

    /// Build the domain config these settings describe.
    pub fn into_config(self) -> ProgressionConfig {
        ProgressionConfig {
            base_xp_to_next_level: self.base_xp_to_next_level,
            growth_rate_percent: self.growth_rate_percent,
            stats_per_level: self.stats_per_level,
            ..ProgressionConfig::default()
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
