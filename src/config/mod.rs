use crate::models::{FeedCategory, TimeOfDay};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

/// Tunables for the seven signal calculators.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Freshness half-life in hours.
    pub freshness_half_life_hours: f32,
    /// Hard expiry horizon in hours; freshness is exactly 0 past it.
    pub freshness_expiry_hours: f32,
    /// Saturation constant for engagement normalization. Stands in for a
    /// moving population baseline so one viral item cannot hit 1.0 trivially.
    pub engagement_baseline: f32,
    /// Multiplier applied to the conversation ratio (shares+comments)/views.
    pub social_conversation_scale: f32,
    /// Scale of the tanh mapping from raw affinity to interest match.
    pub interest_saturation_scale: f32,
    /// Additive boost for explicit favorite categories.
    pub favorite_boost: f32,
    /// Additive boost when the time-of-day correlation table matches.
    pub time_of_day_boost: f32,
    /// Damping factor applied when the table does not match.
    pub time_of_day_damping: f32,
    /// Floor for the time relevance signal (never a hard zero).
    pub time_relevance_floor: f32,
    /// Per-deployment override of the time-of-day/category correlation
    /// table. `None` keeps the built-in table.
    pub time_of_day_correlation: Option<HashMap<TimeOfDay, Vec<FeedCategory>>>,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            freshness_half_life_hours: 24.0,
            freshness_expiry_hours: 720.0,
            engagement_baseline: 8.0,
            social_conversation_scale: 20.0,
            interest_saturation_scale: 2.5,
            favorite_boost: 0.2,
            time_of_day_boost: 0.2,
            time_of_day_damping: 0.7,
            time_relevance_floor: 0.05,
            time_of_day_correlation: None,
        }
    }
}

/// Tunables for the affinity store and feedback ingestor.
#[derive(Debug, Clone, Deserialize)]
pub struct AffinityConfig {
    /// Scale applied to each interaction's signed weight.
    pub learning_rate: f32,
    /// Half-life for lazy decay of stored affinity values, in hours.
    pub half_life_hours: f32,
    /// Affinity values are clamped to [-value_bound, value_bound].
    pub value_bound: f32,
    /// Tag cells receive the interaction weight scaled by this ratio.
    pub tag_weight_ratio: f32,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            half_life_hours: 168.0,
            value_bound: 5.0,
            tag_weight_ratio: 0.5,
        }
    }
}

/// Tunables for the reason generator.
#[derive(Debug, Clone, Deserialize)]
pub struct ReasonConfig {
    /// Maximum number of reasons attached to one score.
    pub max_reasons: usize,
    /// Minimum share of the total contribution a reason must carry.
    pub min_impact: f32,
}

impl Default for ReasonConfig {
    fn default() -> Self {
        Self {
            max_reasons: 3,
            min_impact: 0.05,
        }
    }
}

/// Batch fan-out tunables for ranking requests.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Batches at or below this size are scored on the calling task.
    pub parallel_threshold: usize,
    /// Chunk size for parallel scoring tasks.
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
            chunk_size: 32,
        }
    }
}

/// Engine configuration. `Default` gives the built-in tuning; `from_env`
/// overlays `RELEVANCE_*` environment variables for host deployments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    pub signals: SignalConfig,
    pub affinity: AffinityConfig,
    pub reasons: ReasonConfig,
    pub batch: BatchConfig,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = EngineConfig::default();
        config.signals.freshness_half_life_hours = env_f32(
            "RELEVANCE_FRESHNESS_HALF_LIFE_HOURS",
            config.signals.freshness_half_life_hours,
        )?;
        config.signals.freshness_expiry_hours = env_f32(
            "RELEVANCE_FRESHNESS_EXPIRY_HOURS",
            config.signals.freshness_expiry_hours,
        )?;
        config.signals.engagement_baseline = env_f32(
            "RELEVANCE_ENGAGEMENT_BASELINE",
            config.signals.engagement_baseline,
        )?;
        config.affinity.learning_rate =
            env_f32("RELEVANCE_LEARNING_RATE", config.affinity.learning_rate)?;
        config.affinity.half_life_hours = env_f32(
            "RELEVANCE_AFFINITY_HALF_LIFE_HOURS",
            config.affinity.half_life_hours,
        )?;
        config.affinity.value_bound =
            env_f32("RELEVANCE_AFFINITY_BOUND", config.affinity.value_bound)?;
        config.reasons.max_reasons =
            env_usize("RELEVANCE_MAX_REASONS", config.reasons.max_reasons)?;
        config.reasons.min_impact =
            env_f32("RELEVANCE_MIN_REASON_IMPACT", config.reasons.min_impact)?;
        config.batch.parallel_threshold = env_usize(
            "RELEVANCE_PARALLEL_THRESHOLD",
            config.batch.parallel_threshold,
        )?;
        config.batch.chunk_size = env_usize("RELEVANCE_CHUNK_SIZE", config.batch.chunk_size)?;

        Ok(config)
    }
}

fn env_f32(key: &str, default: f32) -> Result<f32, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

fn env_usize(key: &str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
