//! Deterministic relevance scoring and ranking for a personalized feed.
//!
//! The engine maps a batch of candidate items plus an immutable context
//! snapshot to per-item relevance scores: seven independent signal values,
//! a weighted composite, a confidence fraction and ranked human-readable
//! reasons. Recorded interactions feed a bounded, lazily-decayed affinity
//! store that shapes the interest signal on later requests.

pub mod config;
pub mod engine;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{ConfigError, EngineConfig};
pub use engine::{EngineError, RelevanceEngine};
pub use models::{
    ContextSnapshot, FeedItem, RelevanceScore, ScoreWeights, UserInteraction,
};
pub use services::{AffinityKey, WeightProfile};
