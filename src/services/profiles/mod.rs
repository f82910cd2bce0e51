// ============================================
// Weight Profile Registry
// ============================================
//
// Three built-in weight vectors plus the context-driven selection rule.
// Callers may bypass the registry with a custom vector, which is
// validated at the scoring boundary instead of silently substituted.

use crate::models::{ActivityKind, ContextSnapshot, ScoreWeights};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Named built-in profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightProfile {
    Default,
    Commute,
    Leisure,
}

impl WeightProfile {
    pub fn weights(&self) -> ScoreWeights {
        match self {
            WeightProfile::Default => ScoreWeights::DEFAULT,
            WeightProfile::Commute => ScoreWeights::COMMUTE,
            WeightProfile::Leisure => ScoreWeights::LEISURE,
        }
    }
}

#[derive(Debug, Default)]
pub struct WeightProfileRegistry;

impl WeightProfileRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Pick the profile for a context from its activity classification.
    pub fn profile_for(&self, context: &ContextSnapshot) -> WeightProfile {
        match context.activity {
            ActivityKind::Commuting | ActivityKind::Walking | ActivityKind::Driving => {
                WeightProfile::Commute
            }
            ActivityKind::Relaxing => WeightProfile::Leisure,
            _ => WeightProfile::Default,
        }
    }

    /// Select the effective weight vector: the activity-chosen profile
    /// with any disabled personalization dimensions zeroed out.
    pub fn select(&self, context: &ContextSnapshot) -> ScoreWeights {
        let profile = self.profile_for(context);
        let mut weights = profile.weights();

        let prefs = &context.preferences;
        if !prefs.time_personalization {
            weights.time = 0.0;
        }
        if !prefs.location_personalization {
            weights.location = 0.0;
        }
        if !prefs.behavior_personalization {
            weights.behavior = 0.0;
        }

        debug!(?profile, "Selected weight profile");
        weights
    }
}
