// ============================================
// Relevance Score Model
// ============================================
//
// Score components, weight vectors, recommendation reasons and the final
// per-item relevance score returned from a ranking request.

use crate::utils::clamp01;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The seven relevance dimensions, in canonical order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Time,
    Location,
    Interest,
    Behavior,
    Freshness,
    Engagement,
    Social,
}

impl SignalKind {
    pub const ALL: [SignalKind; 7] = [
        SignalKind::Time,
        SignalKind::Location,
        SignalKind::Interest,
        SignalKind::Behavior,
        SignalKind::Freshness,
        SignalKind::Engagement,
        SignalKind::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Time => "time relevance",
            SignalKind::Location => "location relevance",
            SignalKind::Interest => "interest match",
            SignalKind::Behavior => "behavior match",
            SignalKind::Freshness => "freshness",
            SignalKind::Engagement => "engagement",
            SignalKind::Social => "social signal",
        }
    }
}

/// The seven signal values for one item, each clamped to [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreComponents {
    pub time_relevance: f32,
    pub location_relevance: f32,
    pub interest_match: f32,
    pub behavior_match: f32,
    pub freshness: f32,
    pub engagement: f32,
    pub social_signal: f32,
}

impl ScoreComponents {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time_relevance: f32,
        location_relevance: f32,
        interest_match: f32,
        behavior_match: f32,
        freshness: f32,
        engagement: f32,
        social_signal: f32,
    ) -> Self {
        Self {
            time_relevance: clamp01(time_relevance),
            location_relevance: clamp01(location_relevance),
            interest_match: clamp01(interest_match),
            behavior_match: clamp01(behavior_match),
            freshness: clamp01(freshness),
            engagement: clamp01(engagement),
            social_signal: clamp01(social_signal),
        }
    }

    pub fn get(&self, kind: SignalKind) -> f32 {
        match kind {
            SignalKind::Time => self.time_relevance,
            SignalKind::Location => self.location_relevance,
            SignalKind::Interest => self.interest_match,
            SignalKind::Behavior => self.behavior_match,
            SignalKind::Freshness => self.freshness,
            SignalKind::Engagement => self.engagement,
            SignalKind::Social => self.social_signal,
        }
    }
}

/// Per-signal weight vector. All weights must be non-negative and at least
/// one must be nonzero; validation happens at the scoring boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    pub time: f32,
    pub location: f32,
    pub interest: f32,
    pub behavior: f32,
    pub freshness: f32,
    pub engagement: f32,
    pub social: f32,
}

impl ScoreWeights {
    /// Balanced profile for everyday browsing.
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        time: 1.0,
        location: 0.8,
        interest: 1.5,
        behavior: 1.2,
        freshness: 1.0,
        engagement: 0.7,
        social: 0.5,
    };

    /// Commute profile: freshness and timeliness dominate.
    pub const COMMUTE: ScoreWeights = ScoreWeights {
        time: 1.5,
        location: 1.2,
        interest: 1.0,
        behavior: 0.8,
        freshness: 1.8,
        engagement: 0.5,
        social: 0.3,
    };

    /// Leisure profile: interest and behavior dominate.
    pub const LEISURE: ScoreWeights = ScoreWeights {
        time: 0.5,
        location: 0.5,
        interest: 2.0,
        behavior: 1.5,
        freshness: 0.7,
        engagement: 1.0,
        social: 1.0,
    };

    pub fn get(&self, kind: SignalKind) -> f32 {
        match kind {
            SignalKind::Time => self.time,
            SignalKind::Location => self.location,
            SignalKind::Interest => self.interest,
            SignalKind::Behavior => self.behavior,
            SignalKind::Freshness => self.freshness,
            SignalKind::Engagement => self.engagement,
            SignalKind::Social => self.social,
        }
    }

    pub fn sum(&self) -> f32 {
        SignalKind::ALL.iter().map(|k| self.get(*k)).sum()
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why an item was recommended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    TimeOfDay,
    Location,
    Interest,
    Behavior,
    Trending,
    SimilarContent,
    Social,
    Personalized,
}

impl ReasonKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReasonKind::TimeOfDay => "time of day",
            ReasonKind::Location => "location",
            ReasonKind::Interest => "interest",
            ReasonKind::Behavior => "behavior",
            ReasonKind::Trending => "trending",
            ReasonKind::SimilarContent => "similar content",
            ReasonKind::Social => "social",
            ReasonKind::Personalized => "personalized",
        }
    }
}

/// One ranked justification for a score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationReason {
    pub kind: ReasonKind,
    pub description: String,
    /// Share of the overall score attributed to this reason, in [0, 1].
    pub impact: f32,
    pub detail: Option<String>,
}

impl RecommendationReason {
    pub fn new(kind: ReasonKind, description: impl Into<String>, impact: f32) -> Self {
        Self {
            kind,
            description: description.into(),
            impact: clamp01(impact),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Final relevance score for one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub item_id: Uuid,
    /// Weighted composite in [0, 1].
    pub overall: f32,
    pub components: ScoreComponents,
    pub reasons: Vec<RecommendationReason>,
    pub computed_at: DateTime<Utc>,
    /// Fraction of signals computed from genuine input, in [0, 1].
    /// Advisory metadata: never multiplied into `overall`.
    pub confidence: f32,
}

impl RelevanceScore {
    pub fn new(
        item_id: Uuid,
        overall: f32,
        components: ScoreComponents,
        reasons: Vec<RecommendationReason>,
        computed_at: DateTime<Utc>,
        confidence: f32,
    ) -> Self {
        Self {
            item_id,
            overall: clamp01(overall),
            components,
            reasons,
            computed_at,
            confidence: clamp01(confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_clamp_out_of_domain_inputs() {
        let components = ScoreComponents::new(1.5, -0.3, f32::NAN, 0.4, 0.9, f32::INFINITY, 0.2);
        assert_eq!(components.time_relevance, 1.0);
        assert_eq!(components.location_relevance, 0.0);
        assert_eq!(components.interest_match, 0.0);
        assert_eq!(components.engagement, 0.0);
        for kind in SignalKind::ALL {
            let v = components.get(kind);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_builtin_profiles_have_positive_sum() {
        for weights in [
            ScoreWeights::DEFAULT,
            ScoreWeights::COMMUTE,
            ScoreWeights::LEISURE,
        ] {
            assert!(weights.sum() > 0.0);
            for kind in SignalKind::ALL {
                assert!(weights.get(kind) >= 0.0);
            }
        }
    }

    #[test]
    fn test_relevance_score_clamps_overall_and_confidence() {
        let score = RelevanceScore::new(
            Uuid::new_v4(),
            1.7,
            ScoreComponents::default(),
            vec![],
            Utc::now(),
            -0.2,
        );
        assert_eq!(score.overall, 1.0);
        assert_eq!(score.confidence, 0.0);
    }

    #[test]
    fn test_reason_impact_clamped() {
        let reason = RecommendationReason::new(ReasonKind::Interest, "test", 2.0);
        assert_eq!(reason.impact, 1.0);
    }
}
