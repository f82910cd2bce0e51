// ============================================
// Signal Calculators
// ============================================
//
// Seven independent, pure calculators, one per relevance dimension. Each
// maps (item, context, affinity snapshot) to a value in [0, 1] plus a
// `grounded` flag saying whether the value came from real input rather
// than a structural default. All "now" arithmetic uses the context
// timestamp, so identical inputs always produce identical outputs.

pub mod behavior;
pub mod engagement;
pub mod freshness;
pub mod interest;
pub mod location;
pub mod social;
pub mod time;

pub use behavior::BehaviorMatch;
pub use engagement::Engagement;
pub use freshness::Freshness;
pub use interest::InterestMatch;
pub use location::LocationRelevance;
pub use social::SocialSignal;
pub use time::TimeRelevance;

use crate::config::SignalConfig;
use crate::models::{ContextSnapshot, FeedItem, ScoreComponents, SignalKind};
use crate::services::affinity::AffinityStore;
use crate::utils::clamp01;

/// One calculator's output: a clamped value and whether it was computed
/// from genuine (non-default) input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalValue {
    pub value: f32,
    pub grounded: bool,
}

impl SignalValue {
    pub fn grounded(value: f32) -> Self {
        Self {
            value: clamp01(value),
            grounded: true,
        }
    }

    pub fn ungrounded(value: f32) -> Self {
        Self {
            value: clamp01(value),
            grounded: false,
        }
    }
}

/// All seven signal values for one item, in canonical order.
#[derive(Debug, Clone, Copy)]
pub struct SignalBreakdown {
    values: [SignalValue; 7],
}

impl SignalBreakdown {
    pub fn get(&self, kind: SignalKind) -> SignalValue {
        self.values[signal_index(kind)]
    }

    pub fn grounded_count(&self) -> usize {
        self.values.iter().filter(|v| v.grounded).count()
    }

    pub fn components(&self) -> ScoreComponents {
        ScoreComponents::new(
            self.get(SignalKind::Time).value,
            self.get(SignalKind::Location).value,
            self.get(SignalKind::Interest).value,
            self.get(SignalKind::Behavior).value,
            self.get(SignalKind::Freshness).value,
            self.get(SignalKind::Engagement).value,
            self.get(SignalKind::Social).value,
        )
    }
}

fn signal_index(kind: SignalKind) -> usize {
    match kind {
        SignalKind::Time => 0,
        SignalKind::Location => 1,
        SignalKind::Interest => 2,
        SignalKind::Behavior => 3,
        SignalKind::Freshness => 4,
        SignalKind::Engagement => 5,
        SignalKind::Social => 6,
    }
}

/// The full calculator set, configured once per engine.
#[derive(Debug)]
pub struct SignalSet {
    time: TimeRelevance,
    location: LocationRelevance,
    interest: InterestMatch,
    behavior: BehaviorMatch,
    freshness: Freshness,
    engagement: Engagement,
    social: SocialSignal,
}

impl SignalSet {
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            time: TimeRelevance::new(config),
            location: LocationRelevance::new(),
            interest: InterestMatch::new(config),
            behavior: BehaviorMatch::new(),
            freshness: Freshness::new(config),
            engagement: Engagement::new(config),
            social: SocialSignal::new(config),
        }
    }

    pub fn compute(
        &self,
        item: &FeedItem,
        context: &ContextSnapshot,
        affinity: &AffinityStore,
    ) -> SignalBreakdown {
        SignalBreakdown {
            values: [
                self.time.compute(item, context),
                self.location.compute(item, context),
                self.interest.compute(item, context, affinity),
                self.behavior.compute(item, context),
                self.freshness.compute(item, context),
                self.engagement.compute(item),
                self.social.compute(item),
            ],
        }
    }
}
