// Interest match: learned category/tag affinity mapped into [0, 1], with
// explicit favorites boosted and blocked categories hard-vetoed.

use super::SignalValue;
use crate::config::SignalConfig;
use crate::models::{ContextSnapshot, FeedItem};
use crate::services::affinity::{AffinityKey, AffinityStore};

/// Share of the blended affinity taken from the category cell; the rest
/// comes from the mean of the item's tag cells.
const CATEGORY_SHARE: f32 = 0.7;

#[derive(Debug)]
pub struct InterestMatch {
    saturation_scale: f32,
    favorite_boost: f32,
}

impl InterestMatch {
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            saturation_scale: config.interest_saturation_scale,
            favorite_boost: config.favorite_boost,
        }
    }

    pub fn compute(
        &self,
        item: &FeedItem,
        context: &ContextSnapshot,
        affinity: &AffinityStore,
    ) -> SignalValue {
        let prefs = &context.preferences;

        // Hard veto: explicit user intent, the documented exception to
        // "never hard zero".
        if prefs.blocked_categories.contains(&item.category) {
            return SignalValue::grounded(0.0);
        }

        let now = context.timestamp;
        let category_affinity =
            affinity.value_at(&AffinityKey::Category(item.category), now);

        let tag_affinities: Vec<f32> = item
            .tags
            .iter()
            .filter_map(|tag| affinity.value_at(&AffinityKey::Tag(tag.clone()), now))
            .collect();

        let blended = match (&category_affinity, tag_affinities.is_empty()) {
            (None, true) => 0.0,
            (Some(c), true) => *c,
            (None, false) => mean(&tag_affinities),
            (Some(c), false) => {
                CATEGORY_SHARE * c + (1.0 - CATEGORY_SHARE) * mean(&tag_affinities)
            }
        };

        // Saturating map: -inf..inf -> (0, 1), neutral affinity -> 0.5
        let mut value = 0.5 + 0.5 * (blended / self.saturation_scale).tanh();

        let favorite = prefs.favorite_categories.contains(&item.category);
        if favorite {
            value += self.favorite_boost;
        }

        let grounded = category_affinity.is_some() || !tag_affinities.is_empty() || favorite;
        if grounded {
            SignalValue::grounded(value)
        } else {
            SignalValue::ungrounded(value)
        }
    }
}

fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}
