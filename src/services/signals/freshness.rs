// Freshness: pure half-life decay of elapsed time since publication,
// independent of category or kind.

use super::SignalValue;
use crate::config::SignalConfig;
use crate::models::{ContextSnapshot, FeedItem};
use crate::utils::half_life_decay;

/// Minimum freshness inside the expiry horizon; evergreen items never
/// decay to exactly zero until they pass the horizon.
const FRESHNESS_FLOOR: f32 = 0.02;

#[derive(Debug)]
pub struct Freshness {
    half_life_hours: f32,
    expiry_hours: f32,
}

impl Freshness {
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            half_life_hours: config.freshness_half_life_hours,
            expiry_hours: config.freshness_expiry_hours,
        }
    }

    pub fn compute(&self, item: &FeedItem, context: &ContextSnapshot) -> SignalValue {
        let age = item.age_hours(context.timestamp);
        if age >= self.expiry_hours {
            return SignalValue::grounded(0.0);
        }
        let value = half_life_decay(age, self.half_life_hours).max(FRESHNESS_FLOOR);
        SignalValue::grounded(value)
    }
}
