// Engagement: log-scaled, weight-blended counters saturated against a
// population baseline so one viral item cannot trivially hit 1.0.

use super::SignalValue;
use crate::config::SignalConfig;
use crate::models::FeedItem;

// Relative counter weights: views weakest, shares strongest.
const VIEW_WEIGHT: f32 = 0.1;
const LIKE_WEIGHT: f32 = 1.0;
const SHARE_WEIGHT: f32 = 2.0;
const COMMENT_WEIGHT: f32 = 1.5;
const BOOKMARK_WEIGHT: f32 = 1.5;

#[derive(Debug)]
pub struct Engagement {
    baseline: f32,
}

impl Engagement {
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            baseline: config.engagement_baseline,
        }
    }

    pub fn compute(&self, item: &FeedItem) -> SignalValue {
        // Malformed (negative) counters are clamped, never an error.
        let counts = item.engagement.sanitized();

        let raw = VIEW_WEIGHT * ln1p(counts.views)
            + LIKE_WEIGHT * ln1p(counts.likes)
            + SHARE_WEIGHT * ln1p(counts.shares)
            + COMMENT_WEIGHT * ln1p(counts.comments)
            + BOOKMARK_WEIGHT * ln1p(counts.bookmarks);

        if raw <= 0.0 {
            return SignalValue::ungrounded(0.0);
        }

        SignalValue::grounded(raw / (raw + self.baseline))
    }
}

fn ln1p(count: i64) -> f32 {
    (count as f32).ln_1p()
}
