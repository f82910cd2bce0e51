// Social signal: conversation rate. Rewards items that generate shares
// and comments over items that are merely viewed.

use super::SignalValue;
use crate::config::SignalConfig;
use crate::models::FeedItem;

#[derive(Debug)]
pub struct SocialSignal {
    conversation_scale: f32,
}

impl SocialSignal {
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            conversation_scale: config.social_conversation_scale,
        }
    }

    pub fn compute(&self, item: &FeedItem) -> SignalValue {
        let counts = item.engagement.sanitized();
        if counts.views == 0 {
            return SignalValue::ungrounded(0.0);
        }

        let conversations = (counts.shares + counts.comments) as f32;
        let ratio = conversations / counts.views as f32;

        SignalValue::grounded(ratio * self.conversation_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentKind, EngagementCounts, FeedCategory};
    use chrono::Utc;

    fn item_with(counts: EngagementCounts) -> FeedItem {
        let mut item = FeedItem::new("x", FeedCategory::News, ContentKind::Article, Utc::now());
        item.engagement = counts;
        item
    }

    #[test]
    fn test_no_views_is_ungrounded() {
        let calc = SocialSignal::new(&SignalConfig::default());
        let sv = calc.compute(&item_with(EngagementCounts::new(0, 0, 5, 5, 0)));
        assert_eq!(sv.value, 0.0);
        assert!(!sv.grounded);
    }

    #[test]
    fn test_conversation_heavy_item_beats_view_heavy_item() {
        let calc = SocialSignal::new(&SignalConfig::default());
        // 2% conversation rate vs 0.1%
        let discussed = calc.compute(&item_with(EngagementCounts::new(1000, 0, 10, 10, 0)));
        let viewed = calc.compute(&item_with(EngagementCounts::new(10_000, 0, 5, 5, 0)));
        assert!(discussed.value > viewed.value);
    }

    #[test]
    fn test_extreme_ratio_clamps_to_one() {
        let calc = SocialSignal::new(&SignalConfig::default());
        let sv = calc.compute(&item_with(EngagementCounts::new(10, 0, 50, 50, 0)));
        assert_eq!(sv.value, 1.0);
    }
}
