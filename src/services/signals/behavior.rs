// Behavior match: does the item's length and media kind fit how the user
// consumes content right now.

use super::SignalValue;
use crate::models::{ContentLength, ContextSnapshot, FeedItem};

const FULL_MATCH: f32 = 1.0;
const PARTIAL_MATCH: f32 = 0.5;
const MISMATCH_FLOOR: f32 = 0.1;

#[derive(Debug, Default)]
pub struct BehaviorMatch;

impl BehaviorMatch {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, item: &FeedItem, context: &ContextSnapshot) -> SignalValue {
        let prefs = &context.preferences;
        if !prefs.behavior_personalization {
            return SignalValue::ungrounded(PARTIAL_MATCH);
        }

        // The current activity overrides the static preference when it
        // implies a clear length bucket (driving -> very short, etc.).
        let target_length = context
            .activity
            .implied_length()
            .unwrap_or(prefs.preferred_length);
        let item_length = ContentLength::from_minutes(item.read_time_minutes);
        let length_match = item_length == target_length;

        // An empty preferred-kinds list means no constraint.
        let kind_match =
            prefs.preferred_kinds.is_empty() || prefs.preferred_kinds.contains(&item.content_kind);

        let value = match (length_match, kind_match) {
            (true, true) => FULL_MATCH,
            (true, false) | (false, true) => PARTIAL_MATCH,
            (false, false) => MISMATCH_FLOOR,
        };

        SignalValue::grounded(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, ContentKind, FeedCategory};
    use chrono::Utc;

    fn item(minutes: u32, kind: ContentKind) -> FeedItem {
        let mut item = FeedItem::new("x", FeedCategory::Lifestyle, kind, Utc::now());
        item.read_time_minutes = minutes;
        item
    }

    #[test]
    fn test_full_match() {
        let calc = BehaviorMatch::new();
        let ctx = ContextSnapshot::new(Utc::now());
        // Default preference: medium length, article/video kinds
        let sv = calc.compute(&item(5, ContentKind::Article), &ctx);
        assert_eq!(sv.value, FULL_MATCH);
        assert!(sv.grounded);
    }

    #[test]
    fn test_single_dimension_mismatch() {
        let calc = BehaviorMatch::new();
        let ctx = ContextSnapshot::new(Utc::now());
        // Wrong length, right kind
        assert_eq!(
            calc.compute(&item(30, ContentKind::Article), &ctx).value,
            PARTIAL_MATCH
        );
        // Right length, wrong kind
        assert_eq!(
            calc.compute(&item(5, ContentKind::Live), &ctx).value,
            PARTIAL_MATCH
        );
    }

    #[test]
    fn test_double_mismatch_hits_floor_not_zero() {
        let calc = BehaviorMatch::new();
        let ctx = ContextSnapshot::new(Utc::now());
        let sv = calc.compute(&item(30, ContentKind::Live), &ctx);
        assert_eq!(sv.value, MISMATCH_FLOOR);
        assert!(sv.value > 0.0);
    }

    #[test]
    fn test_activity_overrides_preference() {
        let calc = BehaviorMatch::new();
        let ctx = ContextSnapshot::new(Utc::now()).with_activity(ActivityKind::Driving);
        // Driving implies very short; a 1-minute clip now matches on length
        let sv = calc.compute(&item(1, ContentKind::Article), &ctx);
        assert_eq!(sv.value, FULL_MATCH);
        // And the default medium preference no longer does
        let sv = calc.compute(&item(5, ContentKind::Article), &ctx);
        assert_eq!(sv.value, PARTIAL_MATCH);
    }

    #[test]
    fn test_toggle_off_is_neutral_ungrounded() {
        let calc = BehaviorMatch::new();
        let mut ctx = ContextSnapshot::new(Utc::now());
        ctx.preferences.behavior_personalization = false;
        let sv = calc.compute(&item(5, ContentKind::Article), &ctx);
        assert!(!sv.grounded);
        assert_eq!(sv.value, PARTIAL_MATCH);
    }
}
