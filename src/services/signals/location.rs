// Location relevance: linear falloff of the distance between the user and
// the item's geo-anchor, relative to the anchor's declared radius.

use super::SignalValue;
use crate::models::{ContextSnapshot, FeedItem};

/// Anchors with a degenerate radius still get a sensible falloff.
const MIN_RADIUS_M: f64 = 1.0;

#[derive(Debug, Default)]
pub struct LocationRelevance;

impl LocationRelevance {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, item: &FeedItem, context: &ContextSnapshot) -> SignalValue {
        if !context.preferences.location_personalization {
            return SignalValue::ungrounded(0.0);
        }
        let (anchor, here) = match (&item.location, &context.location) {
            (Some(anchor), Some(here)) => (anchor, here),
            _ => return SignalValue::ungrounded(0.0),
        };

        let distance = anchor.distance_to(here);
        let radius = anchor.radius_m.max(MIN_RADIUS_M);
        let value = 1.0 - (distance / radius).min(1.0);

        SignalValue::grounded(value as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentKind, FeedCategory, GeoAnchor, GeoPoint};
    use chrono::Utc;

    fn item_with_anchor(anchor: GeoAnchor) -> FeedItem {
        let mut item = FeedItem::new(
            "nearby",
            FeedCategory::Food,
            ContentKind::Article,
            Utc::now(),
        );
        item.location = Some(anchor);
        item
    }

    #[test]
    fn test_zero_and_ungrounded_without_anchor_or_location() {
        let calc = LocationRelevance::new();
        let ctx = ContextSnapshot::new(Utc::now());
        let item = FeedItem::new("x", FeedCategory::Food, ContentKind::Article, Utc::now());

        let sv = calc.compute(&item, &ctx);
        assert_eq!(sv.value, 0.0);
        assert!(!sv.grounded);
    }

    #[test]
    fn test_at_anchor_scores_one() {
        let calc = LocationRelevance::new();
        let item = item_with_anchor(GeoAnchor::new(37.5665, 126.9780, 5000.0));
        let ctx = ContextSnapshot::new(Utc::now()).with_location(GeoPoint::new(37.5665, 126.9780));

        let sv = calc.compute(&item, &ctx);
        assert!(sv.grounded);
        assert!((sv.value - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_outside_radius_scores_zero() {
        let calc = LocationRelevance::new();
        // 1 km radius anchor, user roughly 8.5 km away
        let item = item_with_anchor(GeoAnchor::new(37.5665, 126.9780, 1000.0));
        let ctx = ContextSnapshot::new(Utc::now()).with_location(GeoPoint::new(37.4979, 127.0276));

        let sv = calc.compute(&item, &ctx);
        assert!(sv.grounded);
        assert_eq!(sv.value, 0.0);
    }

    #[test]
    fn test_toggle_off_disables_signal() {
        let calc = LocationRelevance::new();
        let item = item_with_anchor(GeoAnchor::new(37.5665, 126.9780, 5000.0));
        let mut ctx =
            ContextSnapshot::new(Utc::now()).with_location(GeoPoint::new(37.5665, 126.9780));
        ctx.preferences.location_personalization = false;

        let sv = calc.compute(&item, &ctx);
        assert_eq!(sv.value, 0.0);
        assert!(!sv.grounded);
    }
}
