// Time relevance: how well the item's publication time and category fit
// the moment of the request.

use super::SignalValue;
use crate::config::SignalConfig;
use crate::models::{ContentKind, ContextSnapshot, FeedCategory, FeedItem, TimeOfDay};
use crate::utils::half_life_decay;
use std::collections::HashMap;

/// Hours inside which an item of a given kind counts as fully timely.
/// Live content ages out fastest, evergreen audio slowest.
fn fresh_window_hours(kind: ContentKind) -> f32 {
    match kind {
        ContentKind::Live => 2.0,
        ContentKind::Article => 24.0,
        ContentKind::Video => 72.0,
        ContentKind::Image => 96.0,
        ContentKind::Audio => 168.0,
    }
}

#[derive(Debug)]
pub struct TimeRelevance {
    boost: f32,
    damping: f32,
    floor: f32,
    /// Which categories historically perform well in each time-of-day
    /// bucket. Overridable per deployment.
    correlation: HashMap<TimeOfDay, Vec<FeedCategory>>,
}

impl TimeRelevance {
    pub fn new(config: &SignalConfig) -> Self {
        let calc = Self {
            boost: config.time_of_day_boost,
            damping: config.time_of_day_damping,
            floor: config.time_relevance_floor,
            correlation: default_correlation(),
        };
        match &config.time_of_day_correlation {
            Some(table) => calc.with_correlation(table.clone()),
            None => calc,
        }
    }

    pub fn with_correlation(mut self, correlation: HashMap<TimeOfDay, Vec<FeedCategory>>) -> Self {
        self.correlation = correlation;
        self
    }

    pub fn compute(&self, item: &FeedItem, context: &ContextSnapshot) -> SignalValue {
        let age = item.age_hours(context.timestamp);
        let window = fresh_window_hours(item.content_kind);

        let base = if age <= window {
            1.0
        } else {
            half_life_decay(age - window, window)
        };

        let correlated = self
            .correlation
            .get(&context.time_of_day)
            .map(|categories| categories.contains(&item.category))
            .unwrap_or(false);

        let value = if correlated {
            (base + self.boost).min(1.0)
        } else {
            (base * self.damping).max(self.floor)
        };

        if context.preferences.time_personalization {
            SignalValue::grounded(value)
        } else {
            SignalValue::ungrounded(value)
        }
    }
}

fn default_correlation() -> HashMap<TimeOfDay, Vec<FeedCategory>> {
    HashMap::from([
        (TimeOfDay::EarlyMorning, vec![FeedCategory::News]),
        (
            TimeOfDay::Morning,
            vec![FeedCategory::News, FeedCategory::Finance],
        ),
        (
            TimeOfDay::Afternoon,
            vec![FeedCategory::Technology, FeedCategory::Lifestyle],
        ),
        (
            TimeOfDay::Evening,
            vec![
                FeedCategory::Entertainment,
                FeedCategory::Sports,
                FeedCategory::Food,
            ],
        ),
        (
            TimeOfDay::Night,
            vec![FeedCategory::Entertainment, FeedCategory::Travel],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn calculator() -> TimeRelevance {
        TimeRelevance::new(&SignalConfig::default())
    }

    fn morning_context() -> ContextSnapshot {
        // 09:00 UTC -> morning bucket
        ContextSnapshot::new(Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_fresh_correlated_item_scores_high() {
        let ctx = morning_context();
        let item = FeedItem::new(
            "breaking",
            FeedCategory::News,
            ContentKind::Article,
            ctx.timestamp - Duration::minutes(30),
        );
        let sv = calculator().compute(&item, &ctx);
        assert!(sv.grounded);
        assert_eq!(sv.value, 1.0);
    }

    #[test]
    fn test_uncorrelated_category_is_damped_not_zeroed() {
        let ctx = morning_context();
        let item = FeedItem::new(
            "highlights",
            FeedCategory::Sports,
            ContentKind::Article,
            ctx.timestamp - Duration::minutes(30),
        );
        let sv = calculator().compute(&item, &ctx);
        assert!(sv.value < 1.0);
        assert!(sv.value > 0.0, "penalty is a floor, never a hard zero");
    }

    #[test]
    fn test_stale_live_content_decays_fast() {
        let ctx = morning_context();
        let live = FeedItem::new(
            "stream",
            FeedCategory::News,
            ContentKind::Live,
            ctx.timestamp - Duration::hours(12),
        );
        let article = FeedItem::new(
            "story",
            FeedCategory::News,
            ContentKind::Article,
            ctx.timestamp - Duration::hours(12),
        );
        let calc = calculator();
        let live_sv = calc.compute(&live, &ctx);
        let article_sv = calc.compute(&article, &ctx);
        assert!(
            live_sv.value < article_sv.value,
            "a 12h-old live stream must score below a 12h-old article"
        );
    }

    #[test]
    fn test_configured_correlation_overrides_builtin_table() {
        let config = SignalConfig {
            time_of_day_correlation: Some(HashMap::from([(
                TimeOfDay::Morning,
                vec![FeedCategory::Sports],
            )])),
            ..SignalConfig::default()
        };
        let calc = TimeRelevance::new(&config);
        let ctx = morning_context();

        let sports = FeedItem::new(
            "highlights",
            FeedCategory::Sports,
            ContentKind::Article,
            ctx.timestamp - Duration::minutes(30),
        );
        let news = FeedItem::new(
            "breaking",
            FeedCategory::News,
            ContentKind::Article,
            ctx.timestamp - Duration::minutes(30),
        );

        // Sports is now the correlated morning category; the built-in
        // news entry no longer applies.
        assert_eq!(calc.compute(&sports, &ctx).value, 1.0);
        assert!(calc.compute(&news, &ctx).value < 1.0);
    }

    #[test]
    fn test_toggle_off_marks_signal_ungrounded() {
        let mut ctx = morning_context();
        ctx.preferences.time_personalization = false;
        let item = FeedItem::new(
            "breaking",
            FeedCategory::News,
            ContentKind::Article,
            ctx.timestamp,
        );
        assert!(!calculator().compute(&item, &ctx).grounded);
    }
}
