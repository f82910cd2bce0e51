// ============================================
// Ranker
// ============================================
//
// Sorts a batch of computed relevance scores. Never re-scores.
//
// Sort keys, in order: overall score descending, confidence descending,
// freshness component descending, item id ascending. The final key makes
// the order total, so ranking the same batch twice is byte-identical.

use crate::models::RelevanceScore;
use std::cmp::Ordering;

#[derive(Debug, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    pub fn sort(&self, scores: &mut [RelevanceScore]) {
        scores.sort_by(compare);
    }
}

fn compare(a: &RelevanceScore, b: &RelevanceScore) -> Ordering {
    // NaN scores are treated as equal and fall through to later keys
    b.overall
        .partial_cmp(&a.overall)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            b.components
                .freshness
                .partial_cmp(&a.components.freshness)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.item_id.cmp(&b.item_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreComponents;
    use chrono::Utc;
    use uuid::Uuid;

    fn score(overall: f32, confidence: f32, freshness: f32, id: Uuid) -> RelevanceScore {
        let components = ScoreComponents::new(0.0, 0.0, 0.0, 0.0, freshness, 0.0, 0.0);
        RelevanceScore::new(id, overall, components, vec![], Utc::now(), confidence)
    }

    #[test]
    fn test_sorts_by_overall_descending() {
        let mut batch = vec![
            score(0.2, 1.0, 1.0, Uuid::new_v4()),
            score(0.9, 0.1, 0.0, Uuid::new_v4()),
            score(0.5, 1.0, 1.0, Uuid::new_v4()),
        ];
        Ranker::new().sort(&mut batch);
        assert_eq!(batch[0].overall, 0.9);
        assert_eq!(batch[1].overall, 0.5);
        assert_eq!(batch[2].overall, 0.2);
    }

    #[test]
    fn test_confidence_breaks_score_ties() {
        let low_conf = Uuid::new_v4();
        let high_conf = Uuid::new_v4();
        let mut batch = vec![
            score(0.5, 0.4, 1.0, low_conf),
            score(0.5, 0.9, 0.0, high_conf),
        ];
        Ranker::new().sort(&mut batch);
        assert_eq!(batch[0].item_id, high_conf);
    }

    #[test]
    fn test_freshness_breaks_remaining_ties() {
        let stale = Uuid::new_v4();
        let fresh = Uuid::new_v4();
        let mut batch = vec![
            score(0.5, 0.5, 0.1, stale),
            score(0.5, 0.5, 0.9, fresh),
        ];
        Ranker::new().sort(&mut batch);
        assert_eq!(batch[0].item_id, fresh);
    }

    #[test]
    fn test_item_id_makes_order_total() {
        let id_a = Uuid::from_u128(1);
        let id_b = Uuid::from_u128(2);
        let mut batch = vec![
            score(0.5, 0.5, 0.5, id_b),
            score(0.5, 0.5, 0.5, id_a),
        ];
        Ranker::new().sort(&mut batch);
        assert_eq!(batch[0].item_id, id_a);

        // Same input in a different order sorts identically
        let mut again = vec![
            score(0.5, 0.5, 0.5, id_a),
            score(0.5, 0.5, 0.5, id_b),
        ];
        Ranker::new().sort(&mut again);
        assert_eq!(again[0].item_id, id_a);
    }
}
