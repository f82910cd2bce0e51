// ============================================
// Reason Generator
// ============================================
//
// Turns the per-signal contributions behind a score into a short, ranked
// list of human-readable justifications. Contributions below the
// minimum-impact threshold are dropped so explanations never cite
// negligible factors.

use crate::config::ReasonConfig;
use crate::models::{
    ContextSnapshot, FeedItem, ReasonKind, RecommendationReason, ScoreWeights, SignalKind,
};
use crate::services::signals::SignalBreakdown;

/// Fixed component-to-reason mapping. Freshness and engagement both
/// surface as "trending"; their descriptions tell them apart.
fn reason_kind(signal: SignalKind) -> ReasonKind {
    match signal {
        SignalKind::Time => ReasonKind::TimeOfDay,
        SignalKind::Location => ReasonKind::Location,
        SignalKind::Interest => ReasonKind::Interest,
        SignalKind::Behavior => ReasonKind::Behavior,
        SignalKind::Freshness => ReasonKind::Trending,
        SignalKind::Engagement => ReasonKind::Trending,
        SignalKind::Social => ReasonKind::Social,
    }
}

#[derive(Debug)]
pub struct ReasonGenerator {
    max_reasons: usize,
    min_impact: f32,
}

impl ReasonGenerator {
    pub fn new(config: &ReasonConfig) -> Self {
        Self {
            max_reasons: config.max_reasons,
            min_impact: config.min_impact,
        }
    }

    /// Build at most `max_reasons` reasons for one scored item, ranked by
    /// each signal's share of the total weighted contribution.
    pub fn generate(
        &self,
        item: &FeedItem,
        context: &ContextSnapshot,
        breakdown: &SignalBreakdown,
        weights: &ScoreWeights,
    ) -> Vec<RecommendationReason> {
        let mut contributions: Vec<(SignalKind, f32, f32)> = SignalKind::ALL
            .iter()
            .filter_map(|&kind| {
                let sv = breakdown.get(kind);
                if !sv.grounded {
                    return None;
                }
                let contribution = weights.get(kind) * sv.value;
                (contribution > 0.0).then_some((kind, contribution, sv.value))
            })
            .collect();

        let total: f32 = contributions.iter().map(|(_, c, _)| c).sum();
        if total <= f32::EPSILON {
            return Vec::new();
        }

        contributions.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| signal_order(a.0).cmp(&signal_order(b.0)))
        });

        let reasons: Vec<RecommendationReason> = contributions
            .iter()
            .map(|&(kind, contribution, value)| (kind, contribution / total, value))
            .filter(|&(_, share, _)| share >= self.min_impact)
            .take(self.max_reasons)
            .map(|(kind, share, value)| self.build_reason(kind, share, value, item, context))
            .collect();

        if reasons.is_empty() {
            // Every factor was marginal; fall back to a generic reason so
            // a positively-scored item is never left unexplained.
            let top_share = contributions
                .first()
                .map(|(_, c, _)| c / total)
                .unwrap_or(0.0);
            return vec![RecommendationReason::new(
                ReasonKind::Personalized,
                "Recommended from your overall profile",
                top_share,
            )];
        }

        reasons
    }

    fn build_reason(
        &self,
        signal: SignalKind,
        share: f32,
        value: f32,
        item: &FeedItem,
        context: &ContextSnapshot,
    ) -> RecommendationReason {
        let description = match signal {
            SignalKind::Time => {
                format!(
                    "{} content that fits your {}",
                    capitalize(item.category.label()),
                    context.time_of_day.label()
                )
            }
            SignalKind::Location => "Close to your current location".to_string(),
            SignalKind::Interest => {
                let mut desc = format!("Strong match for your interest in {}", item.category.label());
                if let Some(tag) = item.tags.first() {
                    desc.push_str(&format!(" and {tag}"));
                }
                desc
            }
            SignalKind::Behavior => "Fits your usual reading length and format".to_string(),
            SignalKind::Freshness => "Published very recently".to_string(),
            SignalKind::Engagement => "Popular with other readers right now".to_string(),
            SignalKind::Social => "Generating a lot of discussion".to_string(),
        };

        RecommendationReason::new(reason_kind(signal), description, share)
            .with_detail(format!("{} at {:.2}", signal.label(), value))
    }
}

fn signal_order(kind: SignalKind) -> usize {
    SignalKind::ALL.iter().position(|&k| k == kind).unwrap_or(0)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
