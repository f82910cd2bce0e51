// ============================================
// Composite Scorer
// ============================================
//
// Folds the seven signal values into one overall score plus a confidence
// value. Confidence is advisory metadata for downstream tie-breaks and
// UI flags; it is never multiplied into the score.

use crate::models::{ScoreWeights, SignalKind};
use crate::services::signals::SignalBreakdown;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid weight vector: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

/// Reject weight vectors that are non-finite, negative, or all zero.
/// Invalid overrides fail closed instead of falling back to defaults.
pub fn validate_weights(weights: &ScoreWeights) -> Result<()> {
    for kind in SignalKind::ALL {
        let w = weights.get(kind);
        if !w.is_finite() {
            return Err(ScoringError::InvalidWeights(format!(
                "{} weight is not finite",
                kind.label()
            )));
        }
        if w < 0.0 {
            return Err(ScoringError::InvalidWeights(format!(
                "{} weight is negative ({w})",
                kind.label()
            )));
        }
    }
    if weights.sum() <= 0.0 {
        return Err(ScoringError::InvalidWeights(
            "at least one weight must be nonzero".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct CompositeScorer;

impl CompositeScorer {
    pub fn new() -> Self {
        Self
    }

    /// Compute (overall, confidence) for one item.
    ///
    /// The overall score is the weight-normalized average over the
    /// *grounded* components only: a structurally-defaulted signal (say,
    /// no location on either side) drops out of both numerator and
    /// denominator, so its absence shows up in confidence instead of
    /// dragging the average toward zero.
    ///
    /// `blocked` items are vetoed to 0.0 regardless of signals, which
    /// keeps a sort-only ranker sufficient to push them to the bottom.
    pub fn compose(
        &self,
        breakdown: &SignalBreakdown,
        weights: &ScoreWeights,
        blocked: bool,
    ) -> (f32, f32) {
        let confidence = breakdown.grounded_count() as f32 / SignalKind::ALL.len() as f32;

        if blocked {
            return (0.0, confidence);
        }

        let mut numerator = 0.0_f32;
        let mut denominator = 0.0_f32;
        for kind in SignalKind::ALL {
            let sv = breakdown.get(kind);
            if !sv.grounded {
                continue;
            }
            let w = weights.get(kind);
            numerator += w * sv.value;
            denominator += w;
        }

        let overall = if denominator > f32::EPSILON {
            (numerator / denominator).clamp(0.0, 1.0)
        } else {
            // All grounded signals carry zero weight; nothing to average.
            0.0
        };

        (overall, confidence)
    }
}
