// ============================================
// Relevance Engine
// ============================================
//
// The public facade: owns the signal calculators, profile registry,
// scorer, reason generator, ranker and affinity state, and exposes two
// operations — rank a candidate batch, and record an interaction.
//
// Scoring is pure over (items, context, affinity snapshot): all "now"
// arithmetic uses the context timestamp, so ranking the same inputs twice
// returns the same ordering and the same scores.

use crate::config::EngineConfig;
use crate::models::{ContextSnapshot, FeedItem, RelevanceScore, ScoreWeights, UserInteraction};
use crate::services::affinity::{AffinityKey, AffinityStore, FeedbackIngestor, ItemCatalog};
use crate::services::profiles::WeightProfileRegistry;
use crate::services::ranking::Ranker;
use crate::services::reasons::ReasonGenerator;
use crate::services::scoring::{validate_weights, CompositeScorer, ScoringError};
use crate::services::signals::SignalSet;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("scoring task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug)]
struct EngineInner {
    config: EngineConfig,
    signals: SignalSet,
    registry: WeightProfileRegistry,
    scorer: CompositeScorer,
    reasons: ReasonGenerator,
    ranker: Ranker,
    affinity: Arc<AffinityStore>,
    catalog: Arc<ItemCatalog>,
    ingestor: FeedbackIngestor,
}

impl EngineInner {
    fn score_item(
        &self,
        item: &FeedItem,
        context: &ContextSnapshot,
        weights: &ScoreWeights,
    ) -> RelevanceScore {
        let breakdown = self.signals.compute(item, context, &self.affinity);
        let blocked = context.preferences.blocked_categories.contains(&item.category);
        let (overall, confidence) = self.scorer.compose(&breakdown, weights, blocked);

        // Blocked items keep their component breakdown for diagnostics but
        // carry no reasons; nothing recommended them.
        let reasons = if blocked {
            Vec::new()
        } else {
            self.reasons.generate(item, context, &breakdown, weights)
        };

        RelevanceScore::new(
            item.id,
            overall,
            breakdown.components(),
            reasons,
            context.timestamp,
            confidence,
        )
    }
}

/// The relevance scoring and ranking engine.
///
/// Cheap to clone; clones share the affinity store and item catalog.
#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    inner: Arc<EngineInner>,
}

impl RelevanceEngine {
    pub fn new(config: EngineConfig) -> Self {
        let affinity = Arc::new(AffinityStore::new(config.affinity.clone()));
        let catalog = Arc::new(ItemCatalog::new());
        let ingestor = FeedbackIngestor::new(Arc::clone(&affinity), Arc::clone(&catalog));
        let inner = EngineInner {
            signals: SignalSet::new(&config.signals),
            registry: WeightProfileRegistry::new(),
            scorer: CompositeScorer::new(),
            reasons: ReasonGenerator::new(&config.reasons),
            ranker: Ranker::new(),
            affinity,
            catalog,
            ingestor,
            config,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Score and rank a candidate batch against one context snapshot.
    ///
    /// When `weight_override` is given it is validated and used verbatim,
    /// bypassing both the activity-based profile selection and the
    /// personalization toggles. An invalid override is an error, never a
    /// silent fallback to defaults.
    ///
    /// Large batches fan out across tasks in fixed chunks; results are
    /// reassembled in submission order before the final sort, so the
    /// fan-out is invisible in the output.
    pub async fn rank(
        &self,
        items: Vec<FeedItem>,
        context: ContextSnapshot,
        weight_override: Option<ScoreWeights>,
    ) -> Result<Vec<RelevanceScore>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let weights = match weight_override {
            Some(weights) => {
                validate_weights(&weights)?;
                weights
            }
            None => self.inner.registry.select(&context),
        };

        self.inner.catalog.register_batch(&items);

        let item_count = items.len();
        let mut scores = if item_count <= self.inner.config.batch.parallel_threshold {
            let mut scores = Vec::with_capacity(item_count);
            for item in &items {
                scores.push(self.inner.score_item(item, &context, &weights));
            }
            scores
        } else {
            self.score_chunked(items, &context, weights).await?
        };

        self.inner.ranker.sort(&mut scores);

        info!(
            item_count,
            time_of_day = context.time_of_day.label(),
            activity = ?context.activity,
            "Ranked candidate batch"
        );
        Ok(scores)
    }

    async fn score_chunked(
        &self,
        items: Vec<FeedItem>,
        context: &ContextSnapshot,
        weights: ScoreWeights,
    ) -> Result<Vec<RelevanceScore>> {
        let chunk_size = self.inner.config.batch.chunk_size.max(1);
        let context = Arc::new(context.clone());

        let chunks: Vec<Vec<FeedItem>> = items
            .chunks(chunk_size)
            .map(|chunk| chunk.to_vec())
            .collect();
        debug!(chunks = chunks.len(), chunk_size, "Fanning out batch scoring");

        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                let inner = Arc::clone(&self.inner);
                let context = Arc::clone(&context);
                tokio::spawn(async move {
                    chunk
                        .iter()
                        .map(|item| inner.score_item(item, &context, &weights))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut scores = Vec::new();
        for handle in handles {
            let chunk_scores = handle
                .await
                .map_err(|err| EngineError::TaskFailed(err.to_string()))?;
            scores.extend(chunk_scores);
        }
        Ok(scores)
    }

    /// Record one user interaction. Fire-and-forget: the affinity update
    /// is applied synchronously and is visible to the next `rank` call.
    pub fn record(&self, interaction: &UserInteraction) {
        self.inner.ingestor.record(interaction);
    }

    /// Decayed affinity value of one cell at `now`, or `None` if the cell
    /// has never been written. Exposed for hosts that surface "because you
    /// liked..." style diagnostics.
    pub fn affinity_value(&self, key: &AffinityKey, now: DateTime<Utc>) -> Option<f32> {
        self.inner.affinity.value_at(key, now)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }
}

impl Default for RelevanceEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
