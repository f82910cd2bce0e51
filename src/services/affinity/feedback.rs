// ============================================
// Feedback Ingestor
// ============================================
//
// Turns recorded user interactions into affinity updates. Fire-and-forget
// from the caller's perspective: resolution failures are downgraded to the
// uncategorized bucket, never surfaced as errors.

use super::{AffinityKey, AffinityStore, ItemCatalog};
use crate::models::UserInteraction;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct FeedbackIngestor {
    store: Arc<AffinityStore>,
    catalog: Arc<ItemCatalog>,
}

impl FeedbackIngestor {
    pub fn new(store: Arc<AffinityStore>, catalog: Arc<ItemCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Record one interaction.
    ///
    /// The item's category is resolved through the catalog built from
    /// ranked batches. The category cell takes the interaction's full
    /// signed weight; each tag cell takes it scaled by the configured tag
    /// ratio. An unknown item id lands in the uncategorized bucket.
    pub fn record(&self, interaction: &UserInteraction) {
        let weight = interaction.kind.weight();
        let now = interaction.timestamp;

        match self.catalog.resolve(&interaction.item_id) {
            Some(entry) => {
                self.store
                    .apply(AffinityKey::Category(entry.category), weight, now);

                let tag_ratio = self.store.config().tag_weight_ratio;
                for tag in entry.tags {
                    self.store
                        .apply(AffinityKey::Tag(tag), weight * tag_ratio, now);
                }

                debug!(
                    item_id = %interaction.item_id,
                    kind = ?interaction.kind,
                    category = ?entry.category,
                    "Recorded interaction"
                );
            }
            None => {
                self.store.apply(AffinityKey::Uncategorized, weight, now);
                debug!(
                    item_id = %interaction.item_id,
                    kind = ?interaction.kind,
                    "Unknown item, recorded under uncategorized bucket"
                );
            }
        }
    }
}
