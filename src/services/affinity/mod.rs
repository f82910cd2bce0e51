// ============================================
// Affinity Store
// ============================================
//
// The only mutable state in the engine: per-category (and per-tag) learned
// preference strength, built from recorded interactions.
//
// Lifecycle of a cell: unseen (no entry) -> active (at least one recorded
// interaction). Decay toward zero is computed lazily from the last-updated
// timestamp at read time; there is no background maintenance job.
//
// Writes go through the DashMap entry API, which serializes updates per
// cell, so concurrent `record` calls cannot interleave into a lost update.

pub mod feedback;

pub use feedback::FeedbackIngestor;

use crate::config::AffinityConfig;
use crate::models::{FeedCategory, FeedItem};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Key of one affinity cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AffinityKey {
    Category(FeedCategory),
    Tag(String),
    /// Synthetic bucket for interactions whose item category cannot be
    /// resolved. Losing feedback signal is worse than slight
    /// misclassification, so these are recorded, not rejected.
    Uncategorized,
}

/// One affinity cell: a bounded floating value plus its last update time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AffinityCell {
    pub value: f32,
    pub last_updated: DateTime<Utc>,
}

/// Concurrent affinity state, read by the interest calculator and written
/// by the feedback ingestor.
#[derive(Debug)]
pub struct AffinityStore {
    cells: DashMap<AffinityKey, AffinityCell>,
    config: AffinityConfig,
}

impl AffinityStore {
    pub fn new(config: AffinityConfig) -> Self {
        Self {
            cells: DashMap::new(),
            config,
        }
    }

    /// Apply a signed interaction weight to a cell at `now`.
    ///
    /// The stored value is decayed to `now` first, then nudged by
    /// `signed_weight * learning_rate` and clamped to the configured bound
    /// so no single event can permanently saturate the cell.
    pub fn apply(&self, key: AffinityKey, signed_weight: f32, now: DateTime<Utc>) {
        let bound = self.config.value_bound;
        let mut cell = self.cells.entry(key).or_insert(AffinityCell {
            value: 0.0,
            last_updated: now,
        });

        let decayed = decay_value(
            cell.value,
            cell.last_updated,
            now,
            self.config.half_life_hours,
        );
        cell.value = (decayed + signed_weight * self.config.learning_rate).clamp(-bound, bound);
        cell.last_updated = now;
    }

    /// Current decayed value of a cell, or `None` for an unseen cell.
    /// Read-only: the stored value is not rewritten.
    pub fn value_at(&self, key: &AffinityKey, now: DateTime<Utc>) -> Option<f32> {
        self.cells.get(key).map(|cell| {
            decay_value(
                cell.value,
                cell.last_updated,
                now,
                self.config.half_life_hours,
            )
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn config(&self) -> &AffinityConfig {
        &self.config
    }
}

fn decay_value(
    value: f32,
    last_updated: DateTime<Utc>,
    now: DateTime<Utc>,
    half_life_hours: f32,
) -> f32 {
    let elapsed_hours = (now - last_updated).num_seconds().max(0) as f32 / 3600.0;
    value * crate::utils::half_life_decay(elapsed_hours, half_life_hours)
}

/// Facts about an item needed to attribute later feedback: its category
/// and tags. Populated from every ranked batch, since the engine never
/// fetches items itself.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub category: FeedCategory,
    pub tags: Vec<String>,
}

/// Concurrent item-id index over the candidate items the engine has seen.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    entries: DashMap<Uuid, CatalogEntry>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_batch(&self, items: &[FeedItem]) {
        for item in items {
            self.entries.insert(
                item.id,
                CatalogEntry {
                    category: item.category,
                    tags: item.tags.clone(),
                },
            );
        }
        debug!(item_count = items.len(), "Registered candidate batch in catalog");
    }

    pub fn resolve(&self, item_id: &Uuid) -> Option<CatalogEntry> {
        self.entries.get(item_id).map(|entry| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn store() -> AffinityStore {
        AffinityStore::new(AffinityConfig::default())
    }

    #[test]
    fn test_positive_interaction_increases_cell() {
        let store = store();
        let now = Utc::now();
        let key = AffinityKey::Category(FeedCategory::Sports);

        store.apply(key.clone(), 2.0, now);
        let first = store.value_at(&key, now).unwrap();
        assert!(first > 0.0);

        store.apply(key.clone(), 2.0, now);
        let second = store.value_at(&key, now).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_negative_interaction_decreases_cell() {
        let store = store();
        let now = Utc::now();
        let key = AffinityKey::Category(FeedCategory::Finance);

        store.apply(key.clone(), -3.0, now);
        assert!(store.value_at(&key, now).unwrap() < 0.0);
    }

    #[test]
    fn test_value_is_bounded() {
        let store = store();
        let now = Utc::now();
        let key = AffinityKey::Category(FeedCategory::News);
        let bound = store.config().value_bound;

        for _ in 0..100 {
            store.apply(key.clone(), 3.0, now);
        }
        assert!(store.value_at(&key, now).unwrap() <= bound);

        for _ in 0..200 {
            store.apply(key.clone(), -3.0, now);
        }
        assert!(store.value_at(&key, now).unwrap() >= -bound);
    }

    #[test]
    fn test_decay_is_monotone_and_never_overshoots() {
        let store = store();
        let start = Utc::now();
        let key = AffinityKey::Category(FeedCategory::Travel);
        store.apply(key.clone(), 2.0, start);

        let mut previous = store.value_at(&key, start).unwrap();
        assert!(previous > 0.0);

        for days in [1, 7, 30, 365] {
            let later = start + Duration::days(days);
            let value = store.value_at(&key, later).unwrap();
            assert!(value <= previous, "decay must be monotone");
            assert!(value >= 0.0, "decay must never overshoot past zero");
            previous = value;
        }
    }

    #[test]
    fn test_read_does_not_mutate_stored_value() {
        let store = store();
        let start = Utc::now();
        let key = AffinityKey::Category(FeedCategory::Food);
        store.apply(key.clone(), 2.0, start);

        let later = start + Duration::days(7);
        let first_read = store.value_at(&key, later).unwrap();
        let second_read = store.value_at(&key, later).unwrap();
        assert_eq!(first_read, second_read);
    }

    #[test]
    fn test_unseen_cell_reads_none() {
        let store = store();
        assert!(store
            .value_at(&AffinityKey::Category(FeedCategory::Lifestyle), Utc::now())
            .is_none());
    }

    #[test]
    fn test_concurrent_writes_lose_no_updates() {
        use std::sync::Arc;

        let store = Arc::new(AffinityStore::new(AffinityConfig {
            learning_rate: 0.001,
            value_bound: 1000.0,
            ..AffinityConfig::default()
        }));
        let now = Utc::now();
        let key = AffinityKey::Category(FeedCategory::Technology);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            let key = key.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..1000 {
                    store.apply(key.clone(), 1.0, now);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let value = store.value_at(&key, now).unwrap();
        assert!((value - 8.0).abs() < 0.01, "expected 8.0, got {value}");
    }
}
