pub mod affinity;
pub mod profiles;
pub mod ranking;
pub mod reasons;
pub mod scoring;
pub mod signals;

pub use affinity::{AffinityKey, AffinityStore, FeedbackIngestor, ItemCatalog};
pub use profiles::{WeightProfile, WeightProfileRegistry};
pub use ranking::Ranker;
pub use reasons::ReasonGenerator;
pub use scoring::{CompositeScorer, ScoringError};
pub use signals::{SignalBreakdown, SignalSet, SignalValue};
