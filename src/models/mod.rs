pub mod context;
pub mod interaction;
pub mod item;
pub mod score;

pub use context::{
    ActivityKind, ContentLength, ContextSnapshot, DayOfWeek, DeviceState, TimeOfDay,
    UserPreferences,
};
pub use interaction::{InteractionContext, InteractionKind, InteractionSource, UserInteraction};
pub use item::{ContentKind, EngagementCounts, FeedCategory, FeedItem, GeoAnchor, GeoPoint};
pub use score::{
    ReasonKind, RecommendationReason, RelevanceScore, ScoreComponents, ScoreWeights, SignalKind,
};
