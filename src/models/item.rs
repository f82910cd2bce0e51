// ============================================
// Feed Item Model
// ============================================
//
// Candidate items are supplied by the content collaborator and are
// immutable once scored. Engagement counters may be refreshed between
// ranking requests, never by the engine itself.

use crate::utils::haversine_distance_m;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content category for a feed item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeedCategory {
    News,
    Entertainment,
    Sports,
    Technology,
    Lifestyle,
    Food,
    Travel,
    Finance,
}

impl FeedCategory {
    pub const ALL: [FeedCategory; 8] = [
        FeedCategory::News,
        FeedCategory::Entertainment,
        FeedCategory::Sports,
        FeedCategory::Technology,
        FeedCategory::Lifestyle,
        FeedCategory::Food,
        FeedCategory::Travel,
        FeedCategory::Finance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedCategory::News => "news",
            FeedCategory::Entertainment => "entertainment",
            FeedCategory::Sports => "sports",
            FeedCategory::Technology => "technology",
            FeedCategory::Lifestyle => "lifestyle",
            FeedCategory::Food => "food",
            FeedCategory::Travel => "travel",
            FeedCategory::Finance => "finance",
        }
    }
}

/// Media kind of a feed item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Article,
    Video,
    Image,
    Audio,
    Live,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Video => "video",
            ContentKind::Image => "image",
            ContentKind::Audio => "audio",
            ContentKind::Live => "live",
        }
    }
}

/// A geographic point without an associated radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Geographic anchor of an item: a point plus the radius (meters) within
/// which the item is considered locally relevant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoAnchor {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
}

impl GeoAnchor {
    pub fn new(latitude: f64, longitude: f64, radius_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_m,
        }
    }

    /// Great-circle distance from this anchor to a point, in meters.
    pub fn distance_to(&self, point: &GeoPoint) -> f64 {
        haversine_distance_m(
            self.latitude,
            self.longitude,
            point.latitude,
            point.longitude,
        )
    }
}

/// Raw engagement counters as reported by the content collaborator.
///
/// Counters are `i64` because upstream refreshes have been observed to
/// deliver negative deltas; calculators clamp at read time instead of
/// rejecting the item.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngagementCounts {
    pub views: i64,
    pub likes: i64,
    pub shares: i64,
    pub comments: i64,
    pub bookmarks: i64,
}

impl EngagementCounts {
    pub fn new(views: i64, likes: i64, shares: i64, comments: i64, bookmarks: i64) -> Self {
        Self {
            views,
            likes,
            shares,
            comments,
            bookmarks,
        }
    }

    /// Copy with every counter clamped to be non-negative.
    pub fn sanitized(&self) -> EngagementCounts {
        EngagementCounts {
            views: self.views.max(0),
            likes: self.likes.max(0),
            shares: self.shares.max(0),
            comments: self.comments.max(0),
            bookmarks: self.bookmarks.max(0),
        }
    }

    pub fn total(&self) -> i64 {
        let s = self.sanitized();
        s.views + s.likes + s.shares + s.comments + s.bookmarks
    }
}

/// A candidate item to be scored and ranked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub category: FeedCategory,
    pub content_kind: ContentKind,
    pub published_at: DateTime<Utc>,
    /// Estimated consumption time in minutes.
    pub read_time_minutes: u32,
    pub tags: Vec<String>,
    pub location: Option<GeoAnchor>,
    pub engagement: EngagementCounts,
}

impl FeedItem {
    pub fn new(
        title: impl Into<String>,
        category: FeedCategory,
        content_kind: ContentKind,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: String::new(),
            category,
            content_kind,
            published_at,
            read_time_minutes: 5,
            tags: Vec::new(),
            location: None,
            engagement: EngagementCounts::default(),
        }
    }

    /// Age of the item relative to `now`, in hours. Items published in the
    /// future count as age zero.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f32 {
        let secs = (now - self.published_at).num_seconds().max(0);
        secs as f32 / 3600.0
    }
}
