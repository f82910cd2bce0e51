// ============================================
// User Interaction Model
// ============================================
//
// Interaction events flow into the feedback ingestor to adjust category
// and tag affinities. Each kind carries a fixed signed weight; the weight
// table lives here and nowhere else.

use super::context::{DayOfWeek, TimeOfDay};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the user did with an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    View,
    Click,
    Read,
    Like,
    Unlike,
    Share,
    Bookmark,
    Unbookmark,
    Comment,
    Hide,
    Report,
}

impl InteractionKind {
    /// Signed learning weight. Consumed only by the feedback ingestor.
    pub fn weight(&self) -> f32 {
        match self {
            InteractionKind::View => 0.1,
            InteractionKind::Click => 0.3,
            InteractionKind::Read => 1.0,
            InteractionKind::Like => 1.5,
            InteractionKind::Unlike => -1.0,
            InteractionKind::Share => 2.0,
            InteractionKind::Bookmark => 1.5,
            InteractionKind::Unbookmark => -0.5,
            InteractionKind::Comment => 2.0,
            InteractionKind::Hide => -2.0,
            InteractionKind::Report => -3.0,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            InteractionKind::Read
                | InteractionKind::Like
                | InteractionKind::Share
                | InteractionKind::Bookmark
                | InteractionKind::Comment
        )
    }

    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            InteractionKind::Hide
                | InteractionKind::Report
                | InteractionKind::Unlike
                | InteractionKind::Unbookmark
        )
    }
}

/// Where the interaction originated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InteractionSource {
    Feed,
    Search,
    Recommendation,
    Notification,
    DeepLink,
    Widget,
}

/// Situation in which the interaction occurred.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InteractionContext {
    pub time_of_day: TimeOfDay,
    pub day_of_week: DayOfWeek,
    pub source: InteractionSource,
    /// Position of the item in the feed when interacted with, if known.
    pub scroll_position: Option<u32>,
}

impl InteractionContext {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            time_of_day: TimeOfDay::from_timestamp(timestamp),
            day_of_week: DayOfWeek::from_timestamp(timestamp),
            source: InteractionSource::Feed,
            scroll_position: None,
        }
    }
}

/// A recorded user interaction with one feed item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInteraction {
    pub id: Uuid,
    pub item_id: Uuid,
    pub kind: InteractionKind,
    pub timestamp: DateTime<Utc>,
    /// Dwell time in seconds for read/watch interactions.
    pub duration_secs: Option<f32>,
    pub context: InteractionContext,
}

impl UserInteraction {
    pub fn new(item_id: Uuid, kind: InteractionKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            kind,
            timestamp,
            duration_secs: None,
            context: InteractionContext::at(timestamp),
        }
    }
}
