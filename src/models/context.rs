// ============================================
// Context Snapshot Model
// ============================================
//
// An immutable description of "now" for one ranking request: time, place,
// activity, device state and user preferences. Built fresh per request by
// the host; never persisted by the engine.

use super::item::{ContentKind, FeedCategory, GeoPoint};
use super::interaction::UserInteraction;
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket (five buckets spanning the day).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 04:00 - 06:59
    EarlyMorning,
    /// 07:00 - 11:59
    Morning,
    /// 12:00 - 17:59
    Afternoon,
    /// 18:00 - 21:59
    Evening,
    /// 22:00 - 03:59
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            4..=6 => TimeOfDay::EarlyMorning,
            7..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        Self::from_hour(ts.hour())
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::EarlyMorning => "early morning",
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

/// Day of week, with Sunday first to match the interaction log encoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }

    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        Self::from_weekday(ts.weekday())
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }
}

/// Coarse activity classification supplied by the activity collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Stationary,
    Walking,
    Running,
    Cycling,
    Driving,
    Commuting,
    Working,
    Relaxing,
    Unknown,
}

impl ActivityKind {
    /// Content length this activity implies, when it implies one at all.
    /// Activities without a clear implication fall back to the user's
    /// explicit preference.
    pub fn implied_length(&self) -> Option<ContentLength> {
        match self {
            ActivityKind::Commuting | ActivityKind::Walking => Some(ContentLength::Short),
            ActivityKind::Driving => Some(ContentLength::VeryShort),
            ActivityKind::Relaxing => Some(ContentLength::Long),
            ActivityKind::Working => Some(ContentLength::Medium),
            _ => None,
        }
    }
}

/// Content length bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ContentLength {
    /// Up to 1 minute
    VeryShort,
    /// 1 - 3 minutes
    Short,
    /// 3 - 7 minutes
    Medium,
    /// 7 - 15 minutes
    Long,
    /// Over 15 minutes
    VeryLong,
}

impl ContentLength {
    pub fn from_minutes(minutes: u32) -> Self {
        match minutes {
            0..=1 => ContentLength::VeryShort,
            2..=3 => ContentLength::Short,
            4..=7 => ContentLength::Medium,
            8..=15 => ContentLength::Long,
            _ => ContentLength::VeryLong,
        }
    }
}

/// Device power and connectivity state at request time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DeviceState {
    pub low_power_mode: bool,
    /// Battery fraction in [0, 1].
    pub battery_level: f32,
    /// Screen brightness fraction in [0, 1].
    pub screen_brightness: f32,
    pub wifi_connected: bool,
    pub cellular_enabled: bool,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            low_power_mode: false,
            battery_level: 1.0,
            screen_brightness: 0.5,
            wifi_connected: true,
            cellular_enabled: true,
        }
    }
}

impl DeviceState {
    /// Whether the host should prefer lightweight content delivery.
    pub fn should_conserve_data(&self) -> bool {
        self.low_power_mode || (!self.wifi_connected && self.battery_level < 0.3)
    }
}

/// Explicit user preferences, including the three personalization toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    pub favorite_categories: Vec<FeedCategory>,
    pub blocked_categories: Vec<FeedCategory>,
    pub preferred_length: ContentLength,
    pub preferred_kinds: Vec<ContentKind>,
    pub location_personalization: bool,
    pub time_personalization: bool,
    pub behavior_personalization: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            favorite_categories: Vec::new(),
            blocked_categories: Vec::new(),
            preferred_length: ContentLength::Medium,
            preferred_kinds: vec![ContentKind::Article, ContentKind::Video],
            location_personalization: true,
            time_personalization: true,
            behavior_personalization: true,
        }
    }
}

/// Immutable snapshot of the user's situation for one ranking request.
///
/// The time-of-day and day-of-week buckets are derived from the timestamp
/// at construction; all scoring arithmetic uses `timestamp` as "now" so a
/// given (items, context, affinity) triple always scores identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub timestamp: DateTime<Utc>,
    pub location: Option<GeoPoint>,
    pub time_of_day: TimeOfDay,
    pub day_of_week: DayOfWeek,
    pub activity: ActivityKind,
    pub device: DeviceState,
    pub preferences: UserPreferences,
    /// Bounded window of recent interactions, supplied by the host for
    /// downstream diagnostics.
    pub recent_interactions: Vec<UserInteraction>,
}

impl ContextSnapshot {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            location: None,
            time_of_day: TimeOfDay::from_timestamp(timestamp),
            day_of_week: DayOfWeek::from_timestamp(timestamp),
            activity: ActivityKind::Unknown,
            device: DeviceState::default(),
            preferences: UserPreferences::default(),
            recent_interactions: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_activity(mut self, activity: ActivityKind) -> Self {
        self.activity = activity;
        self
    }

    pub fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.preferences = preferences;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::EarlyMorning);
        assert_eq!(TimeOfDay::from_hour(8), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(2), TimeOfDay::Night);
    }

    #[test]
    fn test_snapshot_derives_buckets() {
        // 2026-03-02 is a Monday; 09:30 UTC is morning
        let ts = Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap();
        let ctx = ContextSnapshot::new(ts);
        assert_eq!(ctx.time_of_day, TimeOfDay::Morning);
        assert_eq!(ctx.day_of_week, DayOfWeek::Monday);
        assert!(!ctx.day_of_week.is_weekend());
    }

    #[test]
    fn test_content_length_from_minutes() {
        assert_eq!(ContentLength::from_minutes(0), ContentLength::VeryShort);
        assert_eq!(ContentLength::from_minutes(3), ContentLength::Short);
        assert_eq!(ContentLength::from_minutes(5), ContentLength::Medium);
        assert_eq!(ContentLength::from_minutes(12), ContentLength::Long);
        assert_eq!(ContentLength::from_minutes(40), ContentLength::VeryLong);
    }

    #[test]
    fn test_device_conserve_data() {
        let mut device = DeviceState::default();
        assert!(!device.should_conserve_data());

        device.low_power_mode = true;
        assert!(device.should_conserve_data());

        device.low_power_mode = false;
        device.wifi_connected = false;
        device.battery_level = 0.2;
        assert!(device.should_conserve_data());
    }

    #[test]
    fn test_activity_implied_length() {
        assert_eq!(
            ActivityKind::Driving.implied_length(),
            Some(ContentLength::VeryShort)
        );
        assert_eq!(ActivityKind::Stationary.implied_length(), None);
    }
}
