//! Domain models
//!
//! Rust structs for the persisted note and stats records. Field names
//! serialize in camelCase so stored blobs keep the documented JSON shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned to a note, from the fixed ten-value set shown in
/// the category selector. Serialized as the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Encouragement,
    Support,
    Motivation,
    Mindfulness,
    Kindness,
    Hope,
    Celebration,
    Grief,
    Anxiety,
    Heartbreak,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 10] = [
        Category::Encouragement,
        Category::Support,
        Category::Motivation,
        Category::Mindfulness,
        Category::Kindness,
        Category::Hope,
        Category::Celebration,
        Category::Grief,
        Category::Anxiety,
        Category::Heartbreak,
    ];
}

/// A top-level note on the wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Soft-delete flag; reported notes stay in the collection but are
    /// excluded from every read path.
    pub reported: bool,
    /// Absent on some seed/legacy notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A reply to a note. Threading is a single level deep: a reply has no
/// replies field at all, so nesting cannot be expressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub reported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Per-device gamification state, one record per store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Consecutive qualifying days.
    pub streak: u32,
    /// Timestamp of the last qualifying creation event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_note_date: Option<DateTime<Utc>>,
    /// Qualifying creation events to date (first of each day).
    pub total_notes: u32,
    /// Earned badge names, in the order earned.
    pub badges: Vec<String>,
}

/// Format a note timestamp for display or export, e.g. "Mar 4, 2026".
pub fn format_note_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
