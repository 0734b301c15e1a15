//! Application configuration constants
//!
//! Central location for storage keys, content limits, and badge
//! milestones used throughout the crate.

// ===== Storage Keys =====

/// Key the note collection blob is stored under.
pub const NOTES_STORE_KEY: &str = "human_notes";

/// Key the user stats blob is stored under.
pub const STATS_STORE_KEY: &str = "human_notes_stats";

// ===== Content Limits =====

/// Maximum note/reply length in characters.
pub const MAX_NOTE_CONTENT_CHARS: usize = 280;

/// Default number of notes shown on the wall view.
pub const DEFAULT_WALL_LIMIT: usize = 10;

// ===== Moderation =====

/// Case-insensitive substring deny-list. Deliberately minimal; anything
/// context-aware belongs to a real moderation system outside this crate.
pub const BANNED_WORDS: &[&str] = &["hate", "kill", "stupid", "dumb", "idiot"];

// ===== Badge Milestones =====

/// Streak length that earns [`BADGE_WEEK_WARRIOR`].
pub const WEEK_STREAK_MILESTONE: u32 = 7;

/// Streak length that earns [`BADGE_MONTHLY_MAVEN`].
pub const MONTH_STREAK_MILESTONE: u32 = 30;

/// Qualifying-note total that earns [`BADGE_KINDNESS_STARTER`].
pub const STARTER_TOTAL_MILESTONE: u32 = 10;

/// Qualifying-note total that earns [`BADGE_KINDNESS_PRO`].
pub const PRO_TOTAL_MILESTONE: u32 = 50;

pub const BADGE_WEEK_WARRIOR: &str = "Week Warrior";
pub const BADGE_MONTHLY_MAVEN: &str = "Monthly Maven";
pub const BADGE_KINDNESS_STARTER: &str = "Kindness Starter";
pub const BADGE_KINDNESS_PRO: &str = "Kindness Pro";
