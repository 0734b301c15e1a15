//! User stats tracking
//!
//! Derives the daily streak and badge set from note-creation events.
//! State is a single persisted record stored alongside the collection.

use crate::config::{
    BADGE_KINDNESS_PRO, BADGE_KINDNESS_STARTER, BADGE_MONTHLY_MAVEN, BADGE_WEEK_WARRIOR,
    MONTH_STREAK_MILESTONE, PRO_TOTAL_MILESTONE, STARTER_TOTAL_MILESTONE, STATS_STORE_KEY,
    WEEK_STREAK_MILESTONE,
};
use crate::error::Result;
use crate::models::UserStats;
use crate::storage::StateStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Tracker for the per-device streak and badge record.
#[derive(Clone)]
pub struct StatsTracker {
    store: Arc<dyn StateStore>,
}

impl StatsTracker {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Load the stats record, treating missing or malformed data as a
    /// fresh zero-valued record.
    pub fn load(&self) -> Result<UserStats> {
        let Some(raw) = self.store.get(STATS_STORE_KEY)? else {
            return Ok(UserStats::default());
        };

        match serde_json::from_str(&raw) {
            Ok(stats) => Ok(stats),
            Err(err) => {
                tracing::warn!("Discarding malformed stats record: {}", err);
                Ok(UserStats::default())
            }
        }
    }

    fn save(&self, stats: &UserStats) -> Result<()> {
        let raw = serde_json::to_string(stats)?;
        self.store.set(STATS_STORE_KEY, &raw)
    }

    /// Record a qualifying creation event at the current time.
    pub fn record_creation(&self) -> Result<()> {
        self.record_creation_at(Utc::now())
    }

    /// Record a creation event at an explicit instant.
    ///
    /// Only the first event of a calendar day changes state: the streak
    /// increments when the previous qualifying day was exactly
    /// yesterday and resets to 1 otherwise. Milestone badges are
    /// appended on one-shot equality with the just-updated counters, so
    /// a streak that falls and climbs back can earn a badge twice.
    pub fn record_creation_at(&self, now: DateTime<Utc>) -> Result<()> {
        let mut stats = self.load()?;
        let today = now.date_naive();

        if stats.last_note_date.map(|last| last.date_naive()) == Some(today) {
            // The day already counted; later notes today change nothing.
            return Ok(());
        }

        let continued = match (stats.last_note_date, today.pred_opt()) {
            (Some(last), Some(yesterday)) => last.date_naive() == yesterday,
            _ => false,
        };
        stats.streak = if continued { stats.streak + 1 } else { 1 };
        stats.last_note_date = Some(now);
        stats.total_notes += 1;

        if stats.streak == WEEK_STREAK_MILESTONE {
            stats.badges.push(BADGE_WEEK_WARRIOR.to_string());
        }
        if stats.streak == MONTH_STREAK_MILESTONE {
            stats.badges.push(BADGE_MONTHLY_MAVEN.to_string());
        }
        if stats.total_notes == STARTER_TOTAL_MILESTONE {
            stats.badges.push(BADGE_KINDNESS_STARTER.to_string());
        }
        if stats.total_notes == PRO_TOTAL_MILESTONE {
            stats.badges.push(BADGE_KINDNESS_PRO.to_string());
        }

        tracing::debug!(
            "Updated streak: {} (total notes: {})",
            stats.streak,
            stats.total_notes
        );

        self.save(&stats)
    }

    /// Current consecutive-day streak.
    pub fn streak(&self) -> Result<u32> {
        Ok(self.load()?.streak)
    }

    /// Earned badge names, in the order earned.
    pub fn badges(&self) -> Result<Vec<String>> {
        Ok(self.load()?.badges)
    }
}
