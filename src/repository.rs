//! Repository layer for the note collection
//!
//! Every operation is a full read-modify-write of the collection blob:
//! load the whole array, mutate the in-memory copy, write the whole
//! array back. The collection is small enough that nothing smarter is
//! warranted.

use crate::config::NOTES_STORE_KEY;
use crate::error::Result;
use crate::models::{Category, Note, Reply};
use crate::storage::StateStore;
use chrono::{DateTime, Datelike, Months, Utc};
use rand::seq::SliceRandom;
use std::sync::Arc;
use uuid::Uuid;

/// Repository for the persisted note collection.
#[derive(Clone)]
pub struct NoteRepository {
    store: Arc<dyn StateStore>,
}

impl NoteRepository {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Load the full collection, reported notes included.
    ///
    /// Malformed stored data is discarded and treated as an empty
    /// collection rather than surfaced as an error.
    pub fn load_all(&self) -> Result<Vec<Note>> {
        let Some(raw) = self.store.get(NOTES_STORE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(notes) => Ok(notes),
            Err(err) => {
                tracing::warn!("Discarding malformed note collection: {}", err);
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string(notes)?;
        self.store.set(NOTES_STORE_KEY, &raw)
    }

    /// Create a new top-level note and append it to the collection.
    pub fn create_note(&self, content: String, category: Option<Category>) -> Result<Note> {
        let mut notes = self.load_all()?;

        let note = Note {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: Utc::now(),
            reported: false,
            category,
            replies: Vec::new(),
        };

        notes.push(note.clone());
        self.save_all(&notes)?;

        tracing::debug!("Created note: {}", note.id);
        Ok(note)
    }

    /// Append a reply to the note with `parent_id`.
    ///
    /// The parent is looked up among all notes, reported ones included.
    /// Returns `None` without writing when no note matches.
    pub fn create_reply(
        &self,
        parent_id: &str,
        content: String,
        category: Option<Category>,
    ) -> Result<Option<Reply>> {
        let mut notes = self.load_all()?;

        let Some(parent) = notes.iter_mut().find(|note| note.id == parent_id) else {
            return Ok(None);
        };

        let reply = Reply {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: Utc::now(),
            reported: false,
            category,
        };

        parent.replies.push(reply.clone());
        self.save_all(&notes)?;

        tracing::debug!("Created reply: {} on note: {}", reply.id, parent_id);
        Ok(Some(reply))
    }

    /// Soft-delete a note. Unknown ids are accepted silently; reporting
    /// is idempotent.
    pub fn report_note(&self, id: &str) -> Result<()> {
        let mut notes = self.load_all()?;

        if let Some(note) = notes.iter_mut().find(|note| note.id == id) {
            note.reported = true;
            tracing::debug!("Reported note: {}", id);
        }

        self.save_all(&notes)
    }

    /// Pick a uniformly random non-reported note, or `None` when none
    /// are readable.
    pub fn pick_random(&self) -> Result<Option<Note>> {
        let notes = self.visible_notes()?;
        Ok(notes.choose(&mut rand::thread_rng()).cloned())
    }

    /// Pick a uniformly random non-reported note written on this
    /// month-day one calendar year ago.
    pub fn pick_from_past(&self) -> Result<Option<Note>> {
        self.pick_from_past_at(Utc::now())
    }

    /// Variant of [`pick_from_past`](Self::pick_from_past) taking the
    /// reference instant explicitly.
    ///
    /// Calendar subtraction, not "365 days ago": one year before
    /// Feb 29 clamps to Feb 28 per chrono's month arithmetic.
    pub fn pick_from_past_at(&self, now: DateTime<Utc>) -> Result<Option<Note>> {
        let Some(one_year_ago) = now.checked_sub_months(Months::new(12)) else {
            return Ok(None);
        };
        let target = (one_year_ago.month(), one_year_ago.day());

        let candidates: Vec<Note> = self
            .visible_notes()?
            .into_iter()
            .filter(|note| (note.created_at.month(), note.created_at.day()) == target)
            .collect();

        Ok(candidates.choose(&mut rand::thread_rng()).cloned())
    }

    /// The newest non-reported notes, newest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Result<Vec<Note>> {
        let mut notes = self.visible_notes()?;
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes.truncate(limit);
        Ok(notes)
    }

    /// Non-reported notes in the given category, in collection order.
    pub fn by_category(&self, category: Category) -> Result<Vec<Note>> {
        Ok(self
            .visible_notes()?
            .into_iter()
            .filter(|note| note.category == Some(category))
            .collect())
    }

    fn visible_notes(&self) -> Result<Vec<Note>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|note| !note.reported)
            .collect())
    }
}
