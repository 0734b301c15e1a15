//! Notes service
//!
//! High-level operations over the note collection: validation ahead of
//! any repository call, coordination with the stats tracker, and
//! first-run seeding.

use crate::config::MAX_NOTE_CONTENT_CHARS;
use crate::error::{AppError, Result};
use crate::models::{Category, Note, Reply};
use crate::moderation::moderate_content;
use crate::repository::NoteRepository;
use crate::services::StatsTracker;
use crate::storage::StateStore;
use std::sync::Arc;

/// Sample notes installed on first run so a fresh device has something
/// to read.
const SAMPLE_NOTES: &[(&str, Category)] = &[
    (
        "You're doing better than you think. Keep going!",
        Category::Encouragement,
    ),
    (
        "The world is better with you in it. Even when it doesn't feel like it.",
        Category::Support,
    ),
    (
        "Your struggles today are developing the strength you need for tomorrow.",
        Category::Motivation,
    ),
    ("Take a deep breath. This moment is yours.", Category::Mindfulness),
    (
        "Someone out there is inspired by you, even if you don't realize it.",
        Category::Kindness,
    ),
];

/// Service for managing notes
#[derive(Clone)]
pub struct NotesService {
    repo: NoteRepository,
    stats: StatsTracker,
}

impl NotesService {
    /// Build the service, the repository, and the tracker over one
    /// shared store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            repo: NoteRepository::new(store.clone()),
            stats: StatsTracker::new(store),
        }
    }

    /// Create a new note
    pub fn create_note(&self, content: String, category: Option<Category>) -> Result<Note> {
        validate_content(&content)?;

        let note = self.repo.create_note(content, category)?;
        self.stats.record_creation()?;

        tracing::info!("Note created successfully: {}", note.id);

        Ok(note)
    }

    /// Reply to an existing note.
    ///
    /// Returns `None` when no note has the given id; the collection and
    /// the stats record are left untouched in that case.
    pub fn create_reply(
        &self,
        parent_id: &str,
        content: String,
        category: Option<Category>,
    ) -> Result<Option<Reply>> {
        validate_content(&content)?;

        let Some(reply) = self.repo.create_reply(parent_id, content, category)? else {
            tracing::debug!("Reply target not found: {}", parent_id);
            return Ok(None);
        };
        self.stats.record_creation()?;

        tracing::info!("Reply created successfully: {}", reply.id);

        Ok(Some(reply))
    }

    /// Report a note, removing it from every read path.
    pub fn report_note(&self, id: &str) -> Result<()> {
        tracing::info!("Reporting note: {}", id);

        self.repo.report_note(id)
    }

    /// A uniformly random readable note.
    pub fn random_note(&self) -> Result<Option<Note>> {
        self.repo.pick_random()
    }

    /// A random readable note written on this month-day one year ago.
    pub fn note_from_past(&self) -> Result<Option<Note>> {
        self.repo.pick_from_past()
    }

    /// The newest readable notes for the wall view, newest first.
    pub fn recent_notes(&self, limit: usize) -> Result<Vec<Note>> {
        self.repo.recent(limit)
    }

    /// Readable notes in the given category.
    pub fn notes_by_category(&self, category: Category) -> Result<Vec<Note>> {
        self.repo.by_category(category)
    }

    /// Current consecutive-day streak.
    pub fn streak(&self) -> Result<u32> {
        self.stats.streak()
    }

    /// Earned badge names, in the order earned.
    pub fn badges(&self) -> Result<Vec<String>> {
        self.stats.badges()
    }

    /// Install the sample notes when the collection is empty, so the
    /// first "read a note" on a fresh device has something to return.
    /// No-op otherwise. Seeding does not count toward the streak.
    pub fn seed_sample_notes(&self) -> Result<()> {
        if !self.repo.load_all()?.is_empty() {
            return Ok(());
        }

        tracing::info!("Seeding sample notes");

        for (content, category) in SAMPLE_NOTES {
            self.repo.create_note((*content).to_string(), Some(*category))?;
        }

        Ok(())
    }
}

/// Reject content before it reaches the repository.
fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    let chars = content.chars().count();
    if chars > MAX_NOTE_CONTENT_CHARS {
        return Err(AppError::ContentTooLong(chars));
    }

    if !moderate_content(content) {
        return Err(AppError::ContentRejected);
    }

    Ok(())
}
