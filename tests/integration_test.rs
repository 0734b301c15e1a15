//! Integration tests for kindwall
//!
//! These tests verify end-to-end functionality over a file-backed
//! store: the note lifecycle, wall queries, reporting, seeding, and
//! persistence across service instances.

use kindwall::config::DEFAULT_WALL_LIMIT;
use kindwall::error::AppError;
use kindwall::models::Category;
use kindwall::services::NotesService;
use kindwall::storage::FileStore;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Helper to create a service over a file store rooted in `dir`.
fn create_service(dir: &Path) -> NotesService {
    let store = FileStore::new(dir.join("state"));
    store.initialize().unwrap();
    NotesService::new(Arc::new(store))
}

#[test]
fn test_note_lifecycle() {
    let temp = TempDir::new().unwrap();
    let service = create_service(temp.path());

    // Create note
    let note = service
        .create_note("You are doing great.".to_string(), Some(Category::Encouragement))
        .unwrap();
    assert!(!note.id.is_empty());
    assert!(!note.reported);

    // The only note is always the random pick
    let picked = service.random_note().unwrap().unwrap();
    assert_eq!(picked.id, note.id);

    // Reply to it
    let reply = service
        .create_reply(&note.id, "Thank you, I needed that.".to_string(), None)
        .unwrap()
        .unwrap();

    let wall = service.recent_notes(DEFAULT_WALL_LIMIT).unwrap();
    assert_eq!(wall.len(), 1);
    assert_eq!(wall[0].replies.len(), 1);
    assert_eq!(wall[0].replies[0].id, reply.id);

    // Report it — gone from every read path, but replies stay intact
    service.report_note(&note.id).unwrap();

    assert!(service.random_note().unwrap().is_none());
    assert!(service.recent_notes(DEFAULT_WALL_LIMIT).unwrap().is_empty());
    assert!(service
        .notes_by_category(Category::Encouragement)
        .unwrap()
        .is_empty());

    // Reported notes can still be replied to
    let late_reply = service
        .create_reply(&note.id, "Still here for you.".to_string(), None)
        .unwrap();
    assert!(late_reply.is_some());
}

#[test]
fn test_state_survives_reopen() {
    let temp = TempDir::new().unwrap();

    {
        let service = create_service(temp.path());
        service
            .create_note("Written before restart".to_string(), Some(Category::Hope))
            .unwrap();
    }

    // A fresh store/service over the same directory sees everything.
    let reopened = create_service(temp.path());

    let wall = reopened.recent_notes(DEFAULT_WALL_LIMIT).unwrap();
    assert_eq!(wall.len(), 1);
    assert_eq!(wall[0].content, "Written before restart");

    assert_eq!(reopened.streak().unwrap(), 1);
}

#[test]
fn test_wall_and_category_queries() {
    let temp = TempDir::new().unwrap();
    let service = create_service(temp.path());

    for i in 0..12 {
        let category = if i % 2 == 0 {
            Category::Motivation
        } else {
            Category::Mindfulness
        };
        service
            .create_note(format!("note {}", i), Some(category))
            .unwrap();
    }

    let wall = service.recent_notes(DEFAULT_WALL_LIMIT).unwrap();
    assert_eq!(wall.len(), DEFAULT_WALL_LIMIT);

    let motivation = service.notes_by_category(Category::Motivation).unwrap();
    assert_eq!(motivation.len(), 6);
    assert!(motivation
        .iter()
        .all(|note| note.category == Some(Category::Motivation)));
}

#[test]
fn test_validation_happens_before_any_write() {
    let temp = TempDir::new().unwrap();
    let service = create_service(temp.path());

    assert!(matches!(
        service.create_note(" ".to_string(), None),
        Err(AppError::EmptyContent)
    ));
    assert!(matches!(
        service.create_note("k".repeat(300), None),
        Err(AppError::ContentTooLong(300))
    ));
    assert!(matches!(
        service.create_note("I hate Mondays".to_string(), None),
        Err(AppError::ContentRejected)
    ));

    // Nothing was persisted, streak never started.
    assert!(service.random_note().unwrap().is_none());
    assert_eq!(service.streak().unwrap(), 0);
}

#[test]
fn test_seeded_wall_on_fresh_device() {
    let temp = TempDir::new().unwrap();
    let service = create_service(temp.path());

    service.seed_sample_notes().unwrap();

    let wall = service.recent_notes(DEFAULT_WALL_LIMIT).unwrap();
    assert_eq!(wall.len(), 5);

    // Seeds are readable through the random pick.
    assert!(service.random_note().unwrap().is_some());

    // Seeding again, or after a reopen, adds nothing.
    let reopened = create_service(temp.path());
    reopened.seed_sample_notes().unwrap();
    assert_eq!(reopened.recent_notes(DEFAULT_WALL_LIMIT).unwrap().len(), 5);
}

#[test]
fn test_corrupt_blob_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    let service = create_service(temp.path());

    service.create_note("soon to be lost".to_string(), None).unwrap();

    // Clobber the stored collection with garbage.
    std::fs::write(temp.path().join("state").join("human_notes.json"), "{oops").unwrap();

    assert!(service.random_note().unwrap().is_none());
    assert!(service.recent_notes(DEFAULT_WALL_LIMIT).unwrap().is_empty());

    // The store still works for new writes.
    service.create_note("starting over".to_string(), None).unwrap();
    assert_eq!(service.recent_notes(DEFAULT_WALL_LIMIT).unwrap().len(), 1);
}
