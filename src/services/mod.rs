//! Services module
//!
//! Business logic services that coordinate validation, the repository,
//! and streak bookkeeping.

pub mod notes;
pub mod stats;

pub use notes::NotesService;
pub use stats::StatsTracker;
