//! kindwall library
//!
//! Storage and domain core for an anonymous uplifting-note wall: a
//! device-local note collection with replies, soft-delete reporting,
//! random/recent/category queries, and a daily-streak badge tracker.
//! Presentation (rendering, input collection, export) lives outside
//! this crate.

pub mod config;
pub mod error;
pub mod models;
pub mod moderation;
pub mod repository;
pub mod services;
pub mod storage;
