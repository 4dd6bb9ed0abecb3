//! Study-tracker use-case services.
//!
//! # Responsibility
//! - Turn user actions into record-store reads and whole-table writes.
//! - Keep validation and not-found handling out of the presentation layer.
//!
//! # Invariants
//! - Every mutation re-reads its table before rewriting it.

pub mod auth_service;
pub mod course_service;
pub mod files;
pub mod lecture;
pub mod library_service;
pub mod note_service;
mod password;
pub mod preference_service;
pub mod progress_service;
