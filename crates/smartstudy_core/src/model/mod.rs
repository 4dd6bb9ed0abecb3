//! Flat study-tracker records.
//!
//! # Responsibility
//! - Define one serde shape per persisted table row.
//! - Keep on-disk column names and value encodings next to the types.
//!
//! # Invariants
//! - Records carry natural keys only; there are no surrogate IDs.
//! - Field order matches the table header order.

pub mod course;
pub(crate) mod fields;
pub mod note;
pub mod preferences;
pub mod progress;
pub mod user;
