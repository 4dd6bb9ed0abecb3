//! Per-user course row.
//!
//! # Invariants
//! - At most one row per (`username`, `subject`).
//! - `chapters` is ordered and append-only; duplicates are allowed.

use super::fields::chapter_list;
use serde::{Deserialize, Serialize};

/// One row of `courses.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseRow {
    pub username: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub stream: String,
    pub subject: String,
    #[serde(with = "chapter_list")]
    pub chapters: Vec<String>,
}

impl CourseRow {
    pub fn is_for(&self, username: &str, subject: &str) -> bool {
        self.username == username && self.subject == subject
    }
}
