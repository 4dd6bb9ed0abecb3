//! Chapter completion flags.

use super::fields::yes_no;
use serde::{Deserialize, Serialize};

/// One row of `progress.csv`.
///
/// At most one entry exists per (`username`, `subject`, `chapter`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressEntry {
    pub username: String,
    pub subject: String,
    pub chapter: String,
    #[serde(with = "yes_no")]
    pub done: bool,
}

impl ProgressEntry {
    pub fn matches(&self, username: &str, key: &ChapterKey) -> bool {
        self.username == username && self.subject == key.subject && self.chapter == key.chapter
    }
}

/// Row identifier handed to per-chapter handlers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChapterKey {
    pub subject: String,
    pub chapter: String,
}

impl ChapterKey {
    pub fn new(subject: impl Into<String>, chapter: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            chapter: chapter.into(),
        }
    }
}
