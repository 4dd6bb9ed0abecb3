//! Uploaded note metadata.

use super::fields::day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of `notes.csv`.
///
/// `(username, filepath)` identifies a note for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteRecord {
    pub username: String,
    /// Original file name of the uploaded document.
    pub title: String,
    /// Absolute path of the stored copy.
    #[serde(rename = "filepath")]
    pub file_path: PathBuf,
    /// Upload day, persisted as `YYYY-MM-DD`; blank or unreadable cells
    /// read as `None`.
    #[serde(with = "day")]
    pub date: Option<NaiveDate>,
}

impl NoteRecord {
    pub fn is_for(&self, username: &str, file_path: &Path) -> bool {
        self.username == username && self.file_path == file_path
    }
}
