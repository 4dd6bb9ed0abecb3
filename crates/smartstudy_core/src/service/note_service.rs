//! Uploaded note documents.
//!
//! # Responsibility
//! - Copy picked files into the notes upload directory and record them.
//! - List, search and delete a user's notes.
//!
//! # Invariants
//! - Stored copies are named `{username}_{YYYYMMDDHHMMSS}_{file name}`,
//!   with path separators in the username replaced by `_`.
//! - Deleting removes the row even when the backing file is already gone.

use crate::model::note::NoteRecord;
use crate::service::files::{copy_into, source_file_name, FileError};
use crate::store::{RecordStore, StoreResult};
use chrono::Local;
use log::{info, warn};
use std::fs;
use std::path::Path;

pub struct NoteService<'store> {
    store: &'store RecordStore,
}

impl<'store> NoteService<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }

    /// Copies `source` into the notes directory and appends a note row.
    ///
    /// The title is the source file name; the date is today.
    pub fn upload_note(&self, username: &str, source: &Path) -> Result<NoteRecord, FileError> {
        let title = source_file_name(source)?;
        let now = Local::now();
        let stored_name = format!(
            "{}_{}_{title}",
            file_name_safe(username),
            now.format("%Y%m%d%H%M%S")
        );
        let dest = self.store.paths().notes_dir().join(stored_name);
        copy_into(source, &dest)?;

        let note = NoteRecord {
            username: username.to_string(),
            title,
            file_path: dest,
            date: Some(now.date_naive()),
        };
        self.store.append(&note)?;
        info!("event=upload_note module=notes status=ok");
        Ok(note)
    }

    /// The user's notes, newest first, filtered by title substring.
    ///
    /// Matching is case-insensitive; a blank query keeps every note.
    pub fn notes_for(&self, username: &str, query: &str) -> StoreResult<Vec<NoteRecord>> {
        let needle = query.trim().to_lowercase();
        let mut notes: Vec<NoteRecord> = self
            .store
            .load::<NoteRecord>()?
            .into_iter()
            .filter(|note| note.username == username)
            .filter(|note| needle.is_empty() || note.title.to_lowercase().contains(&needle))
            .collect();
        notes.reverse();
        Ok(notes)
    }

    /// Drops every row for (username, file path), then removes the file.
    ///
    /// Returns how many rows were removed. File removal failures are
    /// logged and otherwise ignored.
    pub fn delete_note(&self, username: &str, file_path: &Path) -> StoreResult<usize> {
        let notes = self.store.load::<NoteRecord>()?;
        let before = notes.len();
        let kept: Vec<NoteRecord> = notes
            .into_iter()
            .filter(|note| !note.is_for(username, file_path))
            .collect();
        let removed = before - kept.len();
        self.store.save(&kept)?;

        if file_path.exists() {
            if let Err(err) = fs::remove_file(file_path) {
                warn!("event=delete_note module=notes status=partial error={err}");
            }
        }
        info!("event=delete_note module=notes status=ok removed={removed}");
        Ok(removed)
    }
}

fn file_name_safe(username: &str) -> String {
    username.replace(['/', '\\'], "_")
}
