//! Flat-file record store.
//!
//! # Responsibility
//! - Load, save and append whole CSV tables for users, courses, notes and
//!   progress.
//! - Read and write the JSON preference file.
//!
//! # Invariants
//! - A missing or empty table file is created with its header and reads
//!   as empty; it is never a hard error.
//! - `save` replaces the whole table; there is no cross-table transaction.
//! - Every I/O failure surfaces as `StoreError` with the offending path.

use crate::config::AppPaths;
use crate::model::course::CourseRow;
use crate::model::note::NoteRecord;
use crate::model::preferences::Preferences;
use crate::model::progress::ProgressEntry;
use crate::model::user::UserRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod csv_table;
mod json_file;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: std::io::Error },
    Csv { path: PathBuf, source: csv::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Csv { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A record type persisted as one CSV table.
pub trait Table: Serialize + DeserializeOwned {
    /// Short table name used in log events.
    const NAME: &'static str;
    /// Header row, in column order.
    const HEADERS: &'static [&'static str];

    fn file(paths: &AppPaths) -> PathBuf;
}

impl Table for UserRecord {
    const NAME: &'static str = "users";
    const HEADERS: &'static [&'static str] = &[
        "username",
        "password",
        "first_time",
        "class",
        "board",
        "stream",
        "goal",
    ];

    fn file(paths: &AppPaths) -> PathBuf {
        paths.users_csv()
    }
}

impl Table for CourseRow {
    const NAME: &'static str = "courses";
    const HEADERS: &'static [&'static str] = &["username", "class", "stream", "subject", "chapters"];

    fn file(paths: &AppPaths) -> PathBuf {
        paths.courses_csv()
    }
}

impl Table for NoteRecord {
    const NAME: &'static str = "notes";
    const HEADERS: &'static [&'static str] = &["username", "title", "filepath", "date"];

    fn file(paths: &AppPaths) -> PathBuf {
        paths.notes_csv()
    }
}

impl Table for ProgressEntry {
    const NAME: &'static str = "progress";
    const HEADERS: &'static [&'static str] = &["username", "subject", "chapter", "done"];

    fn file(paths: &AppPaths) -> PathBuf {
        paths.progress_csv()
    }
}

/// Entry point for every table read and write.
#[derive(Debug, Clone)]
pub struct RecordStore {
    paths: AppPaths,
}

impl RecordStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    /// Creates the directory layout and every table file that is missing.
    pub fn open(paths: AppPaths) -> StoreResult<Self> {
        paths
            .ensure()
            .map_err(|err| StoreError::io(paths.root(), err))?;
        let store = Self::new(paths);
        store.ensure::<UserRecord>()?;
        store.ensure::<CourseRow>()?;
        store.ensure::<NoteRecord>()?;
        store.ensure::<ProgressEntry>()?;
        Ok(store)
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Writes the header when the table file is missing or empty.
    pub fn ensure<T: Table>(&self) -> StoreResult<()> {
        csv_table::ensure_header(&T::file(&self.paths), T::HEADERS)
    }

    /// All rows of table `T`, in file order.
    pub fn load<T: Table>(&self) -> StoreResult<Vec<T>> {
        csv_table::load(&T::file(&self.paths), T::NAME, T::HEADERS)
    }

    /// Replaces table `T` with `rows`.
    pub fn save<T: Table>(&self, rows: &[T]) -> StoreResult<()> {
        csv_table::save(&T::file(&self.paths), T::NAME, T::HEADERS, rows)
    }

    /// Adds one row to table `T`, writing the header first if needed.
    pub fn append<T: Table>(&self, row: &T) -> StoreResult<()> {
        csv_table::append(&T::file(&self.paths), T::NAME, T::HEADERS, row)
    }

    /// Preferences, or the defaults when `theme.json` does not exist.
    pub fn preferences(&self) -> StoreResult<Preferences> {
        json_file::read_or_default(&self.paths.theme_json())
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> StoreResult<()> {
        json_file::write_pretty(&self.paths.theme_json(), preferences)
    }
}
