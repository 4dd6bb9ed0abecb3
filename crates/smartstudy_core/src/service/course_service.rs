//! Course seeding and chapter editing.
//!
//! # Responsibility
//! - Make a user's course rows cover every subject their stream implies.
//! - Append user-chosen chapters to an existing course.
//!
//! # Invariants
//! - At most one course row per (username, subject); seeding is idempotent.
//! - The courses table is rewritten only when something changed.

use crate::catalog;
use crate::model::course::CourseRow;
use crate::store::{RecordStore, StoreError};
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CourseError {
    /// Chapter name is blank after trim.
    EmptyChapter,
    /// No course row for (username, subject).
    CourseNotFound { username: String, subject: String },
    Store(StoreError),
}

impl Display for CourseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyChapter => write!(f, "chapter name must not be blank"),
            Self::CourseNotFound { username, subject } => {
                write!(f, "no course `{subject}` for user `{username}`")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CourseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CourseError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub struct CourseService<'store> {
    store: &'store RecordStore,
}

impl<'store> CourseService<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }

    /// Adds a course row for every stream subject the user lacks.
    ///
    /// Returns the number of rows added; zero means nothing was written.
    pub fn ensure_courses(
        &self,
        username: &str,
        class_name: &str,
        stream: &str,
    ) -> Result<usize, CourseError> {
        let mut rows = self.store.load::<CourseRow>()?;
        let mut existing: HashSet<(String, String)> = rows
            .iter()
            .map(|row| (row.username.clone(), row.subject.clone()))
            .collect();

        let mut added = 0;
        for subject in catalog::subjects_for(class_name, stream) {
            let key = (username.to_string(), (*subject).to_string());
            if existing.contains(&key) {
                continue;
            }
            rows.push(CourseRow {
                username: username.to_string(),
                class_name: class_name.to_string(),
                stream: stream.to_string(),
                subject: (*subject).to_string(),
                chapters: catalog::chapters_for(subject)
                    .iter()
                    .map(|chapter| (*chapter).to_string())
                    .collect(),
            });
            existing.insert(key);
            added += 1;
        }

        if added > 0 {
            self.store.save(&rows)?;
        }
        info!("event=ensure_courses module=course status=ok added={added}");
        Ok(added)
    }

    /// The user's course rows in table order.
    pub fn courses_for(&self, username: &str) -> Result<Vec<CourseRow>, CourseError> {
        Ok(self
            .store
            .load::<CourseRow>()?
            .into_iter()
            .filter(|row| row.username == username)
            .collect())
    }

    /// Appends one chapter to the user's course for `subject`.
    pub fn add_chapter(
        &self,
        username: &str,
        subject: &str,
        chapter: &str,
    ) -> Result<CourseRow, CourseError> {
        let chapter = chapter.trim();
        if chapter.is_empty() {
            return Err(CourseError::EmptyChapter);
        }

        let mut rows = self.store.load::<CourseRow>()?;
        let row = rows
            .iter_mut()
            .find(|row| row.is_for(username, subject))
            .ok_or_else(|| CourseError::CourseNotFound {
                username: username.to_string(),
                subject: subject.to_string(),
            })?;
        row.chapters.push(chapter.to_string());
        let updated = row.clone();

        self.store.save(&rows)?;
        info!(
            "event=add_chapter module=course status=ok chapters={}",
            updated.chapters.len()
        );
        Ok(updated)
    }
}
