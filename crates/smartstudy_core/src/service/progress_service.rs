//! Chapter completion tracking.
//!
//! # Responsibility
//! - Set and read per-chapter done flags.
//! - Compute percent complete and build the courses-screen view model.
//!
//! # Invariants
//! - At most one entry per (username, subject, chapter); toggling updates
//!   in place.
//! - Percent uses the catalog chapter count as denominator, so chapters a
//!   user added can push the raw ratio past 100; the result is capped.

use crate::catalog;
use crate::model::course::CourseRow;
use crate::model::progress::{ChapterKey, ProgressEntry};
use crate::store::{RecordStore, StoreResult};
use log::debug;

/// One chapter line on a course card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterView {
    pub key: ChapterKey,
    pub done: bool,
}

/// One course card: subject, percent and chapter checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProgressView {
    pub subject: String,
    pub percent: u32,
    pub chapters: Vec<ChapterView>,
}

pub struct ProgressService<'store> {
    store: &'store RecordStore,
}

impl<'store> ProgressService<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }

    /// Records `done` for one chapter, creating the entry when absent.
    pub fn set_progress(&self, username: &str, key: &ChapterKey, done: bool) -> StoreResult<()> {
        let mut entries = self.store.load::<ProgressEntry>()?;
        match entries.iter_mut().find(|entry| entry.matches(username, key)) {
            Some(entry) => entry.done = done,
            None => entries.push(ProgressEntry {
                username: username.to_string(),
                subject: key.subject.clone(),
                chapter: key.chapter.clone(),
                done,
            }),
        }
        self.store.save(&entries)?;
        debug!("event=set_progress module=progress status=ok done={done}");
        Ok(())
    }

    /// `false` when no entry exists.
    pub fn is_done(&self, username: &str, key: &ChapterKey) -> StoreResult<bool> {
        let entries = self.store.load::<ProgressEntry>()?;
        Ok(lookup_done(&entries, username, key))
    }

    /// Whole-number percent of catalog chapters marked done.
    pub fn percent(&self, username: &str, subject: &str) -> StoreResult<u32> {
        let entries = self.store.load::<ProgressEntry>()?;
        Ok(percent_from(&entries, username, subject))
    }

    /// Course cards for every course row the user has.
    pub fn course_overview(&self, username: &str) -> StoreResult<Vec<CourseProgressView>> {
        let entries = self.store.load::<ProgressEntry>()?;
        let courses = self.store.load::<CourseRow>()?;
        Ok(courses
            .into_iter()
            .filter(|course| course.username == username)
            .map(|course| build_view(&entries, username, course))
            .collect())
    }
}

fn build_view(entries: &[ProgressEntry], username: &str, course: CourseRow) -> CourseProgressView {
    let percent = percent_from(entries, username, &course.subject);
    let chapters = course
        .chapters
        .into_iter()
        .map(|chapter| {
            let key = ChapterKey::new(course.subject.clone(), chapter);
            let done = lookup_done(entries, username, &key);
            ChapterView { key, done }
        })
        .collect();
    CourseProgressView {
        subject: course.subject,
        percent,
        chapters,
    }
}

fn lookup_done(entries: &[ProgressEntry], username: &str, key: &ChapterKey) -> bool {
    entries
        .iter()
        .find(|entry| entry.matches(username, key))
        .map(|entry| entry.done)
        .unwrap_or(false)
}

fn percent_from(entries: &[ProgressEntry], username: &str, subject: &str) -> u32 {
    let total = catalog::chapters_for(subject).len();
    if total == 0 {
        return 0;
    }
    let done = entries
        .iter()
        .filter(|entry| entry.username == username && entry.subject == subject && entry.done)
        .count();
    let percent = done * 100 / total;
    percent.min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::percent_from;
    use crate::model::progress::ProgressEntry;

    fn entry(subject: &str, chapter: &str, done: bool) -> ProgressEntry {
        ProgressEntry {
            username: "asha".into(),
            subject: subject.into(),
            chapter: chapter.into(),
            done,
        }
    }

    #[test]
    fn percent_truncates_toward_zero() {
        // Physics has 13 catalog chapters.
        let entries = vec![entry("Physics", "Kinematics", true)];
        assert_eq!(percent_from(&entries, "asha", "Physics"), 7);
    }

    #[test]
    fn percent_ignores_other_users_and_undone_entries() {
        let mut other = entry("English", "Grammar", true);
        other.username = "ravi".into();
        let entries = vec![other, entry("English", "Writing Skills", false)];
        assert_eq!(percent_from(&entries, "asha", "English"), 0);
    }

    #[test]
    fn user_added_chapters_cannot_exceed_full_completion() {
        let entries = vec![
            entry("Economics", "Chapter 1", true),
            entry("Economics", "Chapter 2", true),
            entry("Economics", "Demand", true),
        ];
        assert_eq!(percent_from(&entries, "asha", "Economics"), 100);
    }
}
