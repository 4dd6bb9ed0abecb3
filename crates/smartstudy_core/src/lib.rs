//! Core domain logic for SmartStudy.
//! This crate is the single source of truth for study-tracker rules.

pub mod app;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use app::{AppError, AppResult, LectureChoice, Screen, Session, SettingsForm, StudyApp};
pub use config::{AppConfig, AppPaths, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::course::CourseRow;
pub use model::note::NoteRecord;
pub use model::preferences::{Preferences, ThemeMode};
pub use model::progress::{ChapterKey, ProgressEntry};
pub use model::user::{StudyProfile, UserRecord};
pub use service::auth_service::{AuthError, AuthService};
pub use service::course_service::{CourseError, CourseService};
pub use service::files::FileError;
pub use service::lecture::{LaunchError, Launcher, SystemLauncher};
pub use service::library_service::{BookFile, LibraryEntry, LibraryService};
pub use service::note_service::NoteService;
pub use service::preference_service::PreferenceService;
pub use service::progress_service::{ChapterView, CourseProgressView, ProgressService};
pub use store::{RecordStore, StoreError, StoreResult, Table};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
