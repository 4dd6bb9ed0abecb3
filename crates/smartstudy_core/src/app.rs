//! Top-level controller and session context.
//!
//! # Responsibility
//! - Own the record store, the launcher and the signed-in session.
//! - Route screen actions to services with the session user filled in.
//! - Build screen view models from the session and a fresh store read.
//!
//! # Invariants
//! - At most one session exists; `logout` drops it entirely.
//! - User-scoped actions fail with `NoSession` when nobody is signed in.

use crate::catalog;
use crate::config::AppPaths;
use crate::model::course::CourseRow;
use crate::model::note::NoteRecord;
use crate::model::preferences::ThemeMode;
use crate::model::progress::ChapterKey;
use crate::model::user::{StudyProfile, UserRecord};
use crate::service::auth_service::{AuthError, AuthService};
use crate::service::course_service::{CourseError, CourseService};
use crate::service::files::FileError;
use crate::service::lecture::{self, LaunchError, Launcher, SystemLauncher};
use crate::service::library_service::{LibraryEntry, LibraryService};
use crate::service::note_service::NoteService;
use crate::service::preference_service::PreferenceService;
use crate::service::progress_service::{CourseProgressView, ProgressService};
use crate::store::{RecordStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum AppError {
    /// The action needs a signed-in user.
    NoSession,
    Auth(AuthError),
    Course(CourseError),
    File(FileError),
    Launch(LaunchError),
    Store(StoreError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSession => write!(f, "not signed in"),
            Self::Auth(err) => write!(f, "{err}"),
            Self::Course(err) => write!(f, "{err}"),
            Self::File(err) => write!(f, "{err}"),
            Self::Launch(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoSession => None,
            Self::Auth(err) => Some(err),
            Self::Course(err) => Some(err),
            Self::File(err) => Some(err),
            Self::Launch(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<CourseError> for AppError {
    fn from(value: CourseError) -> Self {
        Self::Course(value)
    }
}

impl From<FileError> for AppError {
    fn from(value: FileError) -> Self {
        Self::File(value)
    }
}

impl From<LaunchError> for AppError {
    fn from(value: LaunchError) -> Self {
        Self::Launch(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// The signed-in user and the account row read at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub record: UserRecord,
}

/// Where the shell should go after login or onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Onboarding,
    Home,
}

/// Settings form, pre-filled with defaults for blank profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub profile: StudyProfile,
    pub classes: &'static [&'static str],
    pub boards: &'static [&'static str],
    pub streams: Vec<&'static str>,
    pub goals: &'static [&'static str],
}

/// Subject with its chapter choices for the lecture picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureChoice {
    pub subject: String,
    pub chapters: Vec<String>,
}

pub struct StudyApp {
    store: RecordStore,
    launcher: Box<dyn Launcher>,
    session: Option<Session>,
}

impl StudyApp {
    /// Prepares the data root and opens the store with the OS launcher.
    pub fn open(paths: AppPaths) -> AppResult<Self> {
        Ok(Self::with_launcher(paths, Box::new(SystemLauncher))?)
    }

    pub fn with_launcher(paths: AppPaths, launcher: Box<dyn Launcher>) -> Result<Self, StoreError> {
        Ok(Self {
            store: RecordStore::open(paths)?,
            launcher,
            session: None,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn register(&self, username: &str, password: &str) -> AppResult<()> {
        AuthService::new(&self.store).register(username, password)?;
        Ok(())
    }

    /// Starts a session and reports the next screen.
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<Screen> {
        let record = AuthService::new(&self.store).login(username, password)?;
        self.session = Some(Session {
            username: record.username.clone(),
            record,
        });
        Ok(self.next_screen())
    }

    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            info!("event=logout module=app status=ok");
        }
    }

    pub fn next_screen(&self) -> Screen {
        match &self.session {
            None => Screen::Login,
            Some(session) if session.record.needs_onboarding => Screen::Onboarding,
            Some(_) => Screen::Home,
        }
    }

    pub fn complete_onboarding(&mut self, profile: &StudyProfile) -> AppResult<Screen> {
        let username = self.username()?.to_string();
        let record = AuthService::new(&self.store).complete_onboarding(&username, profile)?;
        self.refresh_session(record);
        Ok(self.next_screen())
    }

    pub fn settings_form(&self) -> AppResult<SettingsForm> {
        let record = &self.current_session()?.record;
        let or_default = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        Ok(SettingsForm {
            profile: StudyProfile {
                class_name: or_default(&record.class_name, catalog::DEFAULT_CLASS),
                board: or_default(&record.board, catalog::DEFAULT_BOARD),
                stream: or_default(&record.stream, catalog::default_stream()),
                goal: or_default(&record.goal, catalog::DEFAULT_GOAL),
            },
            classes: catalog::CLASS_OPTIONS,
            boards: catalog::BOARD_OPTIONS,
            streams: catalog::streams().collect(),
            goals: catalog::GOAL_OPTIONS,
        })
    }

    pub fn save_settings(&mut self, profile: &StudyProfile) -> AppResult<()> {
        let username = self.username()?.to_string();
        let record = AuthService::new(&self.store).update_profile(&username, profile)?;
        self.refresh_session(record);
        Ok(())
    }

    pub fn courses(&self) -> AppResult<Vec<CourseProgressView>> {
        let username = self.username()?;
        Ok(ProgressService::new(&self.store).course_overview(username)?)
    }

    /// Checkbox handler shared by every chapter row.
    pub fn set_chapter_done(&self, key: &ChapterKey, done: bool) -> AppResult<()> {
        let username = self.username()?;
        Ok(ProgressService::new(&self.store).set_progress(username, key, done)?)
    }

    pub fn add_chapter(&self, subject: &str, chapter: &str) -> AppResult<CourseRow> {
        let username = self.username()?;
        Ok(CourseService::new(&self.store).add_chapter(username, subject, chapter)?)
    }

    pub fn upload_note(&self, source: &Path) -> AppResult<NoteRecord> {
        let username = self.username()?;
        Ok(NoteService::new(&self.store).upload_note(username, source)?)
    }

    pub fn notes(&self, query: &str) -> AppResult<Vec<NoteRecord>> {
        let username = self.username()?;
        Ok(NoteService::new(&self.store).notes_for(username, query)?)
    }

    pub fn delete_note(&self, file_path: &Path) -> AppResult<usize> {
        let username = self.username()?;
        Ok(NoteService::new(&self.store).delete_note(username, file_path)?)
    }

    /// Opens a note or book in the OS viewer.
    pub fn open_file(&self, path: &Path) -> AppResult<()> {
        Ok(lecture::open_file(self.launcher.as_ref(), path)?)
    }

    /// Reveals the folder holding a stored file ("Save As" action).
    pub fn reveal_file(&self, path: &Path) -> AppResult<PathBuf> {
        let folder = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.store.paths().notes_dir());
        lecture::open_file(self.launcher.as_ref(), &folder)?;
        Ok(folder)
    }

    pub fn books(&self, query: &str) -> AppResult<Vec<LibraryEntry>> {
        Ok(self.library().list_books(query)?)
    }

    pub fn create_book_folder(&self, name: &str) -> AppResult<PathBuf> {
        Ok(self.library().create_folder(name)?)
    }

    pub fn upload_chapter_pdf(&self, source: &Path, folder: &str) -> AppResult<PathBuf> {
        Ok(self.library().upload_into_folder(source, folder)?)
    }

    pub fn upload_book(&self, source: &Path) -> AppResult<PathBuf> {
        Ok(self.library().upload_book(source)?)
    }

    /// Course subjects with chapters, for the lecture picker.
    pub fn lecture_choices(&self) -> AppResult<Vec<LectureChoice>> {
        let username = self.username()?;
        Ok(CourseService::new(&self.store)
            .courses_for(username)?
            .into_iter()
            .map(|course| LectureChoice {
                subject: course.subject,
                chapters: course.chapters,
            })
            .collect())
    }

    pub fn search_videos(&self, query: &str) -> AppResult<String> {
        Ok(lecture::open_search(self.launcher.as_ref(), query)?)
    }

    /// Opens the lecture search using the class saved in the session.
    pub fn open_lecture(&self, key: &ChapterKey) -> AppResult<String> {
        let session = self.current_session()?;
        Ok(lecture::open_lecture(
            self.launcher.as_ref(),
            &session.record.class_name,
            &key.subject,
            &key.chapter,
        )?)
    }

    pub fn theme(&self) -> AppResult<ThemeMode> {
        Ok(PreferenceService::new(&self.store).theme()?)
    }

    pub fn toggle_theme(&self) -> AppResult<ThemeMode> {
        Ok(PreferenceService::new(&self.store).toggle_theme()?)
    }

    fn library(&self) -> LibraryService<'_> {
        LibraryService::new(self.store.paths())
    }

    fn current_session(&self) -> AppResult<&Session> {
        self.session.as_ref().ok_or(AppError::NoSession)
    }

    fn username(&self) -> AppResult<&str> {
        Ok(self.current_session()?.username.as_str())
    }

    fn refresh_session(&mut self, record: UserRecord) {
        if let Some(session) = self.session.as_mut() {
            session.record = record;
        }
    }
}
