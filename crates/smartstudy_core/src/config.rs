//! Data-root resolution and on-disk layout.
//!
//! # Responsibility
//! - Resolve the per-user application data root.
//! - Own every file/directory path used by the record store and uploads.
//!
//! # Invariants
//! - `SMARTSTUDY_HOME` wins over the OS local data directory.
//! - `AppPaths::ensure` is idempotent and never truncates existing tables.

use crate::logging::default_log_level;
use std::env;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data root.
pub const HOME_ENV: &str = "SMARTSTUDY_HOME";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "SMARTSTUDY_LOG";

const APP_DIR_NAME: &str = "SmartStudy";

#[derive(Debug)]
pub enum ConfigError {
    /// Neither `SMARTSTUDY_HOME` nor an OS local data directory is available.
    DataDirUnavailable,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataDirUnavailable => write!(
                f,
                "cannot resolve a local data directory; set {HOME_ENV}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Every path the application reads or writes, derived from one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Uses `root` as the data root without touching the environment.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the data root from `SMARTSTUDY_HOME` or the OS local data dir.
    pub fn resolve() -> Result<Self, ConfigError> {
        if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
            return Ok(Self::at(home));
        }
        dirs::data_local_dir()
            .map(|dir| Self::at(dir.join(APP_DIR_NAME)))
            .ok_or(ConfigError::DataDirUnavailable)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.root.join("uploads")
    }

    /// Book PDFs, flat or grouped into user-named folders.
    pub fn books_dir(&self) -> PathBuf {
        self.uploads_dir().join("books")
    }

    /// Uploaded note PDFs, always flat.
    pub fn notes_dir(&self) -> PathBuf {
        self.uploads_dir().join("notes")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn users_csv(&self) -> PathBuf {
        self.data_dir().join("users.csv")
    }

    pub fn courses_csv(&self) -> PathBuf {
        self.data_dir().join("courses.csv")
    }

    pub fn notes_csv(&self) -> PathBuf {
        self.data_dir().join("notes.csv")
    }

    pub fn progress_csv(&self) -> PathBuf {
        self.data_dir().join("progress.csv")
    }

    pub fn theme_json(&self) -> PathBuf {
        self.data_dir().join("theme.json")
    }

    /// Creates the directory layout under the root.
    ///
    /// Table files are created lazily by the record store on first access.
    pub fn ensure(&self) -> std::io::Result<()> {
        for dir in [
            self.root.clone(),
            self.data_dir(),
            self.uploads_dir(),
            self.books_dir(),
            self.notes_dir(),
        ] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// Process-level settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: AppPaths,
    pub log_level: String,
}

impl AppConfig {
    /// Reads `SMARTSTUDY_HOME` and `SMARTSTUDY_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let paths = AppPaths::resolve()?;
        let log_level = env::var(LOG_LEVEL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        Ok(Self { paths, log_level })
    }
}
