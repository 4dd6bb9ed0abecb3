//! Lecture search URLs and the OS launcher.
//!
//! # Responsibility
//! - Build video-search URLs from free text or a chosen chapter.
//! - Hand URLs and local files to the OS default handler.
//!
//! # Invariants
//! - Query text is only escaped by turning each whitespace char into `+`.
//! - Launching is fire-and-forget; no response is awaited.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::Command;

const SEARCH_BASE_URL: &str = "https://www.youtube.com/results?search_query=";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("valid ws regex"));

#[derive(Debug)]
pub enum LaunchError {
    /// Free-text search with nothing to search for.
    EmptyQuery,
    /// Chapter lecture requested without subject or chapter.
    MissingSelection,
    /// Local file to open does not exist.
    PathMissing(PathBuf),
    Io(std::io::Error),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "type something to search"),
            Self::MissingSelection => write!(f, "select subject and chapter"),
            Self::PathMissing(path) => write!(f, "file missing: {}", path.display()),
            Self::Io(err) => write!(f, "cannot launch handler: {err}"),
        }
    }
}

impl Error for LaunchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Opens a URL or local path in whatever the OS considers the default app.
pub trait Launcher {
    fn open(&self, target: &str) -> Result<(), LaunchError>;
}

/// Hands targets to the platform opener through the `open` crate.
///
/// The target always travels as a single argument, so `&` in a search
/// query never reaches a shell as a separator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Candidate opener commands for `target`, tried in order.
    pub fn commands(&self, target: &str) -> Vec<Command> {
        open::commands(target)
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, target: &str) -> Result<(), LaunchError> {
        open::that_detached(target).map_err(LaunchError::Io)
    }
}

/// Search URL for arbitrary text.
pub fn search_url(query: &str) -> String {
    format!(
        "{SEARCH_BASE_URL}{}",
        WHITESPACE_RE.replace_all(query, "+")
    )
}

/// Search text for one chapter's lecture.
pub fn lecture_query(class_name: &str, subject: &str, chapter: &str) -> String {
    format!("Class {class_name} {subject} {chapter} video lecture")
}

/// Opens a free-text search; blank input is rejected.
pub fn open_search(launcher: &dyn Launcher, query: &str) -> Result<String, LaunchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(LaunchError::EmptyQuery);
    }
    let url = search_url(query);
    launcher.open(&url)?;
    Ok(url)
}

/// Opens the lecture search for a chosen subject and chapter.
pub fn open_lecture(
    launcher: &dyn Launcher,
    class_name: &str,
    subject: &str,
    chapter: &str,
) -> Result<String, LaunchError> {
    if subject.is_empty() || chapter.is_empty() {
        return Err(LaunchError::MissingSelection);
    }
    let url = search_url(&lecture_query(class_name, subject, chapter));
    launcher.open(&url)?;
    Ok(url)
}

/// Opens a stored note or book with the OS viewer.
pub fn open_file(launcher: &dyn Launcher, path: &Path) -> Result<(), LaunchError> {
    if !path.exists() {
        return Err(LaunchError::PathMissing(path.to_path_buf()));
    }
    launcher.open(&path.to_string_lossy())
}
