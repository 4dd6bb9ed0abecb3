//! Upload copy helpers shared by notes and books.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum FileError {
    /// The picked source file does not exist or is not a file.
    SourceMissing(PathBuf),
    /// Source path has no usable file name.
    NoFileName(PathBuf),
    /// Folder name is blank or escapes the books directory.
    InvalidFolderName(String),
    Io { path: PathBuf, source: std::io::Error },
    Store(StoreError),
}

impl Display for FileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceMissing(path) => write!(f, "file missing: {}", path.display()),
            Self::NoFileName(path) => write!(f, "path has no file name: {}", path.display()),
            Self::InvalidFolderName(name) => write!(f, "invalid folder name: `{name}`"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for FileError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// File name of `source`, after checking the file exists.
pub(crate) fn source_file_name(source: &Path) -> Result<String, FileError> {
    if !source.is_file() {
        return Err(FileError::SourceMissing(source.to_path_buf()));
    }
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FileError::NoFileName(source.to_path_buf()))
}

/// Copies `source` to `dest`, creating the destination directory.
pub(crate) fn copy_into(source: &Path, dest: &Path) -> Result<(), FileError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| FileError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::copy(source, dest).map_err(|err| FileError::Io {
        path: dest.to_path_buf(),
        source: err,
    })?;
    Ok(())
}

/// Case-insensitive `.pdf` check.
pub(crate) fn is_pdf(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::is_pdf;

    #[test]
    fn pdf_extension_ignores_case() {
        assert!(is_pdf("Optics.PDF"));
        assert!(is_pdf("notes.pdf"));
        assert!(!is_pdf("notes.pdf.txt"));
    }
}
