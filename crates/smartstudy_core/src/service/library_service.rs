//! Book PDFs under `uploads/books`.
//!
//! Books live either at the top level or one level down inside a
//! user-named folder. Only `.pdf` files are listed.

use crate::config::AppPaths;
use crate::service::files::{copy_into, is_pdf, source_file_name, FileError};
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// One visible entry of the books directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEntry {
    /// A top-level PDF.
    Book { name: String, path: PathBuf },
    /// A folder and the PDFs directly inside it, sorted by name.
    Folder { name: String, books: Vec<BookFile> },
}

impl LibraryEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Book { name, .. } | Self::Folder { name, .. } => name.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    pub name: String,
    pub path: PathBuf,
}

pub struct LibraryService<'paths> {
    paths: &'paths AppPaths,
}

impl<'paths> LibraryService<'paths> {
    pub fn new(paths: &'paths AppPaths) -> Self {
        Self { paths }
    }

    /// Entries sorted by name and filtered by case-insensitive substring
    /// on the entry name. A missing books directory lists as empty.
    pub fn list_books(&self, query: &str) -> Result<Vec<LibraryEntry>, FileError> {
        let root = self.paths.books_dir();
        let needle = query.trim().to_lowercase();
        let mut entries = Vec::new();
        for (name, path) in sorted_children(&root)? {
            if !needle.is_empty() && !name.to_lowercase().contains(&needle) {
                continue;
            }
            if path.is_dir() {
                let books = sorted_children(&path)?
                    .into_iter()
                    .filter(|(name, path)| path.is_file() && is_pdf(name))
                    .map(|(name, path)| BookFile { name, path })
                    .collect();
                entries.push(LibraryEntry::Folder { name, books });
            } else if is_pdf(&name) {
                entries.push(LibraryEntry::Book { name, path });
            }
        }
        Ok(entries)
    }

    /// Creates `books/{name}`; existing folders are left alone.
    pub fn create_folder(&self, name: &str) -> Result<PathBuf, FileError> {
        let folder = self.folder_path(name)?.ok_or_else(|| {
            FileError::InvalidFolderName(name.to_string())
        })?;
        fs::create_dir_all(&folder).map_err(|source| FileError::Io {
            path: folder.clone(),
            source,
        })?;
        info!("event=create_folder module=library status=ok");
        Ok(folder)
    }

    /// Copies a chapter PDF into `books/{folder}`, or the books root when
    /// `folder` is blank.
    pub fn upload_into_folder(&self, source: &Path, folder: &str) -> Result<PathBuf, FileError> {
        let dir = self
            .folder_path(folder)?
            .unwrap_or_else(|| self.paths.books_dir());
        self.copy_book(source, &dir)
    }

    /// Copies a whole-book PDF into the books root.
    pub fn upload_book(&self, source: &Path) -> Result<PathBuf, FileError> {
        self.copy_book(source, &self.paths.books_dir())
    }

    fn copy_book(&self, source: &Path, dir: &Path) -> Result<PathBuf, FileError> {
        let name = source_file_name(source)?;
        let dest = dir.join(name);
        copy_into(source, &dest)?;
        info!("event=upload_book module=library status=ok");
        Ok(dest)
    }

    /// `None` for a blank name; rejects names that leave the books dir.
    fn folder_path(&self, name: &str) -> Result<Option<PathBuf>, FileError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let plain = Path::new(name)
            .components()
            .all(|part| matches!(part, Component::Normal(_)));
        if !plain {
            return Err(FileError::InvalidFolderName(name.to_string()));
        }
        Ok(Some(self.paths.books_dir().join(name)))
    }
}

fn sorted_children(dir: &Path) -> Result<Vec<(String, PathBuf)>, FileError> {
    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(FileError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
    };
    let mut children = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|source| FileError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        children.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
    }
    children.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(children)
}
