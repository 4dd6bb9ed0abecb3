//! CSV table I/O with a fixed header row.

use super::{StoreError, StoreResult};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

pub(super) fn ensure_header(path: &Path, headers: &[&str]) -> StoreResult<()> {
    if has_content(path) {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
    }
    let file = File::create(path).map_err(|err| StoreError::io(path, err))?;
    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(headers)
        .map_err(|err| csv_error(path, err))?;
    writer.flush().map_err(|err| StoreError::io(path, err))
}

pub(super) fn load<T: DeserializeOwned>(
    path: &Path,
    table: &str,
    headers: &[&str],
) -> StoreResult<Vec<T>> {
    ensure_header(path, headers)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| csv_error(path, err))?;

    let file_headers = reader.headers().map_err(|err| csv_error(path, err))?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let mut record = record.map_err(|err| csv_error(path, err))?;
        // Short rows read their missing trailing cells as blanks.
        while record.len() < file_headers.len() {
            record.push_field("");
        }
        match record.deserialize::<T>(Some(&file_headers)) {
            Ok(row) => rows.push(row),
            Err(err) => {
                error!(
                    "event=table_load module=store status=error table={table} error={err}"
                );
                return Err(csv_error(path, err));
            }
        }
    }
    debug!(
        "event=table_load module=store status=ok table={table} rows={}",
        rows.len()
    );
    Ok(rows)
}

/// Writes to a sibling temp file first, then renames it over `path`.
pub(super) fn save<T: Serialize>(
    path: &Path,
    table: &str,
    headers: &[&str],
    rows: &[T],
) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
    }
    let staging = staging_path(path);
    let file = File::create(&staging).map_err(|err| StoreError::io(&staging, err))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(headers)
        .map_err(|err| csv_error(path, err))?;
    for row in rows {
        writer.serialize(row).map_err(|err| csv_error(path, err))?;
    }
    writer.flush().map_err(|err| StoreError::io(&staging, err))?;
    drop(writer);

    fs::rename(&staging, path).map_err(|err| StoreError::io(path, err))?;
    debug!(
        "event=table_save module=store status=ok table={table} rows={}",
        rows.len()
    );
    Ok(())
}

pub(super) fn append<T: Serialize>(
    path: &Path,
    table: &str,
    headers: &[&str],
    row: &T,
) -> StoreResult<()> {
    ensure_header(path, headers)?;
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|err| StoreError::io(path, err))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(row).map_err(|err| csv_error(path, err))?;
    writer.flush().map_err(|err| StoreError::io(path, err))?;
    debug!("event=table_append module=store status=ok table={table}");
    Ok(())
}

fn has_content(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.len() > 0)
        .unwrap_or(false)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn csv_error(path: &Path, source: csv::Error) -> StoreError {
    StoreError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
