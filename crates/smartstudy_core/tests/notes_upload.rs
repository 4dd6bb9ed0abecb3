use chrono::Local;
use smartstudy_core::{AppPaths, FileError, NoteRecord, NoteService, RecordStore};
use std::fs;
use std::path::PathBuf;

fn open_store(dir: &tempfile::TempDir) -> RecordStore {
    RecordStore::open(AppPaths::at(dir.path().join("root"))).unwrap()
}

fn write_source(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"%PDF-1.4 test").unwrap();
    path
}

#[test]
fn upload_copies_file_and_records_note() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let source = write_source(&dir, "Optics.pdf");

    let note = NoteService::new(&store).upload_note("asha", &source).unwrap();

    assert_eq!(note.title, "Optics.pdf");
    assert_eq!(note.date, Some(Local::now().date_naive()));
    assert!(note.file_path.starts_with(store.paths().notes_dir()));
    let stored_name = note.file_path.file_name().unwrap().to_string_lossy();
    assert!(stored_name.starts_with("asha_"));
    assert!(stored_name.ends_with("_Optics.pdf"));
    assert_eq!(fs::read(&note.file_path).unwrap(), b"%PDF-1.4 test");
    assert!(source.exists());

    assert_eq!(store.load::<NoteRecord>().unwrap(), vec![note]);
}

#[test]
fn upload_of_missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let err = NoteService::new(&store)
        .upload_note("asha", &dir.path().join("gone.pdf"))
        .unwrap_err();
    assert!(matches!(err, FileError::SourceMissing(_)));
    assert!(store.load::<NoteRecord>().unwrap().is_empty());
}

#[test]
fn listing_is_newest_first_and_filtered_by_title() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let notes = NoteService::new(&store);
    notes
        .upload_note("asha", &write_source(&dir, "Optics.pdf"))
        .unwrap();
    notes
        .upload_note("asha", &write_source(&dir, "Waves.pdf"))
        .unwrap();
    notes
        .upload_note("ravi", &write_source(&dir, "Optics Summary.pdf"))
        .unwrap();

    let titles: Vec<String> = notes
        .notes_for("asha", "")
        .unwrap()
        .into_iter()
        .map(|note| note.title)
        .collect();
    assert_eq!(titles, ["Waves.pdf", "Optics.pdf"]);

    let filtered = notes.notes_for("asha", "OPTICS").unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Optics.pdf");
}

#[test]
fn delete_removes_row_and_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let notes = NoteService::new(&store);
    let kept = notes
        .upload_note("asha", &write_source(&dir, "Keep.pdf"))
        .unwrap();
    let doomed = notes
        .upload_note("asha", &write_source(&dir, "Drop.pdf"))
        .unwrap();

    assert_eq!(notes.delete_note("asha", &doomed.file_path).unwrap(), 1);

    assert!(!doomed.file_path.exists());
    assert!(kept.file_path.exists());
    assert_eq!(store.load::<NoteRecord>().unwrap(), vec![kept]);
}

#[test]
fn delete_with_missing_file_still_removes_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let notes = NoteService::new(&store);
    let note = notes
        .upload_note("asha", &write_source(&dir, "Lost.pdf"))
        .unwrap();
    fs::remove_file(&note.file_path).unwrap();

    assert_eq!(notes.delete_note("asha", &note.file_path).unwrap(), 1);
    assert!(store.load::<NoteRecord>().unwrap().is_empty());
}

#[test]
fn delete_only_touches_the_owners_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let notes = NoteService::new(&store);
    let note = notes
        .upload_note("asha", &write_source(&dir, "Mine.pdf"))
        .unwrap();

    assert_eq!(notes.delete_note("ravi", &note.file_path).unwrap(), 0);
    assert_eq!(store.load::<NoteRecord>().unwrap().len(), 1);
}

#[test]
fn hand_edited_bad_date_does_not_hide_other_notes() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let notes = NoteService::new(&store);
    let uploaded = notes
        .upload_note("asha", &write_source(&dir, "Optics.pdf"))
        .unwrap();
    let csv = store.paths().notes_csv();
    let mut text = fs::read_to_string(&csv).unwrap();
    text.push_str("asha,Old.pdf,/tmp/old.pdf,last tuesday\n");
    fs::write(&csv, text).unwrap();

    let listed = notes.notes_for("asha", "").unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Old.pdf");
    assert_eq!(listed[0].date, None);
    assert_eq!(listed[1], uploaded);

    assert_eq!(notes.delete_note("asha", &uploaded.file_path).unwrap(), 1);
    assert_eq!(notes.notes_for("asha", "").unwrap().len(), 1);
}

#[test]
fn username_with_separators_stays_inside_notes_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let note = NoteService::new(&store)
        .upload_note("../x", &write_source(&dir, "Optics.pdf"))
        .unwrap();

    assert_eq!(note.file_path.parent(), Some(store.paths().notes_dir().as_path()));
    assert_eq!(note.username, "../x");
    let stored_name = note.file_path.file_name().unwrap().to_string_lossy();
    assert!(stored_name.starts_with(".._x_"));
}
