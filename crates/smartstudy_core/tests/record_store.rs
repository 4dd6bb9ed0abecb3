use smartstudy_core::{
    AppPaths, CourseRow, NoteRecord, Preferences, ProgressEntry, RecordStore, ThemeMode,
    UserRecord,
};
use std::fs;

fn open_store(dir: &tempfile::TempDir) -> RecordStore {
    RecordStore::open(AppPaths::at(dir.path())).unwrap()
}

#[test]
fn open_creates_every_table_with_its_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let paths = store.paths();

    assert_eq!(
        fs::read_to_string(paths.users_csv()).unwrap(),
        "username,password,first_time,class,board,stream,goal\n"
    );
    assert_eq!(
        fs::read_to_string(paths.courses_csv()).unwrap(),
        "username,class,stream,subject,chapters\n"
    );
    assert_eq!(
        fs::read_to_string(paths.notes_csv()).unwrap(),
        "username,title,filepath,date\n"
    );
    assert_eq!(
        fs::read_to_string(paths.progress_csv()).unwrap(),
        "username,subject,chapter,done\n"
    );
    assert!(paths.books_dir().is_dir());
    assert!(paths.notes_dir().is_dir());
}

#[test]
fn deleted_table_is_recreated_on_next_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    fs::remove_file(store.paths().progress_csv()).unwrap();

    assert!(store.load::<ProgressEntry>().unwrap().is_empty());
    assert!(store.paths().progress_csv().exists());
}

#[test]
fn chapter_lists_round_trip_through_the_courses_table() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let rows = vec![
        CourseRow {
            username: "asha".into(),
            class_name: "11".into(),
            stream: "JEE (PCM)".into(),
            subject: "Physics".into(),
            chapters: vec!["A".into(), "B".into(), "C".into()],
        },
        CourseRow {
            username: "asha".into(),
            class_name: "11".into(),
            stream: "JEE (PCM)".into(),
            subject: "Economics".into(),
            chapters: Vec::new(),
        },
    ];
    store.save(&rows).unwrap();

    let text = fs::read_to_string(store.paths().courses_csv()).unwrap();
    assert!(text.contains("A||B||C"));

    let loaded = store.load::<CourseRow>().unwrap();
    assert_eq!(loaded, rows);
    assert!(loaded[1].chapters.is_empty());
}

#[test]
fn user_flags_are_written_as_yes_and_no() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let mut onboarded = UserRecord::registered("ravi", "pw");
    onboarded.needs_onboarding = false;
    store.append(&UserRecord::registered("asha", "pw")).unwrap();
    store.append(&onboarded).unwrap();

    let text = fs::read_to_string(store.paths().users_csv()).unwrap();
    assert!(text.contains("asha,pw,yes,,,,"));
    assert!(text.contains("ravi,pw,no,,,,"));

    let users = store.load::<UserRecord>().unwrap();
    assert!(users[0].needs_onboarding);
    assert!(!users[1].needs_onboarding);
}

#[test]
fn legacy_rows_with_missing_columns_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    fs::write(
        store.paths().notes_csv(),
        "username,title,filepath\nasha,Optics.pdf,/tmp/optics.pdf\n",
    )
    .unwrap();

    let notes = store.load::<NoteRecord>().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Optics.pdf");
    assert_eq!(notes[0].date, None);
}

#[test]
fn preferences_default_to_dark_and_persist_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    assert_eq!(store.preferences().unwrap().mode, ThemeMode::Dark);

    store
        .save_preferences(&Preferences {
            mode: ThemeMode::Light,
        })
        .unwrap();

    let text = fs::read_to_string(store.paths().theme_json()).unwrap();
    assert_eq!(text, "{\n  \"mode\": \"light\"\n}");
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["mode"], "light");
    assert_eq!(store.preferences().unwrap().mode, ThemeMode::Light);
}
