use smartstudy_core::{
    AppPaths, ChapterKey, CourseService, ProgressEntry, ProgressService, RecordStore,
};

fn open_store(dir: &tempfile::TempDir) -> RecordStore {
    RecordStore::open(AppPaths::at(dir.path())).unwrap()
}

#[test]
fn set_then_read_and_flip_without_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let progress = ProgressService::new(&store);
    let key = ChapterKey::new("Physics", "Kinematics");

    assert!(!progress.is_done("asha", &key).unwrap());

    progress.set_progress("asha", &key, true).unwrap();
    assert!(progress.is_done("asha", &key).unwrap());

    progress.set_progress("asha", &key, false).unwrap();
    assert!(!progress.is_done("asha", &key).unwrap());

    let entries = store.load::<ProgressEntry>().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].done);
}

#[test]
fn entries_are_keyed_by_user_subject_and_chapter() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let progress = ProgressService::new(&store);

    progress
        .set_progress("asha", &ChapterKey::new("Physics", "Thermodynamics"), true)
        .unwrap();

    assert!(!progress
        .is_done("ravi", &ChapterKey::new("Physics", "Thermodynamics"))
        .unwrap());
    assert!(!progress
        .is_done("asha", &ChapterKey::new("Chemistry", "Thermodynamics"))
        .unwrap());
}

#[test]
fn percent_uses_catalog_chapter_count() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let progress = ProgressService::new(&store);

    progress
        .set_progress("asha", &ChapterKey::new("Mathematics", "Number System"), true)
        .unwrap();
    progress
        .set_progress("asha", &ChapterKey::new("Mathematics", "Mensuration"), true)
        .unwrap();
    progress
        .set_progress("asha", &ChapterKey::new("Mathematics", "Algebra Basics"), false)
        .unwrap();

    assert_eq!(progress.percent("asha", "Mathematics").unwrap(), 40);
    assert_eq!(progress.percent("ravi", "Mathematics").unwrap(), 0);
}

#[test]
fn overview_lists_course_chapters_with_flags() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let courses = CourseService::new(&store);
    courses.ensure_courses("asha", "9", "Class 9").unwrap();
    courses.add_chapter("asha", "English", "Poetry").unwrap();

    let progress = ProgressService::new(&store);
    progress
        .set_progress("asha", &ChapterKey::new("English", "Grammar"), true)
        .unwrap();
    progress
        .set_progress("asha", &ChapterKey::new("English", "Poetry"), true)
        .unwrap();

    let overview = progress.course_overview("asha").unwrap();
    assert_eq!(overview.len(), 4);

    let english = overview
        .iter()
        .find(|course| course.subject == "English")
        .unwrap();
    // Two done over three catalog chapters.
    assert_eq!(english.percent, 66);
    assert_eq!(english.chapters.len(), 4);
    assert_eq!(english.chapters[3].key, ChapterKey::new("English", "Poetry"));
    assert!(english.chapters[3].done);
    assert!(english.chapters[2].done);
    assert!(!english.chapters[0].done);
}
