use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use versenote::store::fs_backend::{DEFAULT_FILE_NAME, FsBackend};
use versenote::store::{LoadReport, NoteStore, PutOutcome};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn save_then_delete_round_trips_through_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);

    let (mut store, report) = NoteStore::load(FsBackend::new(&path));
    assert_eq!(report, LoadReport::NotFound(path.clone()));

    store.put("John 3:16", "God's love").unwrap();
    assert_eq!(
        read_json(&path),
        json!({"John 3:16": {"verse": "John 3:16", "interpretation": "God's love"}})
    );

    store.delete("John 3:16").unwrap();
    assert_eq!(read_json(&path), json!({}));
}

#[test]
fn reload_sees_what_was_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);

    {
        let (mut store, _) = NoteStore::load(FsBackend::new(&path));
        store.put("Psalm 23:1", "The Lord is my shepherd").unwrap();
        store.put("Genesis 1:1", "creation").unwrap();
        assert_eq!(store.put("Genesis 1:1", "creation").unwrap(), PutOutcome::Unchanged);
    }

    let (store, report) = NoteStore::load(FsBackend::new(&path));
    assert_eq!(report, LoadReport::Loaded { notes: 2 });
    assert_eq!(store.list(), vec!["Genesis 1:1", "Psalm 23:1"]);
    assert_eq!(store.get("Psalm 23:1").unwrap().text, "The Lord is my shepherd");
}

#[test]
fn reload_after_mixed_edits_matches_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);

    let (mut store, _) = NoteStore::load(FsBackend::new(&path));
    store.put("John 3:16", "God's \"love\" ❤").unwrap();
    store.put("Psalm 23:1", "shepherd").unwrap();
    store.delete("John 3:16").unwrap();
    store.put("Genesis 1:1", "").unwrap();
    let in_memory = store.document().clone();

    let (reloaded, report) = NoteStore::load(FsBackend::new(&path));
    assert_eq!(report, LoadReport::Loaded { notes: 2 });
    assert_eq!(reloaded.document(), &in_memory);
    assert_eq!(reloaded.get("Genesis 1:1").unwrap().text, "");
}

#[test]
fn missing_parent_directory_is_created_on_first_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join(DEFAULT_FILE_NAME);

    let (mut store, _) = NoteStore::load(FsBackend::new(&path));
    store.put("Romans 8:28", "all things").unwrap();
    assert!(path.exists());
}

#[test]
fn corrupt_file_loads_empty_and_is_replaced_on_next_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    fs::write(&path, "{ not json").unwrap();

    let (mut store, report) = NoteStore::load(FsBackend::new(&path));
    assert!(matches!(report, LoadReport::Corrupt { .. }));
    assert!(report.problem().unwrap().contains("Starting empty"));
    assert!(store.is_empty());

    store.put("John 1:1", "the Word").unwrap();
    assert_eq!(
        read_json(&path),
        json!({"John 1:1": {"verse": "John 1:1", "interpretation": "the Word"}})
    );
}

#[test]
fn record_without_verse_field_takes_its_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    fs::write(&path, r#"{"Mark 1:1": {"interpretation": "the beginning"}}"#).unwrap();

    let (store, _) = NoteStore::load(FsBackend::new(&path));
    let note = store.get("Mark 1:1").unwrap();
    assert_eq!(note.reference, "Mark 1:1");
    assert_eq!(note.text, "the beginning");
}

#[test]
fn writes_leave_no_temp_files_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);

    let (mut store, _) = NoteStore::load(FsBackend::new(&path));
    for i in 1..=5 {
        store.put(&format!("Psalm {}:1", i), "praise").unwrap();
    }

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
