use std::path::{Path, PathBuf};

use quiz_core::model::{CategoryFilter, CategoryKey};
use storage::{JsonFileSource, QuestionSource, StorageError};

fn temp_bank(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write bank");
    path
}

#[test]
fn file_source_loads_bank_in_file_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_bank(
        dir.path(),
        "ordered.json",
        r#"{
            "categories": [
                { "key": "security", "label": "Security" },
                { "key": "network", "label": "Networking" }
            ],
            "questions": [
                { "id": 30, "category": "security", "prompt": "S1",
                  "options": ["a","b","c","d"], "answer": 0 },
                { "id": 10, "category": "network", "prompt": "N1",
                  "options": ["a","b","c","d"], "answer": 1 },
                { "id": 20, "category": "security", "prompt": "S2",
                  "options": ["a","b","c","d"], "answer": 2 }
            ]
        }"#,
    );

    let source = JsonFileSource::new(&path);
    let store = source.load().expect("load bank");

    let ids: Vec<u64> = store.questions().iter().map(|q| q.id().value()).collect();
    assert_eq!(ids, [30, 10, 20]);

    let security = CategoryFilter::Only(CategoryKey::new("security").unwrap());
    let prompts: Vec<String> = store
        .filtered(&security)
        .iter()
        .map(|q| q.prompt().to_string())
        .collect();
    assert_eq!(prompts, ["S1", "S2"]);
    assert_eq!(source.describe(), path.display().to_string());
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.json");
    let err = JsonFileSource::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }), "unexpected {err:?}");
}

#[test]
fn orphan_catalog_entry_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_bank(
        dir.path(),
        "orphan.json",
        r#"{
            "categories": [{ "key": "crypto", "label": "Cryptography" }],
            "questions": [
                { "id": 1, "category": "network", "prompt": "N",
                  "options": ["a","b","c","d"], "answer": 0 }
            ]
        }"#,
    );

    let err = JsonFileSource::new(path).load().unwrap_err();
    assert!(matches!(err, StorageError::Invalid(_)), "unexpected {err:?}");
    assert!(err.to_string().contains("crypto"));
}

#[test]
fn scratch_banks_are_removed_with_their_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path().to_path_buf();
    let path = temp_bank(
        &root,
        "single.json",
        r#"{ "questions": [
            { "id": 1, "category": "network", "prompt": "N",
              "options": ["a","b","c","d"], "answer": 0 }
        ] }"#,
    );
    assert_eq!(JsonFileSource::new(&path).load().expect("load bank").len(), 1);

    drop(dir);
    assert!(!path.exists());
    assert!(!root.exists());
}
