//! Disk persistence tests for the signature store.
//!
//! Each test opens a file-backed store in its own temp directory, drops it,
//! and reopens the same file.

use guestbook_service::test_support::store;
use guestbook_service::{NewSignature, SignaturePatch};
use tempfile::TempDir;

/// Database file is created on open, including missing parent directories.
#[test]
fn database_file_created_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("guestbook.redb");

    let _store = store::file_store(&db_path).expect("Failed to open store");

    assert!(
        db_path.exists(),
        "Database file should be created at {}",
        db_path.display()
    );
}

/// Signatures survive closing and reopening the database.
#[test]
fn signatures_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("guestbook.redb");

    let created = {
        let store = store::file_store(&db_path).unwrap();
        store::insert(&store, "Ada", Some("hi"))
    };

    let reopened = store::file_store(&db_path).unwrap();
    assert_eq!(reopened.get_by_id(&created.id).unwrap(), Some(created));
}

/// Updates and deletes are durable.
#[test]
fn mutations_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("guestbook.redb");

    let (updated_id, deleted_id) = {
        let store = store::file_store(&db_path).unwrap();
        let updated = store::insert(&store, "Ada", Some("hi"));
        let deleted = store::insert(&store, "Grace", None);

        let patch = SignaturePatch {
            message: Some("x".to_string()),
            ..Default::default()
        };
        store.update_by_id(&updated.id, patch).unwrap();
        store.delete_by_id(&deleted.id).unwrap();
        (updated.id, deleted.id)
    };

    let reopened = store::file_store(&db_path).unwrap();
    let updated = reopened.get_by_id(&updated_id).unwrap().unwrap();
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.message.as_deref(), Some("x"));
    assert!(reopened.get_by_id(&deleted_id).unwrap().is_none());
    assert_eq!(reopened.get_all().unwrap().len(), 1);
}

/// Reopening keeps issuing fresh ids alongside existing ones.
#[test]
fn create_after_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("guestbook.redb");

    let first = {
        let store = store::file_store(&db_path).unwrap();
        store::insert(&store, "Ada", None)
    };

    let reopened = store::file_store(&db_path).unwrap();
    let second = reopened
        .create(NewSignature::new("Grace", Some("hello".to_string())))
        .unwrap();

    assert_ne!(first.id, second.id);
    let all = reopened.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));
}
