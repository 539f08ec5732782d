use std::fs;
use std::path::Path;

use login_form::error::{AuthError, FormError, StorageError};
use login_form::shell::run_session;
use login_form::storage::format::LINE_ENDING;
use login_form::{CredentialStore, FormConfig};
use tempfile::tempdir;

// Helper to open and load a store over a users file
fn open_store(path: &Path) -> CredentialStore {
    let mut store = CredentialStore::open(path);
    store.load().unwrap();
    store
}

// Helper to drive a scripted form session
async fn run_script(store: &mut CredentialStore, script: &str) -> String {
    let mut out = Vec::new();
    run_session(script.as_bytes(), &mut out, store, &FormConfig::default())
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_loaded_lines_validate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.txt");
    fs::write(&path, "alice:secret123\ncarol:Pa55\n").unwrap();

    let store = open_store(&path);
    assert!(store.validate("alice", "secret123"));
    assert!(store.validate("carol", "Pa55"));
    assert!(!store.validate("alice", "wrong"));
    assert!(!store.validate("carol", "pa55"));
    assert!(!store.validate("bob", "x"));
}

#[test]
fn test_malformed_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.txt");
    fs::write(&path, "nouserdelimiter\nalice:secret123\na:b:c\n\nbob:pw\n").unwrap();

    let mut store = CredentialStore::open(&path);
    let report = store.load().unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 3);
    assert!(store.validate("alice", "secret123"));
    assert!(store.validate("bob", "pw"));
}

#[test]
fn test_register_persists_across_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.txt");

    let mut store = open_store(&path);
    store.register("bob", "pw").unwrap();
    assert!(store.validate("bob", "pw"));
    assert!(matches!(
        store.register("bob", "pw2"),
        Err(FormError::Auth(AuthError::DuplicateUsername(_)))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("bob:pw{LINE_ENDING}"));

    let restarted = open_store(&path);
    assert!(restarted.validate("bob", "pw"));
    assert!(!restarted.validate("bob", "pw2"));
}

#[test]
fn test_unwritable_file_leaves_store_unchanged() {
    let dir = tempdir().unwrap();
    // A directory cannot be opened for appending
    let mut store = CredentialStore::open(dir.path());

    let result = store.register("bob", "pw");
    assert!(matches!(
        result,
        Err(FormError::Storage(StorageError::FileUnwritable { .. }))
    ));
    assert!(!store.validate("bob", "pw"));
    assert!(!store.contains("bob"));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_unreadable_file_is_reported() {
    let dir = tempdir().unwrap();
    let mut store = CredentialStore::open(dir.path());

    assert!(matches!(
        store.load(),
        Err(StorageError::FileUnreadable { .. })
    ));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_form_session_against_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.txt");
    fs::write(&path, "alice:secret123\n").unwrap();
    let mut store = open_store(&path);

    let out = run_script(
        &mut store,
        "user alice\npass wrong\nlogin\npass secret123\nlogin\n\
         user dave\npass pw\nsignup\nsignup\nuser\nsignup\nexit\n",
    )
    .await;

    assert!(out.contains("Incorrect username/password"));
    assert!(out.contains("Welcome, alice!"));
    assert!(out.contains("User registered successfully!"));
    assert!(out.contains("Username already exists"));
    assert!(out.contains("Username or password cannot be empty"));

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, format!("alice:secret123\ndave:pw{LINE_ENDING}"));
}

#[tokio::test]
async fn test_form_session_image_preview() {
    let dir = tempdir().unwrap();
    let image = dir.path().join("avatar.gif");
    fs::write(&image, b"GIF89a\x01\x00\x01\x00").unwrap();
    let mut store = CredentialStore::open(dir.path().join("users.txt"));

    let script = format!(
        "upload {}\nupload {}\nupload\nexit\n",
        image.display(),
        dir.path().join("missing.png").display()
    );
    let out = run_script(&mut store, &script).await;

    assert!(out.contains("avatar.gif (GIF, 10 bytes)"));
    assert!(out.contains("Image file not found"));
}
