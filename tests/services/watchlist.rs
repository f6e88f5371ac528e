use dividash::services::watchlist::{AddResult, WatchlistStore};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "dividash-test-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[tokio::test]
async fn test_missing_file_starts_empty() {
    let path = temp_path("missing");
    let store = WatchlistStore::open(&path);
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_add_uppercases_and_persists() {
    let path = temp_path("add");
    let store = WatchlistStore::open(&path);

    assert_eq!(store.add("aapl").await.unwrap(), AddResult::Added);
    assert_eq!(store.add("msft ").await.unwrap(), AddResult::Added);
    assert_eq!(store.list().await, vec!["AAPL", "MSFT"]);

    // order survives a reopen
    let reopened = WatchlistStore::open(&path);
    assert_eq!(reopened.list().await, vec!["AAPL", "MSFT"]);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_duplicates_are_rejected() {
    let path = temp_path("dup");
    let store = WatchlistStore::open(&path);
    assert_eq!(store.add("AAPL").await.unwrap(), AddResult::Added);
    assert_eq!(store.add("aapl").await.unwrap(), AddResult::AlreadyPresent);
    assert_eq!(store.list().await.len(), 1);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_empty_input_is_rejected() {
    let path = temp_path("empty");
    let store = WatchlistStore::open(&path);
    assert_eq!(store.add("   ").await.unwrap(), AddResult::EmptyInput);
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_clear_empties_and_persists() {
    let path = temp_path("clear");
    let store = WatchlistStore::open(&path);
    store.add("AAPL").await.unwrap();
    store.clear().await.unwrap();
    assert!(store.list().await.is_empty());

    let reopened = WatchlistStore::open(&path);
    assert!(reopened.list().await.is_empty());
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_corrupt_file_starts_empty() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "{not json").unwrap();
    let store = WatchlistStore::open(&path);
    assert!(store.list().await.is_empty());
    let _ = std::fs::remove_file(&path);
}
