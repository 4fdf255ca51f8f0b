//! Integration tests for jouster-store
//!
//! These tests verify insert, search and listing against real SQLite databases.

use jouster_domain::{NewRecord, RecordStore};
use jouster_store::SqliteStore;

fn record(title: Option<&str>, topics: &[&str], keywords: &[&str]) -> NewRecord {
    NewRecord {
        title: title.map(str::to_string),
        topics: topics.iter().map(|s| s.to_string()).collect(),
        sentiment: Some("neutral".to_string()),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::open_in_memory();
    assert!(store.is_ok(), "Store should initialize successfully");
    assert_eq!(store.unwrap().count().unwrap(), 0);
}

#[test]
fn test_insert_and_list_round_trip() {
    let store = SqliteStore::open_in_memory().unwrap();

    let inserted = store
        .insert(record(Some("Title"), &["a", "b", "c"], &["x", "y"]))
        .unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], inserted);
    assert_eq!(all[0].topics, vec!["a", "b", "c"]);
    assert_eq!(all[0].keywords, vec!["x", "y"]);
    assert_eq!(all[0].title.as_deref(), Some("Title"));
}

#[test]
fn test_values_with_commas_round_trip() {
    let store = SqliteStore::open_in_memory().unwrap();

    store
        .insert(record(
            None,
            &["war, peace", "", "law & order"],
            &["one,two", "three"],
        ))
        .unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all[0].topics, vec!["war, peace", "", "law & order"]);
    assert_eq!(all[0].keywords, vec!["one,two", "three"]);
    assert_eq!(all[0].title, None);
}

#[test]
fn test_empty_keywords() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(record(None, &["a", "b", "c"], &[])).unwrap();

    let all = store.list_all().unwrap();
    assert!(all[0].keywords.is_empty());
}

#[test]
fn test_ids_are_monotonic() {
    let store = SqliteStore::open_in_memory().unwrap();

    let ids: Vec<_> = (0..5)
        .map(|i| {
            store
                .insert(record(None, &[&format!("t{}", i)], &[]))
                .unwrap()
                .id
        })
        .collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    let listed: Vec<_> = store.list_all().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(listed, ids);
    assert_eq!(store.count().unwrap(), 5);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let store = SqliteStore::open_in_memory().unwrap();

    let tech = store
        .insert(record(None, &["Artificial Intelligence", "Ethics", "Policy"], &[]))
        .unwrap();
    store
        .insert(record(None, &["cooking", "travel", "food"], &[]))
        .unwrap();

    let found = store.find_by_topic_substring("intel").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, tech.id);

    let found = store.find_by_topic_substring("ETHIC").unwrap();
    assert_eq!(found.len(), 1);

    assert!(store.find_by_topic_substring("gardening").unwrap().is_empty());
}

#[test]
fn test_search_matches_any_topic_once() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .insert(record(None, &["data science", "big data", "databases"], &[]))
        .unwrap();

    let found = store.find_by_topic_substring("data").unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn test_search_never_spans_topics() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(record(None, &["ai", "ethics", "policy"], &[])).unwrap();

    assert!(store.find_by_topic_substring("ai,eth").unwrap().is_empty());
    assert!(store.find_by_topic_substring("ai, ethics").unwrap().is_empty());
    assert_eq!(store.find_by_topic_substring("eth").unwrap().len(), 1);
}

#[test]
fn test_search_treats_wildcards_literally() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(record(None, &["plain", "text", "here"], &[])).unwrap();
    let percent = store
        .insert(record(None, &["100% growth", "x", "y"], &[]))
        .unwrap();

    let found = store.find_by_topic_substring("%").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, percent.id);

    assert!(store.find_by_topic_substring("_").unwrap().is_empty());
}

#[test]
fn test_search_does_not_trim_needle() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(record(None, &["climate", "b", "c"], &[])).unwrap();

    assert!(store.find_by_topic_substring(" climate").unwrap().is_empty());
}

#[test]
fn test_search_folds_non_ascii() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(record(None, &["ÉCONOMIE", "b", "c"], &[])).unwrap();

    assert_eq!(store.find_by_topic_substring("économie").unwrap().len(), 1);
}

#[test]
fn test_records_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jouster.db");

    let first_id = {
        let store = SqliteStore::open(&path).unwrap();
        store
            .insert(record(Some("Persisted"), &["a", "b", "c"], &["k"]))
            .unwrap()
            .id
    };

    let store = SqliteStore::from_database_url(&format!("sqlite://{}", path.display())).unwrap();
    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, first_id);
    assert_eq!(all[0].title.as_deref(), Some("Persisted"));

    let second = store.insert(record(None, &["d"], &[])).unwrap();
    assert!(second.id > first_id);
}
