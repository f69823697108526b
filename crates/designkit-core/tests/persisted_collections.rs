//! Persisted collection tests over a real redb file
//!
//! Covers hydration, corruption recovery and write notifications across
//! independent handles on the same store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use designkit_core::{
    ContentCardData, ContentFavorites, DesignKit, KitConfig, PreferenceStore, ProjectFavorites,
    ProjectId, RecentlyVisited, StoreChange, PROJECT_FAVORITES_KEY, RECENTLY_VISITED_KEY,
};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn create_test_store() -> (PreferenceStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = PreferenceStore::open(temp_dir.path().join("prefs.redb")).unwrap();
    (store, temp_dir)
}

fn card(id: &str) -> ContentCardData {
    ContentCardData::new(id, format!("Title {}", id))
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_corrupt_favorites_recover_with_seed_on_remount() {
    let (store, _temp) = create_test_store();
    let favorites = ProjectFavorites::new(store.clone());
    favorites.toggle(ProjectId::new("custom")).unwrap();

    store.set(PROJECT_FAVORITES_KEY, "{definitely not json").unwrap();

    // Remount: a new handle hydrates from the corrupted store.
    let remounted = ProjectFavorites::new(store.clone());
    let ids = remounted.load();
    assert_eq!(ids, vec![ProjectId::new("getting-started"), ProjectId::new("design-tokens")]);
    assert_eq!(
        store.get(PROJECT_FAVORITES_KEY).unwrap().as_deref(),
        Some(r#"["getting-started","design-tokens"]"#)
    );
}

#[test]
fn test_second_handle_is_notified_of_writes() {
    let (store, _temp) = create_test_store();
    let writer = ProjectFavorites::new(store.clone());
    let reader = ProjectFavorites::new(store.clone());

    let seen: Arc<Mutex<Vec<ProjectId>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_c = seen.clone();
    let reader_c = reader.clone();
    let _sub = store.subscribe_key(PROJECT_FAVORITES_KEY, move |_| {
        *seen_c.lock().unwrap() = reader_c.load();
    });

    writer.add(ProjectId::new("new-one")).unwrap();
    assert!(seen.lock().unwrap().contains(&ProjectId::new("new-one")));
}

#[test]
fn test_content_favorites_persist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.redb");

    {
        let favorites = ContentFavorites::new(PreferenceStore::open(&path).unwrap());
        favorites.toggle(&card("a")).unwrap();
        favorites.toggle(&card("b")).unwrap();
    }

    let favorites = ContentFavorites::new(PreferenceStore::open(&path).unwrap());
    let ids: Vec<_> = favorites.load().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

// ============================================================================
// Recently Visited
// ============================================================================

#[test]
fn test_recent_add_notifies_once_per_visit() {
    let (store, _temp) = create_test_store();
    let recent = RecentlyVisited::new(store.clone());
    let count = Arc::new(AtomicUsize::new(0));
    let count_c = count.clone();
    let _sub = store.subscribe_key(RECENTLY_VISITED_KEY, move |event| {
        assert_eq!(event.change, StoreChange::Set);
        count_c.fetch_add(1, Ordering::SeqCst);
    });

    recent.add(card("x"));
    recent.add(card("y"));
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_recent_same_id_twice_keeps_one_entry() {
    let (store, _temp) = create_test_store();
    let recent = RecentlyVisited::new(store);
    let first = Utc::now() - Duration::minutes(5);
    let second = Utc::now();

    recent.add_at(card("dup"), first);
    recent.add_at(card("other"), first + Duration::seconds(1));
    recent.add_at(card("dup"), second);

    let items = recent.contents(None).to_vec();
    assert_eq!(items.iter().filter(|i| i.id() == "dup").count(), 1);
    assert_eq!(items[0].id(), "dup");
    assert_eq!(items[0].visited_at, second);
}

#[test]
fn test_recent_stored_format_uses_iso_timestamps() {
    let (store, _temp) = create_test_store();
    let recent = RecentlyVisited::new(store.clone());
    let at = chrono::DateTime::parse_from_rfc3339("2026-05-04T08:30:00Z")
        .unwrap()
        .with_timezone(&Utc);
    recent.add_at(card("iso"), at);

    let raw = store.get(RECENTLY_VISITED_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["id"], "iso");
    assert_eq!(json[0]["visitedAt"], "2026-05-04T08:30:00Z");
}

#[test]
fn test_kit_uses_configured_capacity() {
    let mut config = KitConfig::default();
    config.recent_capacity = 3;
    let kit = DesignKit::ephemeral(config);
    for id in ["a", "b", "c", "d"] {
        kit.recently_visited().add(card(id));
    }
    let ids: Vec<_> = kit
        .recently_visited()
        .contents(None)
        .iter()
        .map(|i| i.content.id)
        .collect();
    assert_eq!(ids, vec!["d", "c", "b"]);
}
