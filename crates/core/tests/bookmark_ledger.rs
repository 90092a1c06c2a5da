//! Bookmark ledger behavior against a fake store.

mod support;

use std::sync::Arc;

use serde_json::json;
use support::MemoryStore;
use taqwa_core::BookmarkService;
use taqwa_domain::constants::{BOOKMARKED_AYAHS_KEY, BOOKMARKED_HADITHS_KEY};
use taqwa_domain::AyahKey;

fn service_on(store: &Arc<MemoryStore>) -> BookmarkService {
    support::init_tracing();
    let store: Arc<dyn taqwa_core::StateStore> = store.clone();
    BookmarkService::new(store)
}

#[test]
fn hadith_toggle_is_idempotent() {
    let store = Arc::new(MemoryStore::new());
    let service = service_on(&store);

    service.toggle_hadith("bukhari-52");
    assert!(service.is_bookmarked_hadith("bukhari-52"));

    service.toggle_hadith("bukhari-52");
    assert!(!service.is_bookmarked_hadith("bukhari-52"));
    assert_eq!(service.hadith_ids(), Vec::<String>::new());
}

#[test]
fn ayah_toggle_uses_structural_equality() {
    let store = Arc::new(MemoryStore::new());
    let service = service_on(&store);

    // Two separately constructed keys with equal fields are the same element.
    service.toggle_ayah(AyahKey::new(2, 5));
    assert!(service.is_bookmarked_ayah(AyahKey::new(2, 5)));

    service.toggle_ayah(AyahKey::new(2, 5));
    assert!(!service.is_bookmarked_ayah(AyahKey::new(2, 5)));
    assert_eq!(service.ayah_keys(), Vec::<AyahKey>::new());
}

#[test]
fn remove_is_a_noop_when_absent() {
    let store = Arc::new(MemoryStore::new());
    let service = service_on(&store);

    service.remove_hadith("never-added");
    service.remove_ayah(AyahKey::new(9, 9));

    assert_eq!(service.hadith_ids(), Vec::<String>::new());
    assert_eq!(service.ayah_keys(), Vec::<AyahKey>::new());
}

#[test]
fn insertion_order_is_preserved_in_the_persisted_list() {
    let store = Arc::new(MemoryStore::new());
    let service = service_on(&store);

    service.toggle_hadith("a");
    service.toggle_hadith("b");
    service.toggle_hadith("c");
    service.toggle_hadith("b");

    assert_eq!(service.hadith_ids(), vec!["a".to_owned(), "c".to_owned()]);
}

#[test]
fn corrupt_slot_loads_as_empty_and_self_heals() {
    let store = Arc::new(
        MemoryStore::new()
            .with_slot(BOOKMARKED_HADITHS_KEY, json!({"not": "an array"}))
            .with_slot(BOOKMARKED_AYAHS_KEY, json!(42)),
    );
    let service = service_on(&store);

    assert!(!service.is_bookmarked_hadith("anything"));
    assert!(!service.is_bookmarked_ayah(AyahKey::new(1, 1)));

    // The next successful write replaces the corrupt slot with a
    // well-formed array.
    service.toggle_hadith("x");
    assert_eq!(store.raw(BOOKMARKED_HADITHS_KEY), Some(json!(["x"])));
}

#[test]
fn restart_rehydrates_both_sets() {
    let store = Arc::new(MemoryStore::new());

    let service = service_on(&store);
    service.toggle_hadith("muslim-7");
    service.toggle_ayah(AyahKey::new(36, 1));
    service.toggle_ayah(AyahKey::new(36, 2));
    drop(service);

    let revived = service_on(&store);
    assert!(revived.is_bookmarked_hadith("muslim-7"));
    assert!(revived.is_bookmarked_ayah(AyahKey::new(36, 1)));
    assert!(revived.is_bookmarked_ayah(AyahKey::new(36, 2)));
    assert_eq!(revived.ayah_keys().len(), 2);
}

#[test]
fn rapid_toggles_net_to_a_correct_final_state() {
    let store = Arc::new(MemoryStore::new());
    let service = service_on(&store);

    // Same-turn toggles cannot interleave; an even count nets to absent.
    for _ in 0..4 {
        service.toggle_ayah(AyahKey::new(2, 255));
    }
    assert!(!service.is_bookmarked_ayah(AyahKey::new(2, 255)));

    for _ in 0..3 {
        service.toggle_ayah(AyahKey::new(2, 255));
    }
    assert!(service.is_bookmarked_ayah(AyahKey::new(2, 255)));
}

#[test]
fn change_subscribers_see_each_snapshot() {
    let store = Arc::new(MemoryStore::new());
    let service = service_on(&store);

    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    service.on_hadiths_change(move |ids| sink.lock().push(ids.len()));

    service.toggle_hadith("a");
    service.toggle_hadith("b");
    service.remove_hadith("a");

    assert_eq!(*seen.lock(), vec![1, 2, 1]);
}
