//! Integration tests for loading the bundled dataset into a RecordStore.
//!
//! These tests read the JSON collections under the workspace `data/`
//! directory and check the invariants the controllers rely on.

use std::collections::BTreeSet;
use std::path::PathBuf;

use memoria_core::{
    filter_by_categories, filter_by_window, year_bounds, EventCategory, LocationCategory,
    LocationFilter, RecordStore, TimelineFilter,
};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn load() -> RecordStore {
    RecordStore::load_dir(data_dir()).expect("bundled dataset should load")
}

#[test]
fn test_bundled_dataset_loads() {
    let store = load();
    assert_eq!(store.events().len(), 10);
    assert_eq!(store.locations().len(), 10);
    assert_eq!(store.resources().len(), 12);
    assert_eq!(store.references().len(), 12);
}

#[test]
fn test_bundled_events_have_ordered_dates() {
    let store = load();
    for event in store.events() {
        if let Some(end) = event.end_date {
            assert!(end >= event.date, "{} ends before it starts", event.id);
        }
    }
    let tailor = store.event("montreal-tailor-project").unwrap();
    assert_eq!(tailor.year(), 1948);
    assert_eq!(tailor.end_year(), 1949);
}

#[test]
fn test_year_bounds_of_bundled_events() {
    let store = load();
    assert_eq!(year_bounds(store.events(), false), (1933, 1948));
    assert_eq!(year_bounds(store.events(), true), (1933, 1949));
}

#[test]
fn test_category_filter_on_bundled_events() {
    let store = load();
    let selected: BTreeSet<_> = [EventCategory::CanadaPolicy].into_iter().collect();
    let ids: Vec<&str> = filter_by_categories(store.events(), &selected)
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "ms-st-louis",
            "canada-postwar-immigration",
            "montreal-tailor-project"
        ]
    );

    // Idempotence
    let once = filter_by_categories(store.events(), &selected);
    let twice = filter_by_categories(once.iter().copied(), &selected);
    assert_eq!(once, twice);
}

#[test]
fn test_window_filter_never_grows() {
    let store = load();
    let all = filter_by_window(store.events(), None, None);
    assert_eq!(all.len(), store.events().len());

    let narrowed = filter_by_window(store.events(), Some(1938), Some(1942));
    let narrower = filter_by_window(narrowed.iter().copied(), Some(1939), Some(1939));
    assert!(narrower.len() <= narrowed.len());
    assert!(narrowed.len() <= all.len());
    assert!(narrower.iter().all(|e| e.year() == 1939));
}

#[test]
fn test_timeline_filter_combines_category_and_range() {
    let store = load();
    let filter = TimelineFilter::new()
        .with_category(EventCategory::Holocaust)
        .with_time_range(Some(1939), Some(1945));
    let ids: Vec<&str> = filter
        .apply(store.events())
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "ms-st-louis",
            "wannsee-conference",
            "liberation-auschwitz",
            "war-refugee-board"
        ]
    );
}

#[test]
fn test_location_filter_by_country_and_category() {
    let store = load();
    let mut filter = LocationFilter::new();
    filter.toggle_country("Canada");
    filter.toggle_category(LocationCategory::Museum);
    let ids: Vec<&str> = filter
        .apply(store.locations())
        .into_iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "montreal-holocaust-museum",
            "vancouver-holocaust-education-centre",
            "pier-21-halifax"
        ]
    );
}

#[test]
fn test_location_related_events_resolve() {
    let store = load();
    let auschwitz = store.location("auschwitz").unwrap();
    let events = store.events_for_location(auschwitz);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "liberation-auschwitz");
}
