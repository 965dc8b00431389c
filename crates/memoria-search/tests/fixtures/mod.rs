//! Test fixtures for search integration tests.
//!
//! Provides record builders, the bundled dataset and a recording navigator.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use memoria_core::{
    Coordinates, EducationalResource, EventCategory, LocationCategory, MapLocation, RecordStore,
    Reference, ResourceType, TimelineEvent,
};
use memoria_search::Navigator;

/// Load the JSON dataset shipped in the workspace `data/` directory.
pub fn bundled_store() -> RecordStore {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    RecordStore::load_dir(dir).expect("bundled dataset should load")
}

pub fn event(id: &str, title: &str, description: &str, categories: &[EventCategory]) -> TimelineEvent {
    TimelineEvent {
        id: id.to_string(),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(1940, 1, 1).unwrap(),
        end_date: None,
        description: description.to_string(),
        long_description: None,
        categories: categories.to_vec(),
        location: None,
        coordinates: None,
        sources: Vec::new(),
        media: Vec::new(),
        related_events: Vec::new(),
    }
}

pub fn resource(id: &str, title: &str, author: Option<&str>, tags: &[&str]) -> EducationalResource {
    EducationalResource {
        id: id.to_string(),
        title: title.to_string(),
        resource_type: ResourceType::Book,
        author: author.map(str::to_string),
        year: None,
        description: String::new(),
        level: None,
        image_url: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        url: None,
        local_path: None,
    }
}

pub fn reference(id: &str, title: &str, categories: &[&str]) -> Reference {
    Reference {
        id: id.to_string(),
        title: title.to_string(),
        author: None,
        publication: None,
        year: None,
        url: None,
        description: None,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        citation: String::new(),
    }
}

pub fn location(id: &str, name: &str, description: &str, country: &str) -> MapLocation {
    MapLocation {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        long_description: None,
        categories: vec![LocationCategory::Memorial],
        coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        country: country.to_string(),
        year_established: None,
        year_closed: None,
        sources: Vec::new(),
        media: Vec::new(),
        related_locations: Vec::new(),
        related_events: Vec::new(),
    }
}

/// Navigator that remembers every pushed URL.
#[derive(Default)]
pub struct RecordingNavigator {
    pushed: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn pushed(&self) -> Vec<String> {
        self.pushed.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, url: &str) {
        self.pushed.lock().unwrap().push(url.to_string());
    }
}
