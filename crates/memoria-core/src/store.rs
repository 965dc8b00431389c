//! Immutable record store holding the four dataset collections.
//!
//! The store is built once (from JSON files or in-memory vectors), validated,
//! and then handed to controllers explicitly. Nothing in memoria reads
//! records from ambient global state.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::defaults::{
    DATA_DIR, DATA_DIR_ENV, EVENTS_FILE, LOCATIONS_FILE, REFERENCES_FILE, RESOURCES_FILE,
};
use crate::error::{Error, Result};
use crate::models::{EducationalResource, MapLocation, Reference, TimelineEvent};
use crate::traits::Identified;

/// Validated, read-only collections of every record kind.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    events: Vec<TimelineEvent>,
    locations: Vec<MapLocation>,
    resources: Vec<EducationalResource>,
    references: Vec<Reference>,
}

impl RecordStore {
    /// Build a store from in-memory collections.
    ///
    /// Fails when an id repeats within a collection or an event's `endDate`
    /// precedes its `date`.
    pub fn new(
        events: Vec<TimelineEvent>,
        locations: Vec<MapLocation>,
        resources: Vec<EducationalResource>,
        references: Vec<Reference>,
    ) -> Result<Self> {
        ensure_unique_ids(&events)?;
        ensure_unique_ids(&locations)?;
        ensure_unique_ids(&resources)?;
        ensure_unique_ids(&references)?;

        for event in &events {
            if let Some(end) = event.end_date {
                if end < event.date {
                    return Err(Error::invalid_record(
                        &event.id,
                        format!("endDate {} precedes date {}", end, event.date),
                    ));
                }
            }
        }

        Ok(Self {
            events,
            locations,
            resources,
            references,
        })
    }

    /// Load the four collections from JSON files inside `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let events: Vec<TimelineEvent> = read_collection(&dir.join(EVENTS_FILE))?;
        let locations: Vec<MapLocation> = read_collection(&dir.join(LOCATIONS_FILE))?;
        let resources: Vec<EducationalResource> = read_collection(&dir.join(RESOURCES_FILE))?;
        let references: Vec<Reference> = read_collection(&dir.join(REFERENCES_FILE))?;

        let store = Self::new(events, locations, resources, references)?;
        info!(
            subsystem = "store",
            data_dir = %dir.display(),
            events = store.events.len(),
            locations = store.locations.len(),
            resources = store.resources.len(),
            references = store.references.len(),
            "Record store loaded"
        );
        Ok(store)
    }

    /// Load from `MEMORIA_DATA_DIR`, falling back to `./data`.
    pub fn from_env() -> Result<Self> {
        let dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DATA_DIR));
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "data directory {} does not exist",
                dir.display()
            )));
        }
        Self::load_dir(dir)
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn locations(&self) -> &[MapLocation] {
        &self.locations
    }

    pub fn resources(&self) -> &[EducationalResource] {
        &self.resources
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn event(&self, id: &str) -> Option<&TimelineEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn location(&self, id: &str) -> Option<&MapLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Events listed in `event.related_events`, in collection order.
    /// Dangling ids are skipped.
    pub fn related_events(&self, event: &TimelineEvent) -> Vec<&TimelineEvent> {
        if event.related_events.is_empty() {
            return Vec::new();
        }
        self.events
            .iter()
            .filter(|e| event.related_events.iter().any(|id| id == &e.id))
            .collect()
    }

    /// Events listed in a location's `related_events`.
    pub fn events_for_location(&self, location: &MapLocation) -> Vec<&TimelineEvent> {
        self.events
            .iter()
            .filter(|e| location.related_events.iter().any(|id| id == &e.id))
            .collect()
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<T> = serde_json::from_str(&raw)
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?;
    debug!(
        subsystem = "store",
        path = %path.display(),
        record_count = records.len(),
        "Collection parsed"
    );
    Ok(records)
}

fn ensure_unique_ids<T: Identified>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(Error::invalid_record(record.id(), "duplicate id"));
        }
    }
    Ok(())
}
