//! Shared fixtures for memoria-timeline integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use memoria_core::RecordStore;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// The record collections shipped in the repository's `data/` directory.
pub fn bundled_store() -> Arc<RecordStore> {
    Arc::new(RecordStore::load_dir(data_dir()).expect("bundled data should load"))
}
