//! # memoria-core
//!
//! Core record types, the immutable record store, timeline year windows and
//! category/time filters for memoria.
//!
//! This crate provides the data model and pure functions that the search
//! session and the timeline and map controllers build on.

pub mod defaults;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod store;
pub mod temporal;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{filter_by_categories, filter_by_window, LocationFilter, TimelineFilter};
pub use models::*;
pub use store::RecordStore;
pub use temporal::{
    compute_visible_window, event_position, format_event_date, group_by_year, year_bounds,
    YearWindow, ZoomLevel,
};
pub use traits::*;
