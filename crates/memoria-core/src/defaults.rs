//! Centralized default constants for memoria.
//!
//! **This module is the single source of truth** for shared default values.
//! Controllers, the search session and the environment-driven config all
//! reference these constants instead of defining their own magic numbers.

// =============================================================================
// TIMELINE
// =============================================================================

/// First year shown when the event collection is empty (start of Nazi rule).
pub const TIMELINE_MIN_YEAR: i32 = 1933;

/// Last year shown when the event collection is empty (end of WWII).
pub const TIMELINE_MAX_YEAR: i32 = 1945;

/// Lowest (widest) timeline zoom level.
pub const TIMELINE_ZOOM_MIN: u8 = 1;

/// Highest (narrowest) timeline zoom level.
pub const TIMELINE_ZOOM_MAX: u8 = 4;

/// Zoom level a new timeline starts at.
pub const TIMELINE_ZOOM_DEFAULT: u8 = 1;

/// Window span in years for zoom levels 1 through 4.
pub const TIMELINE_ZOOM_SPANS: [i32; 4] = [10, 5, 2, 1];

// =============================================================================
// SEARCH
// =============================================================================

/// Delay between the last keystroke and scoring, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Maximum number of ranked results returned by the aggregator.
pub const SEARCH_RESULT_LIMIT: usize = 50;

/// Minimum token length kept by the query tokenizer (shorter tokens dropped).
pub const SEARCH_MIN_TOKEN_LEN: usize = 3;

/// Points for a query word found inside the title.
pub const SCORE_TITLE: u32 = 10;

/// Extra points when the whole title equals the query word.
pub const SCORE_TITLE_EXACT: u32 = 50;

/// Points for a query word found inside the description.
pub const SCORE_DESCRIPTION: u32 = 5;

/// Points for a query word found inside the long description.
pub const SCORE_LONG_DESCRIPTION: u32 = 3;

/// Points for a query word found inside the author.
pub const SCORE_AUTHOR: u32 = 8;

/// Points when any category or tag contains the query word.
pub const SCORE_LABEL: u32 = 7;

/// Points for a query word found inside the country.
pub const SCORE_COUNTRY: u32 = 6;

/// Route of the search results view.
pub const SEARCH_PATH: &str = "/search";

/// Query-string parameter carrying the search text.
pub const SEARCH_QUERY_PARAM: &str = "q";

// =============================================================================
// MAP
// =============================================================================

/// Initial map centre latitude (central Europe).
pub const MAP_CENTER_LAT: f64 = 50.0;

/// Initial map centre longitude.
pub const MAP_CENTER_LNG: f64 = 15.0;

/// Initial map zoom factor.
pub const MAP_ZOOM: f64 = 1.0;

/// Smallest map zoom factor.
pub const MAP_ZOOM_MIN: f64 = 0.5;

/// Largest map zoom factor.
pub const MAP_ZOOM_MAX: f64 = 3.0;

/// Zoom change per zoom-in/zoom-out step.
pub const MAP_ZOOM_STEP: f64 = 0.5;

/// Zoom applied when the map is centred on a single location.
pub const MAP_FOCUS_ZOOM: f64 = 2.0;

/// Degrees moved per pixel of drag at zoom 1.
pub const MAP_DRAG_FACTOR: f64 = 0.1;

// =============================================================================
// RECORD STORE
// =============================================================================

/// Environment variable naming the dataset directory.
pub const DATA_DIR_ENV: &str = "MEMORIA_DATA_DIR";

/// Dataset directory used when `MEMORIA_DATA_DIR` is unset.
pub const DATA_DIR: &str = "data";

/// File names of the four collections inside the dataset directory.
pub const EVENTS_FILE: &str = "timeline_events.json";
pub const LOCATIONS_FILE: &str = "map_locations.json";
pub const RESOURCES_FILE: &str = "educational_resources.json";
pub const REFERENCES_FILE: &str = "references.json";
