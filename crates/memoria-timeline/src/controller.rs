//! Timeline interaction controller.
//!
//! Holds the current year, zoom level, selected event and category/time
//! filter for one timeline view, and derives the visible events from them.
//!
//! # Visible events
//!
//! Events are sorted by date, narrowed by the attached [`TimelineFilter`],
//! then windowed by [`compute_visible_window`]. When the window is empty but
//! the filtered pool is not, the controller falls back to every event on the
//! year closest to the current year (the earlier year wins a tie), so the
//! view never goes blank because of window granularity alone.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use memoria_core::{
    compute_visible_window, event_position, filter_by_window, group_by_year, RecordStore,
    TimelineEvent, TimelineFilter, YearWindow, ZoomLevel,
};

/// Construction options for [`TimelineController`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineOptions {
    /// Year to open on. Defaults to the earliest event year.
    #[serde(default)]
    pub initial_year: Option<i32>,
    #[serde(default)]
    pub initial_zoom: ZoomLevel,
}

impl TimelineOptions {
    pub fn with_initial_year(mut self, year: i32) -> Self {
        self.initial_year = Some(year);
        self
    }

    /// Opening zoom level, clamped to `1..=4`.
    pub fn with_initial_zoom(mut self, level: i64) -> Self {
        self.initial_zoom = ZoomLevel::clamped(level);
        self
    }
}

/// Stateful controller for one timeline view.
#[derive(Debug, Clone)]
pub struct TimelineController {
    store: Arc<RecordStore>,
    /// Indices into `store.events()`, ordered by date.
    order: Vec<usize>,
    min_year: i32,
    max_year: i32,
    current_year: i32,
    zoom: ZoomLevel,
    selected: Option<usize>,
    filter: TimelineFilter,
}

impl TimelineController {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_options(store, TimelineOptions::default())
    }

    /// Build a controller; `min_year`/`max_year` span the events' start
    /// years, or 1933–1945 when there are none.
    pub fn with_options(store: Arc<RecordStore>, options: TimelineOptions) -> Self {
        let events = store.events();
        let mut order: Vec<usize> = (0..events.len()).collect();
        order.sort_by_key(|&i| events[i].date);

        let (min_year, max_year) = memoria_core::year_bounds(events, false);
        let current_year = options
            .initial_year
            .unwrap_or(min_year)
            .clamp(min_year, max_year);

        Self {
            store,
            order,
            min_year,
            max_year,
            current_year,
            zoom: options.initial_zoom,
            selected: None,
            filter: TimelineFilter::default(),
        }
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn filter(&self) -> &TimelineFilter {
        &self.filter
    }

    /// Mutable access for toggling categories or the time range.
    pub fn filter_mut(&mut self) -> &mut TimelineFilter {
        &mut self.filter
    }

    pub fn set_filter(&mut self, filter: TimelineFilter) {
        self.filter = filter;
    }

    /// All events in date order, unfiltered.
    pub fn sorted_events(&self) -> Vec<&TimelineEvent> {
        let events = self.store.events();
        self.order.iter().map(|&i| &events[i]).collect()
    }

    /// Jump to `year`, clamped into the dataset's year range.
    pub fn navigate_to_year(&mut self, year: i32) {
        self.current_year = year.clamp(self.min_year, self.max_year);
        debug!(
            subsystem = "timeline",
            op = "navigate_to_year",
            requested = year,
            current_year = self.current_year,
            "Timeline year changed"
        );
    }

    /// Move forward by half the current visible window (at least one year).
    pub fn navigate_next(&mut self) {
        let step = self.visible_window().step();
        self.navigate_to_year(self.current_year + step);
    }

    /// Move back by half the current visible window (at least one year).
    pub fn navigate_previous(&mut self) {
        let step = self.visible_window().step();
        self.navigate_to_year(self.current_year - step);
    }

    /// Set the zoom level, clamped to `1..=4`.
    pub fn set_zoom_level(&mut self, level: i64) {
        self.zoom = ZoomLevel::clamped(level);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom_level(i64::from(self.zoom.get()) + 1);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom_level(i64::from(self.zoom.get()) - 1);
    }

    /// Select the event with `id`, or clear the selection with `None`.
    ///
    /// An unknown id leaves the selection unchanged and returns `false`.
    pub fn select_event(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) => match self.index_of(id) {
                Some(index) => {
                    self.selected = Some(index);
                    true
                }
                None => false,
            },
        }
    }

    /// Select the event with `id` and centre the timeline on its year.
    ///
    /// Unknown ids are a no-op and return `false`.
    pub fn navigate_to_event(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(
                subsystem = "timeline",
                op = "navigate_to_event",
                record_id = id,
                "Unknown event id ignored"
            );
            return false;
        };
        self.selected = Some(index);
        let year = self.store.events()[index].year();
        self.navigate_to_year(year);
        true
    }

    pub fn selected_event(&self) -> Option<&TimelineEvent> {
        self.selected.map(|i| &self.store.events()[i])
    }

    /// Events referenced by the selected event's `related_events`.
    pub fn selected_related_events(&self) -> Vec<&TimelineEvent> {
        self.selected_event()
            .map(|event| self.store.related_events(event))
            .unwrap_or_default()
    }

    pub fn visible_window(&self) -> YearWindow {
        compute_visible_window(self.current_year, self.zoom, self.min_year, self.max_year)
    }

    /// Date-ordered events that pass the filter and overlap the visible
    /// window, with the closest-year fallback described in the module docs.
    pub fn visible_events(&self) -> Vec<&TimelineEvent> {
        let pool = self.filter.apply(self.sorted_events());
        let window = self.visible_window();
        let windowed = filter_by_window(
            pool.iter().copied(),
            Some(window.start_year),
            Some(window.end_year),
        );
        if !windowed.is_empty() || pool.is_empty() {
            return windowed;
        }

        // Pool is date-ordered, so the first minimum is the earliest year.
        let Some(fallback_year) = pool
            .iter()
            .map(|e| e.year())
            .min_by_key(|year| (year - self.current_year).abs())
        else {
            return Vec::new();
        };

        debug!(
            subsystem = "timeline",
            current_year = self.current_year,
            window_start = window.start_year,
            window_end = window.end_year,
            fallback_year,
            "Visible window empty, showing closest year"
        );
        pool.into_iter()
            .filter(|e| e.year() == fallback_year)
            .collect()
    }

    /// Visible events grouped by start year.
    pub fn visible_by_year(&self) -> BTreeMap<i32, Vec<&TimelineEvent>> {
        group_by_year(self.visible_events())
    }

    /// Position of `event` on the full timeline axis, as a percentage.
    pub fn event_position(&self, event: &TimelineEvent) -> f64 {
        event_position(event, self.min_year, self.max_year)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.store.events().iter().position(|e| e.id == id)
    }
}
