//! Year windows and calendar helpers for the timeline.
//!
//! # Window policy
//!
//! The visible window is sized by zoom level and centred on the current
//! year:
//!
//! | Zoom | Span (years) |
//! |------|--------------|
//! | 1    | 10           |
//! | 2    | 5            |
//! | 3    | 2            |
//! | 4    | 1            |
//!
//! The window covers `span` inclusive years starting `floor(span / 2)` years
//! before the current year, then slides (never shrinks, unless the dataset is
//! shorter than the span) to stay inside `[min_year, max_year]`.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::defaults::{
    TIMELINE_MAX_YEAR, TIMELINE_MIN_YEAR, TIMELINE_ZOOM_DEFAULT, TIMELINE_ZOOM_MAX,
    TIMELINE_ZOOM_MIN, TIMELINE_ZOOM_SPANS,
};
use crate::models::TimelineEvent;

// =============================================================================
// ZOOM LEVEL
// =============================================================================

/// Timeline zoom level, always within `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: ZoomLevel = ZoomLevel(TIMELINE_ZOOM_MIN);
    pub const MAX: ZoomLevel = ZoomLevel(TIMELINE_ZOOM_MAX);

    /// Clamp any integer into the valid zoom range.
    pub fn clamped(level: i64) -> Self {
        let level = level.clamp(TIMELINE_ZOOM_MIN as i64, TIMELINE_ZOOM_MAX as i64);
        ZoomLevel(level as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of calendar years visible at this zoom.
    pub fn span(self) -> i32 {
        TIMELINE_ZOOM_SPANS[(self.0 - TIMELINE_ZOOM_MIN) as usize]
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        ZoomLevel(TIMELINE_ZOOM_DEFAULT)
    }
}

impl From<i64> for ZoomLevel {
    fn from(level: i64) -> Self {
        ZoomLevel::clamped(level)
    }
}

impl From<ZoomLevel> for u8 {
    fn from(level: ZoomLevel) -> Self {
        level.0
    }
}

// =============================================================================
// YEAR WINDOW
// =============================================================================

/// Inclusive `[start_year, end_year]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl YearWindow {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }

    /// Number of years covered.
    pub fn len(&self) -> i32 {
        (self.end_year - self.start_year + 1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Years moved by one next/previous step: half this window, at least one.
    ///
    /// Uses the clamped window length, so a dataset shorter than the zoom
    /// span steps by less than half the nominal span.
    pub fn step(&self) -> i32 {
        (self.len() / 2).max(1)
    }
}

/// Compute the visible window for the timeline.
///
/// `current_year` is clamped into `[min_year, max_year]` first. The caller
/// guarantees `min_year <= max_year`.
pub fn compute_visible_window(
    current_year: i32,
    zoom: ZoomLevel,
    min_year: i32,
    max_year: i32,
) -> YearWindow {
    let span = zoom.span();
    let current = current_year.clamp(min_year, max_year);
    let half = span / 2;

    let mut start = current - half;
    let mut end = start + span - 1;

    if start < min_year {
        start = min_year;
        end = max_year.min(min_year + span - 1);
    }
    if end > max_year {
        end = max_year;
        start = min_year.max(max_year - span + 1);
    }

    trace!(
        current_year = current,
        zoom_level = zoom.get(),
        window_start = start,
        window_end = end,
        "Visible window computed"
    );

    YearWindow::new(start, end)
}

// =============================================================================
// CALENDAR HELPERS
// =============================================================================

/// Earliest and latest year across `events`.
///
/// With `include_end_dates` the latest year also considers `end_date`.
/// An empty collection yields the 1933–1945 defaults.
pub fn year_bounds(events: &[TimelineEvent], include_end_dates: bool) -> (i32, i32) {
    let min = events.iter().map(|e| e.year()).min();
    let max = events
        .iter()
        .map(|e| if include_end_dates { e.end_year() } else { e.year() })
        .max();
    match (min, max) {
        (Some(min), Some(max)) => (min, max),
        _ => (TIMELINE_MIN_YEAR, TIMELINE_MAX_YEAR),
    }
}

/// Horizontal position of an event on a `[min_year, max_year]` axis, as a
/// percentage in `[0, 100]`.
///
/// The month contributes a fraction of one year. A zero-length axis puts
/// every event at 0.
pub fn event_position(event: &TimelineEvent, min_year: i32, max_year: i32) -> f64 {
    let range = (max_year - min_year) as f64;
    if range <= 0.0 {
        return 0.0;
    }
    let year_position = (event.year() - min_year) as f64 / range;
    let month_offset = event.date.month0() as f64 / 12.0 / range;
    (year_position + month_offset).clamp(0.0, 1.0) * 100.0
}

/// Group events by start year, preserving input order within each year.
pub fn group_by_year<'a, I>(events: I) -> BTreeMap<i32, Vec<&'a TimelineEvent>>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    let mut groups: BTreeMap<i32, Vec<&'a TimelineEvent>> = BTreeMap::new();
    for event in events {
        groups.entry(event.year()).or_default().push(event);
    }
    groups
}

/// Format a date for display: "January 30, 1933" or "January 1933".
pub fn format_event_date(date: NaiveDate, include_day: bool) -> String {
    if include_day {
        date.format("%B %-d, %Y").to_string()
    } else {
        date.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoom(level: i64) -> ZoomLevel {
        ZoomLevel::clamped(level)
    }

    fn event_on(date: &str) -> TimelineEvent {
        TimelineEvent {
            id: date.to_string(),
            title: date.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            end_date: None,
            description: String::new(),
            long_description: None,
            categories: Vec::new(),
            location: None,
            coordinates: None,
            sources: Vec::new(),
            media: Vec::new(),
            related_events: Vec::new(),
        }
    }

    #[test]
    fn test_zoom_spans() {
        assert_eq!(zoom(1).span(), 10);
        assert_eq!(zoom(2).span(), 5);
        assert_eq!(zoom(3).span(), 2);
        assert_eq!(zoom(4).span(), 1);
    }

    #[test]
    fn test_zoom_clamps_out_of_range() {
        assert_eq!(zoom(0), ZoomLevel::MIN);
        assert_eq!(zoom(-7), ZoomLevel::MIN);
        assert_eq!(zoom(9), ZoomLevel::MAX);
    }

    #[test]
    fn test_window_step_is_half_window_at_least_one() {
        let step = |z: i64| compute_visible_window(1939, zoom(z), 1933, 1948).step();
        assert_eq!(step(1), 5);
        assert_eq!(step(2), 2);
        assert_eq!(step(3), 1);
        assert_eq!(step(4), 1);

        // Clamped to a five-year dataset the zoom-1 window holds five years
        let short = compute_visible_window(1938, zoom(1), 1938, 1942);
        assert_eq!(short, YearWindow::new(1938, 1942));
        assert_eq!(short.step(), 2);
    }

    #[test]
    fn test_zoom_deserializes_clamped() {
        let z: ZoomLevel = serde_json::from_str("12").unwrap();
        assert_eq!(z, ZoomLevel::MAX);
        assert_eq!(serde_json::to_string(&zoom(3)).unwrap(), "3");
    }

    #[test]
    fn test_window_centred_on_1939() {
        let window = compute_visible_window(1939, zoom(1), 1933, 1949);
        assert_eq!(window, YearWindow::new(1934, 1943));
        assert_eq!(window.len(), 10);
    }

    #[test]
    fn test_window_shifts_right_at_lower_bound() {
        let window = compute_visible_window(1934, zoom(1), 1933, 1949);
        assert_eq!(window, YearWindow::new(1933, 1942));
    }

    #[test]
    fn test_window_shifts_left_at_upper_bound() {
        let window = compute_visible_window(1948, zoom(2), 1933, 1949);
        assert_eq!(window, YearWindow::new(1945, 1949));
    }

    #[test]
    fn test_window_wider_than_dataset_is_clamped_both_sides() {
        let window = compute_visible_window(1940, zoom(1), 1938, 1942);
        assert_eq!(window, YearWindow::new(1938, 1942));
    }

    #[test]
    fn test_single_year_window() {
        let window = compute_visible_window(1941, zoom(4), 1933, 1949);
        assert_eq!(window, YearWindow::new(1941, 1941));
    }

    #[test]
    fn test_window_clamps_out_of_range_current_year() {
        let window = compute_visible_window(2020, zoom(3), 1933, 1949);
        assert_eq!(window, YearWindow::new(1948, 1949));
    }

    #[test]
    fn test_window_always_within_bounds() {
        for (min, max) in [(1933, 1949), (1940, 1940), (1939, 1941)] {
            for level in 1..=4 {
                for current in min..=max {
                    let w = compute_visible_window(current, zoom(level), min, max);
                    assert!(w.start_year <= w.end_year, "{w:?}");
                    assert!(w.start_year >= min && w.end_year <= max, "{w:?}");
                    assert!(w.contains(current), "{w:?} should contain {current}");
                }
            }
        }
    }

    #[test]
    fn test_year_bounds_with_and_without_end_dates() {
        let mut tailor = event_on("1948-03-15");
        tailor.end_date = NaiveDate::from_ymd_opt(1949, 12, 31);
        let events = vec![event_on("1933-01-30"), tailor];

        assert_eq!(year_bounds(&events, false), (1933, 1948));
        assert_eq!(year_bounds(&events, true), (1933, 1949));
        assert_eq!(year_bounds(&[], true), (1933, 1945));
    }

    #[test]
    fn test_event_position() {
        let jan = event_on("1933-01-30");
        let jul = event_on("1939-07-01");
        assert_eq!(event_position(&jan, 1933, 1945), 0.0);
        let expected = (6.0 / 12.0 + 6.0 / 12.0 / 12.0) * 100.0;
        assert!((event_position(&jul, 1933, 1945) - expected).abs() < 1e-9);
        assert_eq!(event_position(&jul, 1940, 1940), 0.0);
        assert_eq!(event_position(&jul, 1900, 1920), 100.0);
    }

    #[test]
    fn test_group_by_year() {
        let events = vec![
            event_on("1939-06-07"),
            event_on("1938-11-09"),
            event_on("1939-09-10"),
        ];
        let groups = group_by_year(&events);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1938, 1939]);
        assert_eq!(groups[&1939][0].id, "1939-06-07");
        assert_eq!(groups[&1939][1].id, "1939-09-10");
    }

    #[test]
    fn test_format_event_date() {
        let date = NaiveDate::from_ymd_opt(1933, 1, 30).unwrap();
        assert_eq!(format_event_date(date, true), "January 30, 1933");
        assert_eq!(format_event_date(date, false), "January 1933");
    }
}
