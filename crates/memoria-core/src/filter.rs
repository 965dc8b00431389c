//! Category and year-range filters for timeline events and map locations.
//!
//! The free functions are pure and order-preserving: they return the
//! matching subsequence of their input and never substitute anything for an
//! empty result. Fallback behaviour belongs to the controllers.
//!
//! # Filtering Logic
//!
//! - Categories: OR logic - a record passes when it carries ANY selected
//!   category. An empty selection passes everything.
//! - Years: a record spanning `[start, end]` passes unless it ends before the
//!   window starts or starts after the window ends. Open bounds are
//!   unbounded.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{EventCategory, LocationCategory, MapLocation, TimelineEvent};
use crate::traits::{Categorized, YearSpan};

// =============================================================================
// PURE FILTERS
// =============================================================================

/// Keep records sharing at least one category with `selected`.
pub fn filter_by_categories<'a, T, I>(records: I, selected: &BTreeSet<T::Category>) -> Vec<&'a T>
where
    T: Categorized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .filter(|record| matches_categories(*record, selected))
        .collect()
}

/// Keep records whose year span overlaps `[start_year, end_year]`.
pub fn filter_by_window<'a, T, I>(
    records: I,
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> Vec<&'a T>
where
    T: YearSpan + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .filter(|record| overlaps_window(*record, start_year, end_year))
        .collect()
}

fn matches_categories<T: Categorized>(record: &T, selected: &BTreeSet<T::Category>) -> bool {
    selected.is_empty() || record.categories().iter().any(|c| selected.contains(c))
}

fn overlaps_window<T: YearSpan>(record: &T, start_year: Option<i32>, end_year: Option<i32>) -> bool {
    if let Some(start) = start_year {
        if record.end_year() < start {
            return false;
        }
    }
    if let Some(end) = end_year {
        if record.start_year() > end {
            return false;
        }
    }
    true
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

// =============================================================================
// TIMELINE FILTER STATE
// =============================================================================

/// Category and year-range selection for the timeline.
///
/// # Example
///
/// ```
/// use memoria_core::{EventCategory, TimelineFilter};
///
/// let filter = TimelineFilter::new()
///     .with_category(EventCategory::CanadaPolicy)
///     .with_time_range(Some(1939), Some(1945));
///
/// assert!(filter.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFilter {
    /// Categories to include (OR logic). Empty means all.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub selected_categories: BTreeSet<EventCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
}

impl TimelineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.selected_categories.insert(category);
        self
    }

    pub fn with_time_range(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.set_time_range(start, end);
        self
    }

    /// Select the category if unselected, otherwise unselect it.
    pub fn toggle_category(&mut self, category: EventCategory) {
        toggle(&mut self.selected_categories, category);
    }

    pub fn set_time_range(&mut self, start: Option<i32>, end: Option<i32>) {
        self.start_year = start;
        self.end_year = end;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any constraint is set.
    pub fn is_active(&self) -> bool {
        !self.selected_categories.is_empty() || self.start_year.is_some() || self.end_year.is_some()
    }

    pub fn matches(&self, event: &TimelineEvent) -> bool {
        matches_categories(event, &self.selected_categories)
            && overlaps_window(event, self.start_year, self.end_year)
    }

    /// Events passing both the category and the time-range constraint.
    pub fn apply<'a, I>(&self, events: I) -> Vec<&'a TimelineEvent>
    where
        I: IntoIterator<Item = &'a TimelineEvent>,
    {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}

// =============================================================================
// MAP FILTER STATE
// =============================================================================

/// Marker selection for the map: categories, countries, establishment years
/// and the label toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    /// Categories to include (OR logic). Empty means all.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub selected_categories: BTreeSet<LocationCategory>,

    /// Countries to include. Empty means all.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub selected_countries: BTreeSet<String>,

    /// Earliest establishment year. Locations without one are kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,

    /// Latest establishment year. Locations without one are kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,

    #[serde(default)]
    pub show_labels: bool,
}

impl LocationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_category(&mut self, category: LocationCategory) {
        toggle(&mut self.selected_categories, category);
    }

    pub fn toggle_country(&mut self, country: impl Into<String>) {
        toggle(&mut self.selected_countries, country.into());
    }

    pub fn set_time_range(&mut self, start: Option<i32>, end: Option<i32>) {
        self.start_year = start;
        self.end_year = end;
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    /// Reset every constraint, labels included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, location: &MapLocation) -> bool {
        if !matches_categories(location, &self.selected_categories) {
            return false;
        }
        if !self.selected_countries.is_empty() && !self.selected_countries.contains(&location.country)
        {
            return false;
        }
        if let Some(established) = location.year_established {
            if self.start_year.is_some_and(|start| established < start) {
                return false;
            }
            if self.end_year.is_some_and(|end| established > end) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a, I>(&self, locations: I) -> Vec<&'a MapLocation>
    where
        I: IntoIterator<Item = &'a MapLocation>,
    {
        locations.into_iter().filter(|l| self.matches(l)).collect()
    }
}
