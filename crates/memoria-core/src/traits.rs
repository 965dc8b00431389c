//! Capability traits shared by the filters and controllers.
//!
//! Filters are generic over these instead of concrete record types so the
//! same category and year logic serves timeline events and map locations.

use crate::models::{EventCategory, LocationCategory, MapLocation, TimelineEvent};

/// A record carrying an id that is unique within its collection.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A record classified by a set of category tags.
pub trait Categorized {
    type Category: PartialEq + Ord + Copy;

    fn categories(&self) -> &[Self::Category];
}

/// A record occupying an inclusive range of calendar years.
pub trait YearSpan {
    fn start_year(&self) -> i32;
    fn end_year(&self) -> i32;
}

impl Identified for TimelineEvent {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for TimelineEvent {
    type Category = EventCategory;

    fn categories(&self) -> &[EventCategory] {
        &self.categories
    }
}

impl YearSpan for TimelineEvent {
    fn start_year(&self) -> i32 {
        self.year()
    }

    fn end_year(&self) -> i32 {
        TimelineEvent::end_year(self)
    }
}

impl Identified for MapLocation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for MapLocation {
    type Category = LocationCategory;

    fn categories(&self) -> &[LocationCategory] {
        &self.categories
    }
}

impl Identified for crate::models::EducationalResource {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for crate::models::Reference {
    fn id(&self) -> &str {
        &self.id
    }
}
