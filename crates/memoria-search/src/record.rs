//! Searchable view over every record kind.
//!
//! [`SearchableRecord`] borrows a record from the store and exposes the
//! fields the scorer reads through total accessors: absent fields are
//! `None` or empty rather than missing.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use memoria_core::{EducationalResource, MapLocation, Reference, TimelineEvent};

/// Which collection a search result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Event,
    Resource,
    Reference,
    Location,
}

impl ResultKind {
    pub const ALL: [ResultKind; 4] = [
        ResultKind::Event,
        ResultKind::Resource,
        ResultKind::Reference,
        ResultKind::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Event => "event",
            Self::Resource => "resource",
            Self::Reference => "reference",
            Self::Location => "location",
        }
    }

    /// Page path a result of this kind links to.
    pub fn page_path(&self) -> &'static str {
        match *self {
            Self::Event => "/timeline",
            Self::Resource => "/resources",
            Self::Reference => "/sources",
            Self::Location => "/maps",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed record of any searchable kind.
#[derive(Debug, Clone, Copy)]
pub enum SearchableRecord<'a> {
    Event(&'a TimelineEvent),
    Resource(&'a EducationalResource),
    Reference(&'a Reference),
    Location(&'a MapLocation),
}

impl<'a> SearchableRecord<'a> {
    pub fn kind(&self) -> ResultKind {
        match *self {
            Self::Event(_) => ResultKind::Event,
            Self::Resource(_) => ResultKind::Resource,
            Self::Reference(_) => ResultKind::Reference,
            Self::Location(_) => ResultKind::Location,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            Self::Event(e) => &e.id,
            Self::Resource(r) => &r.id,
            Self::Reference(r) => &r.id,
            Self::Location(l) => &l.id,
        }
    }

    /// Display title; a location's name.
    pub fn title(&self) -> &'a str {
        match *self {
            Self::Event(e) => &e.title,
            Self::Resource(r) => &r.title,
            Self::Reference(r) => &r.title,
            Self::Location(l) => &l.name,
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        match *self {
            Self::Event(e) => Some(e.description.as_str()),
            Self::Resource(r) => Some(r.description.as_str()),
            Self::Reference(r) => r.description.as_deref(),
            Self::Location(l) => Some(l.description.as_str()),
        }
    }

    pub fn long_description(&self) -> Option<&'a str> {
        match *self {
            Self::Event(e) => e.long_description.as_deref(),
            Self::Location(l) => l.long_description.as_deref(),
            Self::Resource(_) | Self::Reference(_) => None,
        }
    }

    pub fn author(&self) -> Option<&'a str> {
        match *self {
            Self::Resource(r) => r.author.as_deref(),
            Self::Reference(r) => r.author.as_deref(),
            Self::Event(_) | Self::Location(_) => None,
        }
    }

    /// Category identifiers of the record.
    pub fn categories(&self) -> Vec<&'a str> {
        match *self {
            Self::Event(e) => e.categories.iter().map(|c| c.as_str()).collect(),
            Self::Location(l) => l.categories.iter().map(|c| c.as_str()).collect(),
            Self::Reference(r) => r.categories.iter().map(String::as_str).collect(),
            Self::Resource(_) => Vec::new(),
        }
    }

    pub fn tags(&self) -> &'a [String] {
        match *self {
            Self::Resource(r) => &r.tags,
            Self::Event(_) | Self::Reference(_) | Self::Location(_) => &[],
        }
    }

    /// Categories and tags together, as matched by the label weight.
    pub fn labels(&self) -> Vec<&'a str> {
        let mut labels = self.categories();
        labels.extend(self.tags().iter().map(String::as_str));
        labels
    }

    pub fn country(&self) -> Option<&'a str> {
        match *self {
            Self::Location(l) => Some(l.country.as_str()),
            Self::Event(_) | Self::Resource(_) | Self::Reference(_) => None,
        }
    }

    /// Start date, for events only.
    pub fn date(&self) -> Option<NaiveDate> {
        match *self {
            Self::Event(e) => Some(e.date),
            _ => None,
        }
    }

    /// Publication or establishment year.
    pub fn year(&self) -> Option<i32> {
        match *self {
            Self::Event(_) => None,
            Self::Resource(r) => r.year,
            Self::Reference(r) => r.year,
            Self::Location(l) => l.year_established,
        }
    }

    /// Deep link to the record on its page, e.g. `/timeline?event=kristallnacht`.
    pub fn url(&self) -> String {
        let kind = self.kind();
        format!(
            "{}?{}={}",
            kind.page_path(),
            kind.as_str(),
            urlencoding::encode(self.id())
        )
    }
}

impl<'a> From<&'a TimelineEvent> for SearchableRecord<'a> {
    fn from(event: &'a TimelineEvent) -> Self {
        Self::Event(event)
    }
}

impl<'a> From<&'a EducationalResource> for SearchableRecord<'a> {
    fn from(resource: &'a EducationalResource) -> Self {
        Self::Resource(resource)
    }
}

impl<'a> From<&'a Reference> for SearchableRecord<'a> {
    fn from(reference: &'a Reference) -> Self {
        Self::Reference(reference)
    }
}

impl<'a> From<&'a MapLocation> for SearchableRecord<'a> {
    fn from(location: &'a MapLocation) -> Self {
        Self::Location(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoria_core::{Coordinates, EventCategory, LocationCategory, ResourceType};

    fn reference() -> Reference {
        Reference {
            id: "ref-1".to_string(),
            title: "None Is Too Many".to_string(),
            author: Some("Irving Abella and Harold Troper".to_string()),
            publication: None,
            year: Some(1982),
            url: None,
            description: None,
            categories: vec!["secondary".to_string(), "canadian".to_string()],
            citation: String::new(),
        }
    }

    #[test]
    fn test_reference_accessors() {
        let r = reference();
        let record = SearchableRecord::from(&r);
        assert_eq!(record.kind(), ResultKind::Reference);
        assert_eq!(record.description(), None);
        assert_eq!(record.author(), Some("Irving Abella and Harold Troper"));
        assert_eq!(record.labels(), vec!["secondary", "canadian"]);
        assert_eq!(record.year(), Some(1982));
        assert_eq!(record.url(), "/sources?reference=ref-1");
    }

    #[test]
    fn test_event_labels_use_wire_names() {
        let event = TimelineEvent {
            id: "ms-st-louis".to_string(),
            title: "MS St. Louis".to_string(),
            date: NaiveDate::from_ymd_opt(1939, 6, 7).unwrap(),
            end_date: None,
            description: "Refused entry.".to_string(),
            long_description: None,
            categories: vec![EventCategory::Holocaust, EventCategory::CanadaPolicy],
            location: None,
            coordinates: None,
            sources: Vec::new(),
            media: Vec::new(),
            related_events: Vec::new(),
        };
        let record = SearchableRecord::from(&event);
        assert_eq!(record.labels(), vec!["holocaust", "canada-policy"]);
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(1939, 6, 7));
        assert_eq!(record.url(), "/timeline?event=ms-st-louis");
        assert_eq!(record.country(), None);
    }

    #[test]
    fn test_location_title_is_name() {
        let location = MapLocation {
            id: "auschwitz".to_string(),
            name: "Auschwitz-Birkenau".to_string(),
            description: String::new(),
            long_description: None,
            categories: vec![LocationCategory::DeathCamp],
            coordinates: Coordinates { lat: 50.0343, lng: 19.1779 },
            country: "Poland".to_string(),
            year_established: Some(1940),
            year_closed: Some(1945),
            sources: Vec::new(),
            media: Vec::new(),
            related_locations: Vec::new(),
            related_events: Vec::new(),
        };
        let record = SearchableRecord::from(&location);
        assert_eq!(record.title(), "Auschwitz-Birkenau");
        assert_eq!(record.country(), Some("Poland"));
        assert_eq!(record.url(), "/maps?location=auschwitz");
    }

    #[test]
    fn test_resource_tags_are_labels() {
        let resource = EducationalResource {
            id: "resource-11".to_string(),
            title: "Maus".to_string(),
            resource_type: ResourceType::Book,
            author: Some("Art Spiegelman".to_string()),
            year: Some(1991),
            description: String::new(),
            level: None,
            image_url: None,
            tags: vec!["Graphic Novel".to_string()],
            url: None,
            local_path: None,
        };
        let record = SearchableRecord::from(&resource);
        assert!(record.categories().is_empty());
        assert_eq!(record.labels(), vec!["Graphic Novel"]);
        assert_eq!(record.url(), "/resources?resource=resource-11");
    }
}
