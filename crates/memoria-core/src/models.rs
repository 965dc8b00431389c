//! Record types for the memoria datasets.
//!
//! Every record is immutable once loaded. Field names follow the camelCase
//! shape of the dataset files; dates are ISO `YYYY-MM-DD` strings on the wire
//! and `NaiveDate` in memory.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// =============================================================================
// CATEGORIES
// =============================================================================

/// Thematic bucket of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Holocaust,
    Ww2,
    CanadaPolicy,
    CanadaResponse,
    PostWar,
    SurvivorStories,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Holocaust,
        EventCategory::Ww2,
        EventCategory::CanadaPolicy,
        EventCategory::CanadaResponse,
        EventCategory::PostWar,
        EventCategory::SurvivorStories,
    ];

    /// Wire identifier, e.g. `"canada-policy"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Holocaust => "holocaust",
            Self::Ww2 => "ww2",
            Self::CanadaPolicy => "canada-policy",
            Self::CanadaResponse => "canada-response",
            Self::PostWar => "post-war",
            Self::SurvivorStories => "survivor-stories",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Holocaust => "Holocaust Events",
            Self::Ww2 => "World War II",
            Self::CanadaPolicy => "Canadian Policy",
            Self::CanadaResponse => "Canadian Response",
            Self::PostWar => "Post-War Period",
            Self::SurvivorStories => "Survivor Stories",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Holocaust => {
                "Key events directly related to the Holocaust and persecution of Jews"
            }
            Self::Ww2 => "Major World War II events that provide context for the Holocaust",
            Self::CanadaPolicy => {
                "Canadian government policies related to Jewish refugees and immigration"
            }
            Self::CanadaResponse => "How Canada and Canadians responded to the Holocaust",
            Self::PostWar => "Events after World War II related to Holocaust survivors and memory",
            Self::SurvivorStories => "Personal stories and experiences of Holocaust survivors",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a map location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationCategory {
    ConcentrationCamp,
    DeathCamp,
    Ghetto,
    Memorial,
    Museum,
    RefugeeCenter,
    CanadianConnection,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 7] = [
        LocationCategory::ConcentrationCamp,
        LocationCategory::DeathCamp,
        LocationCategory::Ghetto,
        LocationCategory::Memorial,
        LocationCategory::Museum,
        LocationCategory::RefugeeCenter,
        LocationCategory::CanadianConnection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConcentrationCamp => "concentration-camp",
            Self::DeathCamp => "death-camp",
            Self::Ghetto => "ghetto",
            Self::Memorial => "memorial",
            Self::Museum => "museum",
            Self::RefugeeCenter => "refugee-center",
            Self::CanadianConnection => "canadian-connection",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ConcentrationCamp => "Concentration Camps",
            Self::DeathCamp => "Death Camps",
            Self::Ghetto => "Ghettos",
            Self::Memorial => "Memorials",
            Self::Museum => "Museums",
            Self::RefugeeCenter => "Refugee Centers",
            Self::CanadianConnection => "Canadian Connections",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SHARED TYPES
// =============================================================================

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Bibliographic source attached to an event or location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_date: Option<NaiveDate>,
    pub citation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Document,
}

/// Image, clip or document illustrating a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

// =============================================================================
// TIMELINE EVENT
// =============================================================================

/// A dated entry on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Last day of a multi-day event; never before `date` once validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub categories: Vec<EventCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_events: Vec<String>,
}

impl TimelineEvent {
    /// Calendar year the event starts in.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar year the event ends in (its start year when open-ended).
    pub fn end_year(&self) -> i32 {
        self.end_date.unwrap_or(self.date).year()
    }
}

// =============================================================================
// MAP LOCATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLocation {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub categories: Vec<LocationCategory>,
    pub coordinates: Coordinates,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_established: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_closed: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_events: Vec<String>,
}

// =============================================================================
// EDUCATIONAL RESOURCE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Book,
    Article,
    Video,
    Website,
    Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalResource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub description: String,
    /// Reading level, e.g. "Beginner", "All Levels".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

// =============================================================================
// REFERENCE
// =============================================================================

/// Entry on the sources and references page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form source categories ("primary", "canadian", ...).
    #[serde(default)]
    pub categories: Vec<String>,
    pub citation: String,
}
