//! Cross-collection search: score, merge, rank, truncate.

use std::time::Instant;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use memoria_core::{MapLocation, RecordStore};

use crate::config::SearchConfig;
use crate::record::{ResultKind, SearchableRecord};
use crate::scorer::{score, ScoreWeights};
use crate::tokenizer::tokenize;

/// One ranked hit, detached from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub score: u32,
}

impl SearchResult {
    pub fn from_record(record: &SearchableRecord<'_>, score: u32) -> Self {
        Self {
            id: record.id().to_string(),
            title: record.title().to_string(),
            description: record.description().unwrap_or_default().to_string(),
            kind: record.kind(),
            url: record.url(),
            date: record.date(),
            year: record.year(),
            categories: record.categories().into_iter().map(str::to_string).collect(),
            tags: record.tags().to_vec(),
            score,
        }
    }
}

/// Score `records` against `words`, drop non-matches, and return the top
/// `limit` by descending score.
///
/// The sort is stable: equal scores keep their input order, so collections
/// concatenated earlier win ties.
pub fn rank<'a, I>(
    records: I,
    words: &[String],
    weights: &ScoreWeights,
    limit: usize,
) -> Vec<SearchResult>
where
    I: IntoIterator<Item = SearchableRecord<'a>>,
{
    if words.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = records
        .into_iter()
        .filter_map(|record| {
            let points = score(&record, words, weights);
            (points > 0).then(|| SearchResult::from_record(&record, points))
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

/// Every searchable record in the store, in collection order: events,
/// resources, references, then locations when enabled.
pub fn searchable_records<'a>(
    store: &'a RecordStore,
    include_locations: bool,
) -> impl Iterator<Item = SearchableRecord<'a>> + 'a {
    let locations: &'a [MapLocation] = if include_locations {
        store.locations()
    } else {
        &[]
    };
    store
        .events()
        .iter()
        .map(SearchableRecord::from)
        .chain(store.resources().iter().map(SearchableRecord::from))
        .chain(store.references().iter().map(SearchableRecord::from))
        .chain(locations.iter().map(SearchableRecord::from))
}

/// Search the whole store for `query`.
///
/// Returns an empty list when the query has no word of at least
/// `config.min_token_len` characters.
pub fn search_all(store: &RecordStore, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let start = Instant::now();
    let words = tokenize(query, config.min_token_len);
    if words.is_empty() {
        debug!(
            subsystem = "search",
            component = "aggregate",
            query,
            "No searchable words in query"
        );
        return Vec::new();
    }

    let results = rank(
        searchable_records(store, config.include_locations),
        &words,
        &config.weights,
        config.result_limit,
    );

    debug!(
        subsystem = "search",
        component = "aggregate",
        query,
        word_count = words.len(),
        result_count = results.len(),
        top_score = results.first().map(|r| r.score).unwrap_or(0),
        duration_ms = start.elapsed().as_millis() as u64,
        "Search complete"
    );
    results
}
