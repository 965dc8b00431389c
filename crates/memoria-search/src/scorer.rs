//! Multi-field weighted relevance scoring.
//!
//! Each query word is checked independently against every field and the
//! points are summed. Matching is case-insensitive substring containment.
//!
//! | Field              | Condition                     | Points |
//! |--------------------|-------------------------------|--------|
//! | title              | contains word                 | 10     |
//! | title              | equals word                   | +50    |
//! | description        | contains word                 | 5      |
//! | long description   | contains word                 | 3      |
//! | author             | contains word                 | 8      |
//! | categories ∪ tags  | any member contains word      | 7      |
//! | country            | contains word                 | 6      |
//!
//! The label weight is awarded once per word, however many labels match.

use serde::{Deserialize, Serialize};
use tracing::trace;

use memoria_core::defaults::{
    SCORE_AUTHOR, SCORE_COUNTRY, SCORE_DESCRIPTION, SCORE_LABEL, SCORE_LONG_DESCRIPTION,
    SCORE_TITLE, SCORE_TITLE_EXACT,
};

use crate::record::SearchableRecord;

/// Points awarded per matching field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    pub title: u32,
    /// Bonus on top of `title` when the whole title equals the word.
    pub title_exact: u32,
    pub description: u32,
    pub long_description: u32,
    pub author: u32,
    pub label: u32,
    pub country: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title: SCORE_TITLE,
            title_exact: SCORE_TITLE_EXACT,
            description: SCORE_DESCRIPTION,
            long_description: SCORE_LONG_DESCRIPTION,
            author: SCORE_AUTHOR,
            label: SCORE_LABEL,
            country: SCORE_COUNTRY,
        }
    }
}

/// Score one record against already-tokenized, lowercase `words`.
///
/// Returns 0 when nothing matches or `words` is empty.
pub fn score(record: &SearchableRecord<'_>, words: &[String], weights: &ScoreWeights) -> u32 {
    if words.is_empty() {
        return 0;
    }

    let title = record.title().to_lowercase();
    let description = lowercase(record.description());
    let long_description = lowercase(record.long_description());
    let author = lowercase(record.author());
    let country = lowercase(record.country());
    let labels: Vec<String> = record.labels().iter().map(|l| l.to_lowercase()).collect();

    let mut total = 0;
    for word in words {
        let word = word.as_str();
        if title.contains(word) {
            total += weights.title;
            if title == word {
                total += weights.title_exact;
            }
        }
        if contains(&description, word) {
            total += weights.description;
        }
        if contains(&long_description, word) {
            total += weights.long_description;
        }
        if contains(&author, word) {
            total += weights.author;
        }
        if labels.iter().any(|label| label.contains(word)) {
            total += weights.label;
        }
        if contains(&country, word) {
            total += weights.country;
        }
    }

    trace!(
        kind = record.kind().as_str(),
        record_id = record.id(),
        score = total,
        "Record scored"
    );
    total
}

fn lowercase(field: Option<&str>) -> Option<String> {
    field.map(str::to_lowercase)
}

fn contains(field: &Option<String>, word: &str) -> bool {
    field.as_deref().is_some_and(|f| f.contains(word))
}
