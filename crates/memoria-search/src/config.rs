//! Runtime configuration for search.
//!
//! Defaults come from [`memoria_core::defaults`]. Each field can be
//! overridden through an environment variable; unparseable values are
//! logged and replaced by the default.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use memoria_core::defaults::{SEARCH_DEBOUNCE_MS, SEARCH_MIN_TOKEN_LEN, SEARCH_RESULT_LIMIT};

use crate::scorer::ScoreWeights;

pub const DEBOUNCE_MS_ENV: &str = "MEMORIA_SEARCH_DEBOUNCE_MS";
pub const RESULT_LIMIT_ENV: &str = "MEMORIA_SEARCH_RESULT_LIMIT";
pub const MIN_TOKEN_LEN_ENV: &str = "MEMORIA_SEARCH_MIN_TOKEN_LEN";
pub const INCLUDE_LOCATIONS_ENV: &str = "MEMORIA_SEARCH_INCLUDE_LOCATIONS";

/// Search behaviour knobs.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use memoria_search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_debounce(Duration::from_millis(150))
///     .with_locations(true);
/// assert_eq!(config.result_limit, 50);
/// assert!(config.include_locations);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before scoring runs.
    pub debounce: Duration,
    /// Maximum number of ranked results.
    pub result_limit: usize,
    /// Query words shorter than this (in characters) are ignored.
    pub min_token_len: usize,
    /// Also score map locations. Off by default.
    pub include_locations: bool,
    pub weights: ScoreWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            result_limit: SEARCH_RESULT_LIMIT,
            min_token_len: SEARCH_MIN_TOKEN_LEN,
            include_locations: false,
            weights: ScoreWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Build from environment variables.
    ///
    /// Environment variables:
    /// - `MEMORIA_SEARCH_DEBOUNCE_MS` (default: 300)
    /// - `MEMORIA_SEARCH_RESULT_LIMIT` (default: 50)
    /// - `MEMORIA_SEARCH_MIN_TOKEN_LEN` (default: 3)
    /// - `MEMORIA_SEARCH_INCLUDE_LOCATIONS` (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            debounce: Duration::from_millis(parse_env(DEBOUNCE_MS_ENV, SEARCH_DEBOUNCE_MS)),
            result_limit: parse_env(RESULT_LIMIT_ENV, defaults.result_limit),
            min_token_len: parse_env(MIN_TOKEN_LEN_ENV, defaults.min_token_len),
            include_locations: parse_bool_env(INCLUDE_LOCATIONS_ENV, defaults.include_locations),
            weights: defaults.weights,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    pub fn with_locations(mut self, include: bool) -> Self {
        self.include_locations = include;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    subsystem = "search",
                    key,
                    value = %raw,
                    default = %default,
                    "Invalid environment value, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

/// Recognizes "true", "1", "yes", "on" and their negatives, case-insensitive.
fn parse_bool_env(key: &str, default: bool) -> bool {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            warn!(
                subsystem = "search",
                key,
                value = %raw,
                default,
                "Invalid boolean environment value, using default"
            );
            default
        }
    }
}
