//! Query tokenization.

/// Split a raw query into lowercase search words.
///
/// The query is lowercased, trimmed and split on whitespace. Words shorter
/// than `min_len` characters are dropped, so "of" or "WW" never match
/// anything on their own.
pub fn tokenize(query: &str, min_len: usize) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}
