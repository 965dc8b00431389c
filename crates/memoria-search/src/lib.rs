//! # memoria-search
//!
//! Weighted multi-collection search for memoria.
//!
//! This crate provides:
//! - Query tokenization
//! - A field-weighted relevance scorer over events, resources, references
//!   and (optionally) map locations
//! - Cross-collection ranking with a result limit
//! - A debounced, cancellable search session with a type filter and a
//!   navigation hook
//!
//! ## Example
//!
//! ```
//! use memoria_core::RecordStore;
//! use memoria_search::{search_all, SearchConfig};
//!
//! let store = RecordStore::default();
//! let results = search_all(&store, "kristallnacht", &SearchConfig::default());
//! assert!(results.is_empty());
//! ```

pub mod aggregate;
pub mod config;
pub mod navigation;
pub mod record;
pub mod scorer;
pub mod session;
pub mod tokenizer;

pub use aggregate::{rank, search_all, searchable_records, SearchResult};
pub use config::SearchConfig;
pub use navigation::{query_param, search_url, Navigator, NoopNavigator};
pub use record::{ResultKind, SearchableRecord};
pub use scorer::{score, ScoreWeights};
pub use session::{SearchSession, SearchState};
pub use tokenizer::tokenize;
