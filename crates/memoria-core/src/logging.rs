//! Structured logging setup for memoria.
//!
//! ## Field vocabulary
//!
//! Every crate emits the same structured field names, so a log pipeline can
//! query the store, the search session and the controllers uniformly:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `subsystem` | "store", "search", "timeline", "map" |
//! | `component` | "aggregate", "session", "navigation" |
//! | `op` | operation name, e.g. "navigate_to_year", "focus_location" |
//! | `record_id` | record being operated on |
//! | `query` | search query text |
//! | `result_count` / `record_count` | sizes of results and collections |
//! | `current_year`, `window_start`, `window_end`, `fallback_year` | timeline decisions |
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Unused by the core; interaction paths are total |
//! | WARN  | Recoverable issue, fallback applied (bad env value) |
//! | INFO  | Lifecycle events (store loaded, subscriber installed) |
//! | DEBUG | Decision points (window computed, fallback year, ranking summary) |
//! | TRACE | Per-item iteration (individual scored records) |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_ENV_FILTER: &str = "memoria_core=info,memoria_search=info,memoria_timeline=info";

/// Install a global `tracing` subscriber for applications embedding memoria.
///
/// Environment variables:
/// - `RUST_LOG`   - standard env filter (default: [`DEFAULT_ENV_FILTER`])
/// - `LOG_FORMAT` - "json" or "text" (default: "text")
/// - `LOG_ANSI`   - "true"/"false" override ANSI colors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_tracing() -> crate::Result<()> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_ENV_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        let mut layer = tracing_subscriber::fmt::layer();
        if let Some(ansi) = log_ansi {
            layer = layer.with_ansi(ansi);
        }
        registry.with(layer).try_init()
    };

    installed.map_err(|e| crate::Error::Config(format!("tracing subscriber: {e}")))?;

    tracing::info!(log_format = %log_format, "Logging initialized");
    Ok(())
}
