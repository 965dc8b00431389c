//! Navigation seam between the search session and the host application.

use tracing::warn;

use memoria_core::defaults::{SEARCH_PATH, SEARCH_QUERY_PARAM};

/// Receives navigation requests issued by a controller.
///
/// The host application decides what "pushing" a URL means (router
/// history, a redirect, a log line in tests).
pub trait Navigator: Send + Sync {
    fn push(&self, url: &str);
}

/// Navigator that drops every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn push(&self, _url: &str) {}
}

/// Full-results page URL for `query`, e.g. `/search?q=none%20is%20too%20many`.
pub fn search_url(query: &str) -> String {
    format!(
        "{}?{}={}",
        SEARCH_PATH,
        SEARCH_QUERY_PARAM,
        urlencoding::encode(query)
    )
}

/// Decoded value of the first `name` parameter in `url`'s query string.
///
/// `+` decodes to a space. Values that are not valid percent-encoded UTF-8
/// are ignored.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != name {
            continue;
        }
        let value = value.replace('+', " ");
        return match urlencoding::decode(&value) {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(e) => {
                warn!(
                    subsystem = "search",
                    component = "navigation",
                    param = name,
                    error = %e,
                    "Ignoring undecodable query parameter"
                );
                None
            }
        };
    }
    None
}
