use finder_logging::finder_debug;

use crate::{SearchOutcome, SearchResponse};

/// Shortest search term that is worth a request.
pub const MIN_QUERY_CHARS: usize = 3;

/// Raw character count check; the term is not trimmed.
pub fn meets_min_length(term: &str) -> bool {
    term.chars().count() >= MIN_QUERY_CHARS
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Loaded(SearchResponse),
}

/// Request bookkeeping for the search fetcher.
///
/// Requests are keyed by term. Asking again for the current key is a no-op,
/// and a result is only applied when its term still matches the key, so a
/// slow response for an older term can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    key: Option<String>,
    state: FetchState,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the fetcher at `term`. `None` or an empty term is the
    /// no-request sentinel.
    ///
    /// Returns the term to request when a new request must be issued.
    pub fn query(&mut self, term: Option<&str>) -> Option<String> {
        let term = match term {
            Some(term) if !term.is_empty() => term,
            _ => {
                self.key = None;
                self.state = FetchState::Idle;
                return None;
            }
        };
        if self.key.as_deref() == Some(term) {
            return None;
        }
        self.key = Some(term.to_string());
        self.state = FetchState::Loading;
        Some(term.to_string())
    }

    /// Applies the outcome of the request tagged `term`.
    ///
    /// Returns `false` when the outcome was stale and discarded.
    pub fn resolve(&mut self, term: &str, outcome: SearchOutcome) -> bool {
        if self.key.as_deref() != Some(term) || self.state != FetchState::Loading {
            finder_debug!(
                "Discarding stale search result term={:?} current={:?}",
                term,
                self.key
            );
            return false;
        }
        self.state = match outcome {
            Ok(response) => FetchState::Loaded(response),
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn data(&self) -> Option<&SearchResponse> {
        match &self.state {
            FetchState::Loaded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(message: &str) -> SearchResponse {
        SearchResponse::Rejected {
            message: message.to_string(),
        }
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        assert!(!meets_min_length("ab"));
        assert!(meets_min_length("abc"));
        assert!(!meets_min_length("é€"));
        assert!(meets_min_length("  a"));
    }

    #[test]
    fn sentinel_is_idle_without_request() {
        let mut query = SearchQuery::new();
        assert_eq!(query.query(None), None);
        assert_eq!(query.query(Some("")), None);
        assert_eq!(query.state(), &FetchState::Idle);
        assert!(!query.is_loading());
        assert!(query.data().is_none());
        assert!(query.error().is_none());
    }

    #[test]
    fn same_term_is_requested_once() {
        let mut query = SearchQuery::new();
        assert_eq!(query.query(Some("heat")), Some("heat".to_string()));
        assert!(query.is_loading());
        assert_eq!(query.query(Some("heat")), None);
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut query = SearchQuery::new();
        query.query(Some("heat"));
        query.query(Some("alien"));

        assert!(!query.resolve("heat", Ok(rejected("late"))));
        assert!(query.is_loading());
        assert!(query.resolve("alien", Ok(rejected("Movie not found!"))));
        assert_eq!(query.data(), Some(&rejected("Movie not found!")));
    }

    #[test]
    fn failure_is_terminal_for_term() {
        let mut query = SearchQuery::new();
        query.query(Some("heat"));
        assert!(query.resolve("heat", Err("network error".to_string())));

        assert_eq!(query.error(), Some("network error"));
        assert_eq!(query.query(Some("heat")), None);
        assert!(!query.resolve("heat", Ok(rejected("again"))));
    }
}
