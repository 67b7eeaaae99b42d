//! # Search UI state
//!
//! [`SearchUiState`] is the single mutation surface for search view state. The
//! application shell owns one instance and hands it to pages and the navbar through
//! context; every change goes through a method on this type.
//!
//! ## Plain setters
//!
//! `set_input_query`, `set_result`, `set_result_type`, `set_corrected_query`,
//! `set_loading`, `set_summary_loading`, `set_has_searched` and `reset_search` are
//! direct assignments with last-writer-wins semantics.
//!
//! ## Fenced search lifecycle
//!
//! A search goes through [`begin_search`](SearchUiState::begin_search), which hands
//! out a [`RequestId`] from a monotonic counter, and later
//! [`finish_search`](SearchUiState::finish_search) /
//! [`finish_summary`](SearchUiState::finish_summary). The finish methods apply only
//! when their ticket is still the latest one, so a slow response for an older query
//! can never overwrite the result of a newer query. Submitting the query that is
//! already in flight is suppressed.

use crate::dispatch::Dispatch;
use crate::models::{ResultType, SearchResult, SummaryUpdate};

/// Ticket identifying one search request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchUiState {
    pub input_query: String,
    pub result: Option<SearchResult>,
    pub result_type: Option<ResultType>,
    pub corrected_query: Option<String>,
    pub is_loading: bool,
    pub is_summary_loading: bool,
    pub has_searched: bool,
    /// Set when a summary refresh failed after the fast result rendered.
    pub summary_error: Option<String>,
    last_submitted: Option<String>,
    generation: u64,
}

impl SearchUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input_query(&mut self, query: impl Into<String>) {
        self.input_query = query.into();
    }

    pub fn set_result(&mut self, result: Option<SearchResult>) {
        self.result = result;
    }

    pub fn set_result_type(&mut self, result_type: Option<ResultType>) {
        self.result_type = result_type;
    }

    pub fn set_corrected_query(&mut self, query: Option<String>) {
        self.corrected_query = query;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_summary_loading(&mut self, loading: bool) {
        self.is_summary_loading = loading;
    }

    pub fn set_has_searched(&mut self, value: bool) {
        self.has_searched = value;
    }

    /// Back to the empty home-page state.
    ///
    /// Advances the generation so responses to searches started before the reset
    /// are treated as stale.
    pub fn reset_search(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    /// Whether the sources side panel is visible.
    pub fn shows_sidebar(&self) -> bool {
        crate::dispatch::shows_sidebar(self.result_type)
    }

    /// Start a search for `query`.
    ///
    /// Returns `None` for a blank query or when the same query is already in flight.
    pub fn begin_search(&mut self, query: &str) -> Option<RequestId> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if self.is_loading && self.last_submitted.as_deref() == Some(query) {
            tracing::debug!(query, "duplicate submission suppressed");
            return None;
        }

        self.generation += 1;
        self.last_submitted = Some(query.to_string());
        self.input_query = query.to_string();
        self.result = None;
        self.corrected_query = None;
        self.summary_error = None;
        self.is_loading = true;
        self.is_summary_loading = false;
        self.has_searched = true;
        Some(RequestId(self.generation))
    }

    /// Whether `id` belongs to the latest search.
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.generation
    }

    /// Apply the outcome of a search. Returns `false` if the ticket is stale.
    ///
    /// With `refresh_summary`, a concept result enters the summary sub-phase and the
    /// caller is expected to follow up with [`finish_summary`](Self::finish_summary).
    pub fn finish_search(
        &mut self,
        id: RequestId,
        outcome: Result<Dispatch, String>,
        refresh_summary: bool,
    ) -> bool {
        if !self.is_current(id) {
            tracing::debug!(request = id.0, latest = self.generation, "stale search response dropped");
            return false;
        }

        let dispatch = outcome.unwrap_or_else(Dispatch::failed);
        self.is_summary_loading =
            refresh_summary && matches!(dispatch.result, SearchResult::Universal(_));
        self.result_type = Some(dispatch.result_type);
        self.result = Some(dispatch.result);
        self.corrected_query = dispatch.corrected_query;
        self.is_loading = false;
        true
    }

    /// Merge a summary refresh into the current concept result.
    ///
    /// A failed refresh keeps the fast result and records the failure in
    /// [`summary_error`](Self::summary_error).
    pub fn finish_summary(&mut self, id: RequestId, outcome: Result<SummaryUpdate, String>) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.is_summary_loading = false;

        match outcome {
            Ok(update) => {
                if let Some(SearchResult::Universal(result)) = self.result.as_mut() {
                    result.merge_summary(update);
                }
            }
            Err(message) => {
                tracing::warn!("summary refresh failed: {}", message);
                self.summary_error = Some(message);
            }
        }
        true
    }

    /// Query to display in the results header.
    pub fn display_query(&self) -> &str {
        self.corrected_query.as_deref().unwrap_or(&self.input_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{decode, SearchEnvelope};
    use crate::models::{MathResult, UniversalResult, Website};

    fn concept(summary: &str, sites: usize) -> Dispatch {
        let websites = (0..sites)
            .map(|i| Website {
                url: format!("https://site{i}.example"),
                title: format!("Site {i}"),
                ..Default::default()
            })
            .collect();
        Dispatch {
            result_type: ResultType::Concept,
            result: SearchResult::Universal(UniversalResult {
                summary: summary.to_string(),
                websites: Some(websites),
                ..Default::default()
            }),
            corrected_query: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SearchUiState::new();
        assert_eq!(state.result_type, None);
        assert!(state.result.is_none());
        assert!(!state.is_loading);
        assert!(!state.has_searched);
        assert!(state.shows_sidebar());
    }

    #[test]
    fn test_begin_search_enters_loading() {
        let mut state = SearchUiState::new();
        state.set_result(Some(SearchResult::error("old")));

        let id = state.begin_search("  rust  ").unwrap();
        assert!(state.is_current(id));
        assert!(state.is_loading);
        assert!(state.has_searched);
        assert!(state.result.is_none());
        assert_eq!(state.input_query, "rust");
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut state = SearchUiState::new();
        assert!(state.begin_search("   ").is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_duplicate_in_flight_submission_suppressed() {
        let mut state = SearchUiState::new();
        let first = state.begin_search("rust").unwrap();
        assert!(state.begin_search("rust").is_none());
        assert!(state.is_current(first));

        // A different query still goes through
        assert!(state.begin_search("go").is_some());

        // Same query is allowed again once the previous one finished
        let mut state = SearchUiState::new();
        let id = state.begin_search("rust").unwrap();
        state.finish_search(id, Ok(concept("r", 0)), false);
        assert!(state.begin_search("rust").is_some());
    }

    #[test]
    fn test_math_scenario() {
        let mut state = SearchUiState::new();
        let id = state.begin_search("5+5").unwrap();
        let envelope = SearchEnvelope {
            result_type: "math".to_string(),
            corrected_query: None,
            content: r#"{"expression":"5+5","result":"10"}"#.to_string(),
        };
        assert!(state.finish_search(id, Ok(decode(&envelope)), true));

        assert_eq!(state.result_type, Some(ResultType::Math));
        assert_eq!(
            state.result,
            Some(SearchResult::Math(MathResult {
                expression: "5+5".to_string(),
                result: "10".to_string(),
            }))
        );
        assert!(!state.is_loading);
        assert!(!state.is_summary_loading);
        assert!(!state.shows_sidebar());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = SearchUiState::new();
        let a = state.begin_search("a").unwrap();
        let b = state.begin_search("b").unwrap();

        // "b" resolves first, then the slow "a" arrives
        assert!(state.finish_search(b, Ok(concept("about b", 1)), false));
        assert!(!state.finish_search(a, Ok(concept("about a", 3)), false));

        let Some(SearchResult::Universal(result)) = &state.result else {
            panic!("expected a universal result");
        };
        assert_eq!(result.summary, "about b");
        assert_eq!(state.input_query, "b");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let mut state = SearchUiState::new();
        let a = state.begin_search("a").unwrap();
        let _b = state.begin_search("b").unwrap();
        assert!(!state.finish_search(a, Err("timeout".to_string()), false));
        assert!(state.is_loading);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_failure_becomes_error_result() {
        let mut state = SearchUiState::new();
        let id = state.begin_search("q").unwrap();
        state.finish_search(id, Err("Internal Server Error".to_string()), true);
        assert_eq!(state.result_type, Some(ResultType::Error));
        assert_eq!(
            state.result,
            Some(SearchResult::error("Internal Server Error"))
        );
        assert!(!state.is_summary_loading);
    }

    #[test]
    fn test_summary_phase_merges_into_result() {
        let mut state = SearchUiState::new();
        let id = state.begin_search("bitcoin").unwrap();
        state.finish_search(id, Ok(concept("fast", 2)), true);
        assert!(state.is_summary_loading);
        assert!(state.shows_sidebar());

        let update = SummaryUpdate {
            summary: Some("full".to_string()),
            ..Default::default()
        };
        assert!(state.finish_summary(id, Ok(update)));
        assert!(!state.is_summary_loading);

        let Some(SearchResult::Universal(result)) = &state.result else {
            panic!("expected a universal result");
        };
        assert_eq!(result.summary, "full");
        assert_eq!(result.websites().len(), 2);
    }

    #[test]
    fn test_summary_failure_keeps_fast_result() {
        let mut state = SearchUiState::new();
        let id = state.begin_search("bitcoin").unwrap();
        state.finish_search(id, Ok(concept("fast", 1)), true);
        assert!(state.finish_summary(id, Err("summary unavailable".to_string())));

        assert!(!state.is_summary_loading);
        assert_eq!(state.summary_error.as_deref(), Some("summary unavailable"));
        let Some(SearchResult::Universal(result)) = &state.result else {
            panic!("expected a universal result");
        };
        assert_eq!(result.summary, "fast");
    }

    #[test]
    fn test_stale_summary_is_discarded() {
        let mut state = SearchUiState::new();
        let a = state.begin_search("a").unwrap();
        state.finish_search(a, Ok(concept("a", 0)), true);
        let b = state.begin_search("b").unwrap();
        state.finish_search(b, Ok(concept("b", 0)), true);

        let update = SummaryUpdate {
            summary: Some("summary of a".to_string()),
            ..Default::default()
        };
        assert!(!state.finish_summary(a, Ok(update)));
        assert!(state.is_summary_loading);
    }

    #[test]
    fn test_reset_search_invalidates_in_flight() {
        let mut state = SearchUiState::new();
        let id = state.begin_search("a").unwrap();
        state.reset_search();

        assert!(!state.is_loading);
        assert!(!state.has_searched);
        assert!(state.input_query.is_empty());
        assert!(!state.finish_search(id, Ok(concept("a", 0)), false));
        assert!(state.result.is_none());

        let next = state.begin_search("a").unwrap();
        assert!(next > id);
    }

    #[test]
    fn test_display_query_prefers_correction() {
        let mut state = SearchUiState::new();
        let id = state.begin_search("bitcoinn").unwrap();
        let mut dispatch = concept("x", 0);
        dispatch.corrected_query = Some("bitcoin".to_string());
        state.finish_search(id, Ok(dispatch), false);
        assert_eq!(state.display_query(), "bitcoin");
    }
}
