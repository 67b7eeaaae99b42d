//! Ranked search (`GET /api/search`) and the web sources fallback
//! (`POST /search/web`).

use serde::{Deserialize, Serialize};
use store::Website;

/// Optional query parameters of `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub session_id: Option<String>,
}

impl SearchOptions {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Query pairs, `q` first. Zero and empty values are left out.
    pub fn query_pairs(&self, q: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", q.to_string())];
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|o| *o > 0) {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(session) = self.session_id.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("session_id", session.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<SearchHit>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub instant_answer: Option<InstantAnswer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    #[serde(default)]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl SearchHit {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => &self.url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InstantAnswer {
    pub answer_type: String,
    pub value: String,
}

impl InstantAnswer {
    pub fn label(&self) -> &'static str {
        match self.answer_type.as_str() {
            "calculation" => "Calculator",
            "definition" => "Definition",
            "timer" => "Timer",
            _ => "Instant Answer",
        }
    }
}

/// Body of `POST /search/web`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WebSources {
    #[serde(default)]
    pub websites: Vec<Website>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skip_empty() {
        let opts = SearchOptions {
            limit: Some(20),
            offset: Some(0),
            session_id: Some(String::new()),
        };
        assert_eq!(
            opts.query_pairs("rust"),
            vec![("q", "rust".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn test_search_response_tolerates_nulls() {
        let body = r#"{
            "query": "rust",
            "results": [{"id":"1","url":"https://rust-lang.org/learn","title":null,"snippet":"Learn","score":0.87}],
            "total": 1,
            "instant_answer": null
        }"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].display_title(), "https://rust-lang.org/learn");
        assert!(resp.instant_answer.is_none());
    }
}
