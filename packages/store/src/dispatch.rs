//! # Result-type dispatch
//!
//! The instant-answer endpoint answers with a [`SearchEnvelope`]: a `result_type`
//! discriminant, an optional spelling correction, and a `content` field that is
//! itself a JSON document encoded as a string. [`decode`] turns that envelope into a
//! [`Dispatch`] in one step, so the rest of the client only ever sees a typed
//! [`SearchResult`].
//!
//! ## Rules
//!
//! 1. `content` that is not valid JSON → [`ResultType::Error`].
//! 2. A decoded object carrying an `error` field → [`ResultType::Error`], whatever
//!    the declared tag.
//! 3. A tag outside the closed [`ResultType`] set → [`ResultType::Error`].
//! 4. A payload whose shape does not fit the declared tag → [`ResultType::Error`].
//!
//! None of these paths panic; the worst case is the generic error block.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{ErrorResult, ResultType, SearchResult};

pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse search result";

/// Wire envelope of `POST /search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub result_type: String,
    #[serde(default)]
    pub corrected_query: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// A decoded envelope ready to be stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub result_type: ResultType,
    pub result: SearchResult,
    pub corrected_query: Option<String>,
}

impl Dispatch {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            result_type: ResultType::Error,
            result: SearchResult::error(message),
            corrected_query: None,
        }
    }
}

/// Decode an envelope into a typed result.
pub fn decode(envelope: &SearchEnvelope) -> Dispatch {
    let corrected_query = envelope
        .corrected_query
        .as_ref()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    let value: Value = match serde_json::from_str(&envelope.content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                result_type = %envelope.result_type,
                "search content is not valid JSON: {}",
                e
            );
            return Dispatch {
                corrected_query,
                ..Dispatch::failed(PARSE_FAILURE_MESSAGE)
            };
        }
    };

    let result = decode_value(&envelope.result_type, value);
    Dispatch {
        result_type: result.result_type(),
        result,
        corrected_query,
    }
}

/// Decode an already-parsed payload under a declared tag.
pub fn decode_value(tag: &str, value: Value) -> SearchResult {
    if let Some(message) = error_field(&value) {
        return SearchResult::error(message);
    }

    let Some(result_type) = ResultType::parse(tag) else {
        tracing::warn!(tag, "unknown result type");
        return SearchResult::error(format!("Unsupported result type: {tag}"));
    };

    match result_type {
        ResultType::Concept => typed(value).map(SearchResult::Universal),
        ResultType::Math => typed(value).map(SearchResult::Math),
        ResultType::UnitConversion => typed(value).map(SearchResult::UnitConversion),
        ResultType::CurrencyConversion => typed(value).map(SearchResult::CurrencyConversion),
        ResultType::Timer => typed(value).map(SearchResult::Timer),
        ResultType::Error => typed::<ErrorResult>(value).map(SearchResult::Error),
    }
    .unwrap_or_else(|e| {
        tracing::warn!(%result_type, "payload does not match its result type: {}", e);
        SearchResult::error(PARSE_FAILURE_MESSAGE)
    })
}

/// Whether the sources side panel is shown for the active result type.
pub fn shows_sidebar(result_type: Option<ResultType>) -> bool {
    matches!(result_type, None | Some(ResultType::Concept))
}

/// The message of an `error` field, if the payload carries one.
fn error_field(value: &Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    Some(match error {
        Value::String(s) if !s.trim().is_empty() => s.clone(),
        Value::Null => "Unknown error".to_string(),
        Value::String(_) => "Unknown error".to_string(),
        other => other.to_string(),
    })
}

fn typed<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    if !value.is_object() {
        return Err(serde::de::Error::custom("expected a JSON object"));
    }
    serde_json::from_value(value)
}
