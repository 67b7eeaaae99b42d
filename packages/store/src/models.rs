//! # Search result model
//!
//! The strongly-typed shape of everything the instant-answer endpoint can return.
//! A payload is decoded once (see [`crate::dispatch`]) into a [`SearchResult`] and
//! every rendering block then works on its own variant, never on raw JSON.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ResultType`] | The closed set of server discriminants (`concept`, `math`, `unit_conversion`, `currency_conversion`, `timer`, `error`). |
//! | [`SearchResult`] | The tagged union, one variant per rendering block. |
//! | [`UniversalResult`] | General-purpose answer: markdown summary, facts, related topics, widgets, source websites. |
//! | [`MathResult`] / [`UnitConversion`] / [`CurrencyConversion`] / [`TimerResult`] | Instant answers. |
//! | [`ErrorResult`] | Anything that could not be rendered as one of the above. |
//! | [`Website`] | A citation/source entry. |
//!
//! Every field is `#[serde(default)]` and an explicit `null` reads as a missing
//! field: a payload that carries only some fields still decodes, and the block
//! shows what is present. Numeric fields also accept integral floats and numeric
//! strings.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-declared result discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Concept,
    Math,
    UnitConversion,
    CurrencyConversion,
    Timer,
    Error,
}

impl ResultType {
    pub const ALL: [ResultType; 6] = [
        ResultType::Concept,
        ResultType::Math,
        ResultType::UnitConversion,
        ResultType::CurrencyConversion,
        ResultType::Timer,
        ResultType::Error,
    ];

    /// Parse a wire tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "concept" => Some(Self::Concept),
            "math" => Some(Self::Math),
            "unit_conversion" => Some(Self::UnitConversion),
            "currency_conversion" => Some(Self::CurrencyConversion),
            "timer" => Some(Self::Timer),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Math => "math",
            Self::UnitConversion => "unit_conversion",
            Self::CurrencyConversion => "currency_conversion",
            Self::Timer => "timer",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A citation or source entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Website {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default, rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

impl Website {
    /// Title to display, falling back to the URL.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub value: String,
}

/// Descriptor for an embedded widget (currently rendered as a map placeholder).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UniversalResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facts: Vec<Fact>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_topics: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub websites: Option<Vec<Website>>,
}

/// Partial update produced by the summary refresh call.
///
/// Absent fields leave the existing result untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryUpdate {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub facts: Option<Vec<Fact>>,
    #[serde(default)]
    pub related_topics: Option<Vec<String>>,
    #[serde(default)]
    pub widgets: Option<Vec<Widget>>,
    #[serde(default)]
    pub websites: Option<Vec<Website>>,
}

impl UniversalResult {
    /// Shallow-merge a summary refresh into this result.
    pub fn merge_summary(&mut self, update: SummaryUpdate) {
        if let Some(summary) = update.summary {
            self.summary = summary;
        }
        if let Some(facts) = update.facts {
            self.facts = facts;
        }
        if let Some(topics) = update.related_topics {
            self.related_topics = topics;
        }
        if let Some(widgets) = update.widgets {
            self.widgets = widgets;
        }
        if update.websites.is_some() {
            self.websites = update.websites;
        }
    }

    pub fn websites(&self) -> &[Website] {
        self.websites.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MathResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub expression: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub result: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub result: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConversion {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub result: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub rate: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerResult {
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub seconds: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

/// A decoded search payload, one variant per rendering block.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    Universal(UniversalResult),
    Math(MathResult),
    UnitConversion(UnitConversion),
    CurrencyConversion(CurrencyConversion),
    Timer(TimerResult),
    Error(ErrorResult),
}

impl SearchResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorResult {
            error: message.into(),
        })
    }

    /// The discriminant this variant renders under.
    pub fn result_type(&self) -> ResultType {
        match self {
            Self::Universal(_) => ResultType::Concept,
            Self::Math(_) => ResultType::Math,
            Self::UnitConversion(_) => ResultType::UnitConversion,
            Self::CurrencyConversion(_) => ResultType::CurrencyConversion,
            Self::Timer(_) => ResultType::Timer,
            Self::Error(_) => ResultType::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Accept `"10"`, `10` or `10.5` for fields the backend is loose about.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Explicit `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A number or a numeric string. `null` is zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let amount = match value {
        None | Some(serde_json::Value::Null) => return Ok(0.0),
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    amount
        .filter(|a| a.is_finite())
        .ok_or_else(|| serde::de::Error::custom("expected a numeric amount"))
}

/// Whole, non-negative seconds given as an integer, an integral float or a
/// numeric string. `null` is zero.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let seconds = match value {
        None | Some(serde_json::Value::Null) => return Ok(0),
        Some(serde_json::Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(whole_seconds)),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_seconds))
        }
        Some(_) => None,
    };
    seconds.ok_or_else(|| serde::de::Error::custom("expected whole non-negative seconds"))
}

fn whole_seconds(secs: f64) -> Option<u64> {
    (secs.is_finite() && secs >= 0.0 && secs.fract() == 0.0 && secs < u64::MAX as f64)
        .then_some(secs as u64)
}
