//! Wire types for the greetings endpoint.
//!
//! The endpoint owns storage and id generation; the client only reads
//! [`GreetingRecord`] values and writes [`GreetingDraft`] bodies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A stored video greeting as returned by `GET <endpoint>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRecord {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub teacher_name: String,
    /// Creation timestamp as formatted by the server. Not rendered.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

/// Form contents posted to create a greeting.
///
/// Serializes to exactly `{title, file_url, teacher_name}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingDraft {
    pub title: String,
    pub file_url: String,
    pub teacher_name: String,
}

impl GreetingDraft {
    /// Mirrors the `required` attribute on the form inputs: every field must
    /// hold at least one character. Whitespace counts.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.file_url.is_empty() && !self.teacher_name.is_empty()
    }
}

/// Response body of `POST <endpoint>`.
///
/// Any JSON value is accepted, whatever the status it came with: an error
/// object such as `{"error": "..."}` simply yields no `id`. Only a body that
/// is not JSON at all fails to decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct CreatedGreeting {
    pub id: Option<String>,
    pub title: Option<String>,
    pub share_url: Option<String>,
}

impl From<serde_json::Value> for CreatedGreeting {
    fn from(value: serde_json::Value) -> Self {
        let field = |key: &str| match value.get(key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self { id: field("id"), title: field("title"), share_url: field("share_url") }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
