use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A stored form as returned by the formbuilder backend.
///
/// The backend owns these records; the client only ever holds a transient
/// view fetched per call. Timestamps and the active flag are serde-defaulted
/// so older backends that omit them still parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRecord {
    /// Backend-assigned numeric ID
    pub id: u64,

    /// Display name of the form
    pub name: String,

    /// Schema JSON; absent when the record was stored without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<JsonValue>,

    /// ISO-8601 creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// ISO-8601 last-modified timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Whether the form is active; defaults to true when omitted
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
