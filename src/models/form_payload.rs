use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Request body for creating (`POST`) or updating (`PUT`) a form.
///
/// Every write is a full overwrite of both `schema` and `name`; there is no
/// partial-update shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormPayload {
    /// Complete schema JSON to persist
    pub schema: JsonValue,

    /// Display name to persist
    pub name: String,
}

impl FormPayload {
    /// Build a payload from a schema value and a name.
    pub fn new(schema: JsonValue, name: impl Into<String>) -> Self {
        Self {
            schema,
            name: name.into(),
        }
    }
}
